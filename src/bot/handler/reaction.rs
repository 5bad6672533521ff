use serenity::all::{Context, Reaction};

use crate::{bot::convert, command::Dispatcher};

/// Resolves the reacting user and the reacted message, then hands the event to the
/// dispatcher.
pub async fn handle_reaction_add(dispatcher: &Dispatcher, ctx: Context, reaction: Reaction) {
    let user = match reaction.user(&ctx).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Failed to fetch reacting user: {:?}", e);
            return;
        }
    };

    // The bot adds navigation reactions to its own help pages
    if user.bot {
        return;
    }

    let message = match reaction.message(&ctx).await {
        Ok(message) => message,
        Err(e) => {
            tracing::error!(
                "Failed to fetch message {} for reaction: {:?}",
                reaction.message_id,
                e
            );
            return;
        }
    };

    dispatcher
        .handle_reaction(&convert::reaction_event(&reaction.emoji, &user, &message))
        .await;
}
