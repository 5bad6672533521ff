use serenity::all::{Context, Message};

use crate::{bot::convert, command::Dispatcher};

/// Converts a received message and hands it to the dispatcher.
pub async fn handle_message(dispatcher: &Dispatcher, ctx: Context, message: Message) {
    let bot_id = ctx.cache.current_user().id;

    // Never answer ourselves
    if message.author.id == bot_id {
        return;
    }

    dispatcher
        .handle_message(&convert::incoming_message(&message, bot_id))
        .await;
}
