//! Conversions from Serenity objects to the platform-neutral event model.

use serenity::all::{Message, ReactionType, User, UserId};

use crate::model::{
    embed::{Embed, EmbedField},
    message::{IncomingMessage, ReactedMessage, ReactionEvent},
};

pub fn incoming_message(message: &Message, bot_id: UserId) -> IncomingMessage {
    IncomingMessage {
        message_id: message.id.get(),
        channel_id: message.channel_id.get(),
        guild_id: message.guild_id.map(|guild_id| guild_id.get()),
        author_id: message.author.id.get(),
        author_is_bot: message.author.bot,
        bot_id: bot_id.get(),
        mentions_bot: message.mentions_user_id(bot_id),
        content: message.content.clone(),
    }
}

pub fn embed(embed: &serenity::all::Embed) -> Embed {
    Embed {
        title: embed.title.clone(),
        description: embed.description.clone(),
        color: embed.colour.map(|colour| colour.0),
        fields: embed
            .fields
            .iter()
            .map(|field| EmbedField {
                name: field.name.clone(),
                value: field.value.clone(),
                inline: field.inline,
            })
            .collect(),
    }
}

/// Unicode glyph for standard emoji, Discord's mention format for custom emoji.
pub fn emoji(reaction: &ReactionType) -> String {
    match reaction {
        ReactionType::Unicode(glyph) => glyph.clone(),
        other => other.to_string(),
    }
}

pub fn reaction_event(emoji_type: &ReactionType, user: &User, message: &Message) -> ReactionEvent {
    ReactionEvent {
        user_id: user.id.get(),
        user_is_bot: user.bot,
        emoji: emoji(emoji_type),
        message: ReactedMessage {
            channel_id: message.channel_id.get(),
            message_id: message.id.get(),
            embed: message.embeds.first().map(embed),
        },
    }
}
