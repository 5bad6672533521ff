use crate::model::embed::Embed;

/// A chat message delivered to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub message_id: u64,
    pub channel_id: u64,
    /// `None` when the message was received as a direct message.
    pub guild_id: Option<u64>,
    pub author_id: u64,
    pub author_is_bot: bool,
    /// User id of the bot receiving the message.
    pub bot_id: u64,
    /// Whether the bot's user is among the message's mentions.
    pub mentions_bot: bool,
    pub content: String,
}

impl IncomingMessage {
    pub fn is_direct(&self) -> bool {
        self.guild_id.is_none()
    }
}

/// A message a reaction was added to.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactedMessage {
    pub channel_id: u64,
    pub message_id: u64,
    /// First embed attached to the message, if any.
    pub embed: Option<Embed>,
}

/// A reaction-added event.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionEvent {
    pub user_id: u64,
    pub user_is_bot: bool,
    /// Unicode glyph for standard emoji, `name:id` for custom guild emoji.
    pub emoji: String,
    pub message: ReactedMessage,
}
