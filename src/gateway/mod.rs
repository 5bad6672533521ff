//! Outbound side of the chat platform.
//!
//! Everything the framework does to the platform (sending replies and embeds, adding
//! reactions, deleting help pages, looking up member roles for access checks) goes through
//! [`ChatGateway`]. Production uses [`discord::SerenityGateway`]; tests use a recording fake.

pub mod discord;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::{error::AppError, model::embed::Embed};

/// Where an outgoing message is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// A guild text channel or an already-open DM channel.
    Channel(u64),
    /// The direct-message channel of the given user, opened on demand.
    DirectMessage(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutgoingMessage {
    Text(String),
    Embed(Embed),
}

/// Identifies a message the gateway has sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: u64,
    pub message_id: u64,
}

/// Role membership of a guild member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberRoles {
    pub role_ids: Vec<u64>,
    /// Holds the platform "administrator" capability (owner or an administrator role).
    pub is_administrator: bool,
}

#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn send(
        &self,
        destination: Destination,
        message: OutgoingMessage,
    ) -> Result<SentMessage, AppError>;

    async fn react(&self, channel_id: u64, message_id: u64, emoji: &str) -> Result<(), AppError>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError>;

    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<MemberRoles, AppError>;
}
