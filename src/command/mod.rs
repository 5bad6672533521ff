//! Pluggable chat commands and their dispatch.
//!
//! Every command implements [`Command`]. The [`registry::CommandRegistry`] maps invocation
//! tokens onto handler instances and the [`dispatch::Dispatcher`] routes incoming messages
//! to them, turning every handler failure into a canned reply.

pub mod arguments;
pub mod dispatch;
pub mod help;
pub mod my_guild;
pub mod parse;
pub mod registry;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    access::AccessChain,
    error::AppError,
    gateway::{ChatGateway, Destination, OutgoingMessage, SentMessage},
    help::HelpPaginator,
    model::{help::HelpEntry, message::IncomingMessage},
    response::ResponseKind,
};

pub use dispatch::Dispatcher;
pub use parse::CommandInvocation;
pub use registry::CommandRegistry;

/// Which surface a handler instance was built for.
///
/// DM-capable commands are instantiated once per mode and the two instances never share
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandMode {
    Guild,
    DirectMessage,
}

/// Shared collaborators handed to every command execution.
#[derive(Clone)]
pub struct CommandContext {
    pub gateway: Arc<dyn ChatGateway>,
    pub db: DatabaseConnection,
    pub access: Arc<AccessChain>,
    pub help: Arc<HelpPaginator>,
}

impl CommandContext {
    /// Sends a random string of `kind` back into the message's channel.
    pub async fn reply(
        &self,
        message: &IncomingMessage,
        kind: ResponseKind,
    ) -> Result<SentMessage, AppError> {
        self.gateway
            .send(
                Destination::Channel(message.channel_id),
                OutgoingMessage::Text(kind.pick().to_string()),
            )
            .await
    }
}

#[async_trait]
pub trait Command: Send + Sync {
    /// Tokens that invoke this handler from a guild channel.
    fn calls(&self) -> &'static [&'static str];

    /// Tokens registered for the direct-message instance.
    fn dm_calls(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether the handler may be dispatched from a direct message.
    fn allows_direct_message(&self) -> bool {
        false
    }

    /// Whether the handler delivers its output to the author's direct messages.
    fn responds_in_direct_message(&self) -> bool {
        false
    }

    fn mode(&self) -> CommandMode;

    fn help(&self) -> HelpEntry;

    async fn exec(
        &self,
        ctx: &CommandContext,
        message: &IncomingMessage,
        invocation: &CommandInvocation,
    ) -> Result<(), AppError>;
}
