use std::sync::Arc;

use crate::{
    command::{Command, CommandContext, CommandInvocation, CommandRegistry},
    error::AppError,
    model::message::{IncomingMessage, ReactionEvent},
    response::ResponseKind,
};

/// Routes chat events to registered commands and to the help paginator.
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    ctx: CommandContext,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>, ctx: CommandContext) -> Self {
        Self { registry, ctx }
    }

    pub fn context(&self) -> &CommandContext {
        &self.ctx
    }

    /// Entry point for every received message.
    ///
    /// Direct messages are dispatched when the author is not a bot. Guild messages are
    /// dispatched only when they mention the bot. Everything else is ignored.
    pub async fn handle_message(&self, message: &IncomingMessage) {
        let result = if message.is_direct() {
            if message.author_is_bot {
                return;
            }
            self.dispatch_direct_message(message).await
        } else {
            if !message.mentions_bot {
                return;
            }
            self.dispatch_guild_message(message).await
        };

        if let Err(e) = result {
            tracing::error!(
                "Failed to respond to message {} in channel {}: {}",
                message.message_id,
                message.channel_id,
                e
            );
        }
    }

    /// Dispatches a guild message that mentioned the bot.
    pub async fn dispatch_guild_message(&self, message: &IncomingMessage) -> Result<(), AppError> {
        let invocation = CommandInvocation::parse(&message.content, message.bot_id);

        let Some(command) = self.registry.get(&invocation.command) else {
            self.ctx.reply(message, ResponseKind::NotACommand).await?;
            return Ok(());
        };

        tracing::debug!("{} command requested", invocation.command);
        self.run(command.as_ref(), message, &invocation).await
    }

    /// Dispatches a direct message. Handlers that do not allow direct messages are treated
    /// as unknown and never run.
    pub async fn dispatch_direct_message(&self, message: &IncomingMessage) -> Result<(), AppError> {
        let invocation = CommandInvocation::parse(&message.content, message.bot_id);

        let command = self
            .registry
            .get(&invocation.command)
            .filter(|command| command.allows_direct_message());

        let Some(command) = command else {
            self.ctx.reply(message, ResponseKind::NotACommand).await?;
            return Ok(());
        };

        tracing::debug!("{} command requested by direct message", invocation.command);
        self.run(command.as_ref(), message, &invocation).await
    }

    /// Forwards a reaction to the help paginator. Failures are logged.
    pub async fn handle_reaction(&self, event: &ReactionEvent) {
        if let Err(e) = self.ctx.help.on_reaction(self.ctx.gateway.as_ref(), event).await {
            tracing::error!(
                "Failed to handle reaction on message {}: {}",
                event.message.message_id,
                e
            );
        }
    }

    async fn run(
        &self,
        command: &dyn Command,
        message: &IncomingMessage,
        invocation: &CommandInvocation,
    ) -> Result<(), AppError> {
        match command.exec(&self.ctx, message, invocation).await {
            Ok(()) => Ok(()),
            Err(e) => {
                let kind = e.response_kind();
                tracing::debug!("{} command failed: {}", invocation.command, e);
                self.ctx.reply(message, kind).await?;
                Ok(())
            }
        }
    }
}
