use async_trait::async_trait;

use crate::{
    command::{Command, CommandContext, CommandInvocation, CommandMode},
    error::{command::CommandError, AppError},
    gateway::Destination,
    help::view::HelpView,
    model::{help::HelpEntry, message::IncomingMessage},
    response::ResponseKind,
};

/// `help` / `?`: sends the first help listing.
///
/// Invoked in a guild, the listing goes to the author's direct messages; invoked in a direct
/// message, it is rendered in place.
pub struct HelpCommand {
    mode: CommandMode,
}

impl HelpCommand {
    pub fn new(mode: CommandMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn calls(&self) -> &'static [&'static str] {
        &["help", "?"]
    }

    fn allows_direct_message(&self) -> bool {
        true
    }

    fn responds_in_direct_message(&self) -> bool {
        true
    }

    fn mode(&self) -> CommandMode {
        self.mode
    }

    fn help(&self) -> HelpEntry {
        HelpEntry::new(
            "help",
            "Gets this help document in a DM",
            "help",
            vec!["help".to_string()],
        )
    }

    async fn exec(
        &self,
        ctx: &CommandContext,
        message: &IncomingMessage,
        invocation: &CommandInvocation,
    ) -> Result<(), AppError> {
        if !invocation.argv.is_empty() {
            return Err(CommandError::TooManyArguments.into());
        }

        ctx.reply(message, ResponseKind::HelpSent).await?;

        let destination = if !message.is_direct() && self.responds_in_direct_message() {
            Destination::DirectMessage(message.author_id)
        } else {
            Destination::Channel(message.channel_id)
        };

        ctx.help
            .display(ctx.gateway.as_ref(), destination, HelpView::Listing { page: 1 })
            .await?;

        Ok(())
    }
}
