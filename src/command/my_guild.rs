use async_trait::async_trait;

use crate::{
    access::{ADMIN, FORBIDDEN},
    command::{arguments::ArgumentMap, Command, CommandContext, CommandInvocation, CommandMode},
    error::{command::CommandError, AppError},
    model::{help::HelpEntry, message::IncomingMessage},
    response::ResponseKind,
    service::GuildConfigService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuildAction {
    Set,
    Remove,
}

/// `myguild` / `mgd`: registers or removes the current guild.
pub struct MyGuildCommand {
    mode: CommandMode,
    arguments: ArgumentMap<GuildAction>,
}

impl MyGuildCommand {
    pub fn new(mode: CommandMode) -> Self {
        Self {
            mode,
            arguments: ArgumentMap::new()
                .with(&["set", "s"], GuildAction::Set)
                .with(&["remove", "r"], GuildAction::Remove),
        }
    }

    async fn set(
        &self,
        ctx: &CommandContext,
        message: &IncomingMessage,
        argc: usize,
    ) -> Result<(), AppError> {
        if !ctx
            .access
            .has(message.author_id, message.guild_id, &[], true)
            .await
        {
            return Err(CommandError::InsufficientPermission.into());
        }
        if argc > 1 {
            return Err(CommandError::TooManyArguments.into());
        }
        let guild_id = message.guild_id.ok_or(CommandError::NotAGuildContext)?;

        GuildConfigService::new(&ctx.db).set_guild(guild_id).await?;
        ctx.reply(message, ResponseKind::Success).await?;

        Ok(())
    }

    async fn remove(
        &self,
        ctx: &CommandContext,
        message: &IncomingMessage,
        argc: usize,
    ) -> Result<(), AppError> {
        if !ctx
            .access
            .has(message.author_id, message.guild_id, &[ADMIN, FORBIDDEN], true)
            .await
        {
            return Err(CommandError::InsufficientPermission.into());
        }
        if argc > 1 {
            return Err(CommandError::TooManyArguments.into());
        }
        let guild_id = message.guild_id.ok_or(CommandError::NotAGuildContext)?;

        GuildConfigService::new(&ctx.db).remove_guild(guild_id).await?;
        ctx.reply(message, ResponseKind::Success).await?;

        Ok(())
    }
}

#[async_trait]
impl Command for MyGuildCommand {
    fn calls(&self) -> &'static [&'static str] {
        &["myguild", "mgd"]
    }

    fn mode(&self) -> CommandMode {
        self.mode
    }

    fn help(&self) -> HelpEntry {
        HelpEntry::new(
            "myguild",
            "Sets or removes this server as your guild",
            "myguild <set|s|remove|r>",
            vec![
                "myguild set".to_string(),
                "mgd s".to_string(),
                "myguild remove".to_string(),
            ],
        )
    }

    async fn exec(
        &self,
        ctx: &CommandContext,
        message: &IncomingMessage,
        invocation: &CommandInvocation,
    ) -> Result<(), AppError> {
        let argc = invocation.argv.len();

        match self.arguments.resolve(&invocation.argv)? {
            GuildAction::Set => self.set(ctx, message, argc).await,
            GuildAction::Remove => self.remove(ctx, message, argc).await,
        }
    }
}
