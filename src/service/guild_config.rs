use sea_orm::DatabaseConnection;

use crate::{
    data::guild_config::GuildConfigRepository,
    error::{command::CommandError, AppError},
    model::guild_config::{CreateGuildConfigParam, GuildConfigParam},
};

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a guild with an empty configuration.
    ///
    /// An existing configuration is left untouched and reported as
    /// `CommandError::GuildAlreadyConfigured`.
    pub async fn set_guild(&self, guild_id: u64) -> Result<GuildConfigParam, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        if repo.find_by_guild_id(guild_id).await?.is_some() {
            return Err(CommandError::GuildAlreadyConfigured.into());
        }

        let config = repo
            .create(CreateGuildConfigParam {
                guild_id,
                ..Default::default()
            })
            .await?;

        tracing::info!("Registered guild {}", guild_id);

        Ok(config)
    }

    /// Removes a guild's configuration, reporting `CommandError::GuildNotConfigured` when
    /// there was none.
    pub async fn remove_guild(&self, guild_id: u64) -> Result<GuildConfigParam, AppError> {
        let removed = GuildConfigRepository::new(self.db)
            .delete_by_guild_id(guild_id)
            .await?
            .ok_or(CommandError::GuildNotConfigured)?;

        tracing::info!("Removed guild {}", guild_id);

        Ok(removed)
    }
}
