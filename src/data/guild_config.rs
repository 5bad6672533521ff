use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter,
};

use crate::model::guild_config::{role_ids_to_json, CreateGuildConfigParam, GuildConfigParam};

/// Keyed document store for per-guild access configuration.
///
/// At most one row exists per guild id; uniqueness is enforced by the table's unique index.
pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the configuration for a guild.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfigParam))`: Guild is configured
    /// - `Ok(None)`: Guild has no configuration
    /// - `Err(DbErr)`: Database error during query or malformed stored ids
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfigParam>, DbErr> {
        self.find_model(guild_id)
            .await?
            .map(GuildConfigParam::from_entity)
            .transpose()
    }

    /// Inserts a new configuration.
    ///
    /// # Returns
    /// - `Ok(GuildConfigParam)`: The stored configuration
    /// - `Err(DbErr)`: Database error, including a unique violation when the guild already
    ///   has a configuration
    pub async fn create(&self, param: CreateGuildConfigParam) -> Result<GuildConfigParam, DbErr> {
        let now = Utc::now();

        let model = entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            admin_role_ids: ActiveValue::Set(role_ids_to_json(&param.admin_role_ids)),
            forbidden_role_ids: ActiveValue::Set(role_ids_to_json(&param.forbidden_role_ids)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        GuildConfigParam::from_entity(model)
    }

    /// Removes the configuration for a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfigParam))`: The configuration that was removed
    /// - `Ok(None)`: Guild had no configuration; nothing was deleted
    /// - `Err(DbErr)`: Database error during lookup or delete
    pub async fn delete_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfigParam>, DbErr> {
        let Some(model) = self.find_model(guild_id).await? else {
            return Ok(None);
        };

        let removed = GuildConfigParam::from_entity(model.clone())?;
        model.delete(self.db).await?;

        Ok(Some(removed))
    }

    /// Replaces the administrator roles of a configured guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfigParam))`: Updated configuration
    /// - `Ok(None)`: Guild has no configuration
    /// - `Err(DbErr)`: Database error
    pub async fn set_admin_roles(
        &self,
        guild_id: u64,
        role_ids: &[u64],
    ) -> Result<Option<GuildConfigParam>, DbErr> {
        let Some(model) = self.find_model(guild_id).await? else {
            return Ok(None);
        };

        let mut active: entity::guild_config::ActiveModel = model.into();
        active.admin_role_ids = ActiveValue::Set(role_ids_to_json(role_ids));
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        GuildConfigParam::from_entity(updated).map(Some)
    }

    /// Replaces the forbidden roles of a configured guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfigParam))`: Updated configuration
    /// - `Ok(None)`: Guild has no configuration
    /// - `Err(DbErr)`: Database error
    pub async fn set_forbidden_roles(
        &self,
        guild_id: u64,
        role_ids: &[u64],
    ) -> Result<Option<GuildConfigParam>, DbErr> {
        let Some(model) = self.find_model(guild_id).await? else {
            return Ok(None);
        };

        let mut active: entity::guild_config::ActiveModel = model.into();
        active.forbidden_role_ids = ActiveValue::Set(role_ids_to_json(role_ids));
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        GuildConfigParam::from_entity(updated).map(Some)
    }

    async fn find_model(&self, guild_id: u64) -> Result<Option<entity::guild_config::Model>, DbErr> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }
}
