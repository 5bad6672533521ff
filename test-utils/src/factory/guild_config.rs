//! Guild configuration factory for creating test `guild_config` rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configurations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .guild_id("987654321")
///     .admin_roles(["1001", "1002"])
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    admin_role_ids: Vec<String>,
    forbidden_role_ids: Vec<String>,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented counter value
    /// - admin_role_ids: empty
    /// - forbidden_role_ids: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            admin_role_ids: Vec::new(),
            forbidden_role_ids: Vec::new(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the administrator role IDs.
    pub fn admin_roles<I, S>(mut self, role_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.admin_role_ids = role_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the forbidden role IDs.
    pub fn forbidden_roles<I, S>(mut self, role_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_role_ids = role_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the guild configuration into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        let now = Utc::now();

        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            admin_role_ids: ActiveValue::Set(serde_json::json!(self.admin_role_ids)),
            forbidden_role_ids: ActiveValue::Set(serde_json::json!(self.forbidden_role_ids)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild configuration with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_guild_config_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let config = create_guild_config(db).await?;

        assert!(!config.guild_id.is_empty());
        assert_eq!(config.admin_role_ids, serde_json::json!([]));
        assert_eq!(config.forbidden_role_ids, serde_json::json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn creates_guild_config_with_custom_roles() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let config = GuildConfigFactory::new(db)
            .guild_id("987654321")
            .admin_roles(["1", "2"])
            .forbidden_roles(["3"])
            .build()
            .await?;

        assert_eq!(config.guild_id, "987654321");
        assert_eq!(config.admin_role_ids, serde_json::json!(["1", "2"]));
        assert_eq!(config.forbidden_role_ids, serde_json::json!(["3"]));

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_guild_configs() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GuildConfig)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_guild_config(db).await?;
        let second = create_guild_config(db).await?;

        assert_ne!(first.guild_id, second.guild_id);

        Ok(())
    }
}
