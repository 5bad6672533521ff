use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Represents the access configuration of one guild.
///
/// Param model used by the service layer and access checkers so they do not depend on
/// database entity models. Role ids are parsed into `u64` at the repository boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfigParam {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Roles whose members are treated as guild administrators.
    pub admin_role_ids: Vec<u64>,
    /// Roles whose members are denied access to forbidden-gated commands.
    pub forbidden_role_ids: Vec<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildConfigParam {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(GuildConfigParam)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - Failed to parse the guild id or a role id list
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            guild_id,
            admin_role_ids: parse_role_ids("admin_role_ids", entity.admin_role_ids)?,
            forbidden_role_ids: parse_role_ids("forbidden_role_ids", entity.forbidden_role_ids)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Whether any of `roles` is an administrator role for this guild.
    pub fn is_admin_role_held(&self, roles: &[u64]) -> bool {
        roles.iter().any(|role| self.admin_role_ids.contains(role))
    }

    /// Whether any of `roles` is a forbidden role for this guild.
    pub fn is_forbidden_role_held(&self, roles: &[u64]) -> bool {
        roles.iter().any(|role| self.forbidden_role_ids.contains(role))
    }
}

/// Parameters for creating a guild configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateGuildConfigParam {
    pub guild_id: u64,
    pub admin_role_ids: Vec<u64>,
    pub forbidden_role_ids: Vec<u64>,
}

/// Serializes role ids the way they are stored: a JSON array of snowflake strings.
pub fn role_ids_to_json(role_ids: &[u64]) -> serde_json::Value {
    serde_json::Value::Array(
        role_ids
            .iter()
            .map(|id| serde_json::Value::String(id.to_string()))
            .collect(),
    )
}

fn parse_role_ids(column: &str, value: serde_json::Value) -> Result<Vec<u64>, DbErr> {
    let ids: Vec<String> = serde_json::from_value(value)
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))?;

    ids.iter()
        .map(|id| {
            id.parse::<u64>()
                .map_err(|e| DbErr::Custom(format!("Failed to parse {} entry '{}': {}", column, id, e)))
        })
        .collect()
}
