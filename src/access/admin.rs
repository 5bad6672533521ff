use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    access::{AccessChecker, AccessRequest},
    data::GuildConfigRepository,
    gateway::ChatGateway,
};

/// Grants platform administrators (when the request allows it) and holders of one of the
/// guild's configured administrator roles.
pub struct AdminRoleCheck {
    db: DatabaseConnection,
    gateway: Arc<dyn ChatGateway>,
}

impl AdminRoleCheck {
    pub fn new(db: DatabaseConnection, gateway: Arc<dyn ChatGateway>) -> Self {
        Self { db, gateway }
    }
}

#[async_trait]
impl AccessChecker for AdminRoleCheck {
    fn priority(&self) -> i32 {
        100
    }

    async fn has(&self, request: &AccessRequest<'_>) -> bool {
        let member = match self
            .gateway
            .member_roles(request.guild_id, request.user_id)
            .await
        {
            Ok(member) => member,
            Err(e) => {
                tracing::warn!(
                    "Admin check could not load member {} in guild {}: {}",
                    request.user_id,
                    request.guild_id,
                    e
                );
                return false;
            }
        };

        if request.allow_admin && member.is_administrator {
            return true;
        }

        match GuildConfigRepository::new(&self.db)
            .find_by_guild_id(request.guild_id)
            .await
        {
            Ok(Some(config)) => config.is_admin_role_held(&member.role_ids),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(
                    "Admin check could not load config for guild {}: {}",
                    request.guild_id,
                    e
                );
                false
            }
        }
    }
}
