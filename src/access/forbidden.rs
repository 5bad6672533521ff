use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    access::{AccessChecker, AccessRequest, FORBIDDEN},
    data::GuildConfigRepository,
    gateway::ChatGateway,
};

/// Final word of the chain.
///
/// Grants only platform administrators, and only when the request allows it. Everything else
/// is denied, so role-based grants from earlier checkers never survive this check. The
/// guild's forbidden roles never change the outcome; they are looked up only to log a
/// forbidden role holder, and only while debug logging is enabled.
pub struct ForbiddenRoleCheck {
    db: DatabaseConnection,
    gateway: Arc<dyn ChatGateway>,
}

impl ForbiddenRoleCheck {
    pub fn new(db: DatabaseConnection, gateway: Arc<dyn ChatGateway>) -> Self {
        Self { db, gateway }
    }

    async fn holds_forbidden_role(&self, request: &AccessRequest<'_>, role_ids: &[u64]) -> bool {
        match GuildConfigRepository::new(&self.db)
            .find_by_guild_id(request.guild_id)
            .await
        {
            Ok(Some(config)) => config.is_forbidden_role_held(role_ids),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(
                    "Forbidden check could not load config for guild {}: {}",
                    request.guild_id,
                    e
                );
                false
            }
        }
    }
}

#[async_trait]
impl AccessChecker for ForbiddenRoleCheck {
    fn priority(&self) -> i32 {
        999
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
                    "Forbidden check could not load member {} in guild {}: {}",
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

        if audits_forbidden_roles(request)
            && self.holds_forbidden_role(request, &member.role_ids).await
        {
            tracing::debug!(
                "User {} holds a forbidden role in guild {}",
                request.user_id,
                request.guild_id
            );
        }

        false
    }
}

/// Whether a denial should look up and log forbidden role holders.
fn audits_forbidden_roles(request: &AccessRequest<'_>) -> bool {
    request.requests(FORBIDDEN) && tracing::enabled!(tracing::Level::DEBUG)
}
