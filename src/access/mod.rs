//! Access-control decision chain.
//!
//! An [`AccessChain`] holds independent [`AccessChecker`]s sorted ascending by priority and
//! evaluates every one of them for each request. The decision is **last write wins**: each
//! checker's answer overwrites the running decision, so the checker with the highest
//! priority value decides. This is not an AND or OR combination and must never
//! short-circuit. Register the most authoritative checker (the deny-capable forbidden-role
//! check) with the highest priority so it runs last.
//!
//! Call sites select checker behavior with constant capability tokens ([`ALL`], [`ADMIN`],
//! [`FORBIDDEN`]). A checker may react to tokens it knows and ignore the rest; always pass
//! the constants, never ad-hoc strings.
//!
//! The chain is built once at startup and is read-only afterwards.

pub mod admin;
pub mod forbidden;
pub mod noop;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::gateway::ChatGateway;

pub use admin::AdminRoleCheck;
pub use forbidden::ForbiddenRoleCheck;
pub use noop::NoopCheck;

/// Token for commands any member may run.
pub const ALL: &str = "all";
/// Token for commands gated on the guild's administrator roles.
pub const ADMIN: &str = "admin";
/// Token that activates the forbidden-role deny branch.
pub const FORBIDDEN: &str = "forbidden";

/// One authorization request, as seen by each checker.
#[derive(Debug, Clone, Copy)]
pub struct AccessRequest<'a> {
    pub user_id: u64,
    pub guild_id: u64,
    /// Capability tokens selected by the call site.
    pub perms: &'a [&'a str],
    /// Whether the platform administrator capability may grant access on its own.
    pub allow_admin: bool,
}

impl AccessRequest<'_> {
    pub fn requests(&self, token: &str) -> bool {
        self.perms.contains(&token)
    }
}

/// One independent authorization rule.
///
/// Implementations must never fail: any lookup error resolves to `false`, since the chain
/// has no error channel. Checkers must not mutate shared state.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// Lower values run first; the highest value has the final say.
    fn priority(&self) -> i32;

    async fn has(&self, request: &AccessRequest<'_>) -> bool;
}

#[derive(Default)]
pub struct AccessChain {
    checkers: Vec<Arc<dyn AccessChecker>>,
}

impl AccessChain {
    pub fn new() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    /// Builds the standard chain: `NoopCheck` (unless disabled), `AdminRoleCheck` and
    /// `ForbiddenRoleCheck`.
    pub fn with_default_checkers(
        db: DatabaseConnection,
        gateway: Arc<dyn ChatGateway>,
        include_noop: bool,
    ) -> Self {
        let mut chain = Self::new();

        if include_noop {
            chain.register(NoopCheck);
        }
        chain.register(AdminRoleCheck::new(db.clone(), gateway.clone()));
        chain.register(ForbiddenRoleCheck::new(db, gateway));

        chain
    }

    /// Adds a checker and re-sorts by priority.
    ///
    /// Sorting is stable, so equal priorities keep registration order. Registering the same
    /// kind of checker twice yields two active checks.
    pub fn register(&mut self, checker: impl AccessChecker + 'static) {
        self.checkers.push(Arc::new(checker));
        self.checkers.sort_by_key(|checker| checker.priority());
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Priorities in evaluation order.
    pub fn priorities(&self) -> Vec<i32> {
        self.checkers.iter().map(|checker| checker.priority()).collect()
    }

    /// Evaluates every checker in ascending priority order.
    ///
    /// Fails closed without a guild. Otherwise each checker's answer overwrites the running
    /// decision and the last one evaluated is returned; an empty chain denies.
    pub async fn has(
        &self,
        user_id: u64,
        guild_id: Option<u64>,
        perms: &[&str],
        allow_admin: bool,
    ) -> bool {
        let Some(guild_id) = guild_id else {
            return false;
        };

        let request = AccessRequest {
            user_id,
            guild_id,
            perms,
            allow_admin,
        };

        let mut granted = false;
        for checker in &self.checkers {
            granted = checker.has(&request).await;
        }

        tracing::debug!(
            "Access for user {} in guild {} with {:?}: {}",
            user_id,
            guild_id,
            perms,
            granted
        );

        granted
    }
}
