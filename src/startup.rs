use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    access::AccessChain,
    command::{
        help::HelpCommand, my_guild::MyGuildCommand, CommandContext, CommandRegistry, Dispatcher,
    },
    config::Config,
    error::AppError,
    gateway::ChatGateway,
    help::HelpPaginator,
    router,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Registers the built-in commands.
pub fn register_commands(registry: &mut CommandRegistry) {
    registry.register(|mode| Arc::new(HelpCommand::new(mode)));
    registry.register(|mode| Arc::new(MyGuildCommand::new(mode)));
}

/// Wires the registry, access chain and help paginator into a dispatcher.
///
/// Help entries are collected after every command is registered.
pub fn build_dispatcher(
    config: &Config,
    registry: CommandRegistry,
    db: DatabaseConnection,
    gateway: Arc<dyn ChatGateway>,
) -> Dispatcher {
    let mut help = HelpPaginator::new(config.help_title.clone(), config.bot_name.clone());
    for entry in registry.help_entries() {
        help.add_help(entry);
    }

    let access = AccessChain::with_default_checkers(
        db.clone(),
        gateway.clone(),
        !config.disable_noop_access,
    );

    tracing::info!(
        "Registered {} command tokens and {} access checkers",
        registry.tokens().len(),
        access.len()
    );

    let ctx = CommandContext {
        gateway,
        db,
        access: Arc::new(access),
        help: Arc::new(help),
    };

    Dispatcher::new(Arc::new(registry), ctx)
}

/// HTTP server hosting the health route and any routers registered by the embedder.
pub struct AppServer {
    port: u16,
    disable_route_logs: bool,
    router: Router,
}

impl AppServer {
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            disable_route_logs: config.disable_route_logs,
            router: router::router(),
        }
    }

    /// Mounts `router` under `path`; `/` merges it at the root.
    pub fn register_router(mut self, path: &str, router: Router) -> Self {
        self.router = if path == "/" || path.is_empty() {
            self.router.merge(router)
        } else {
            self.router.nest(path, router)
        };
        self
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Binds `0.0.0.0:<port>` and serves until the process exits.
    pub async fn serve(self) -> Result<(), AppError> {
        let router = if self.disable_route_logs {
            self.router
        } else {
            self.router.layer(TraceLayer::new_for_http())
        };

        let listener = tokio::net::TcpListener::bind(("0.0.0.0", self.port)).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
