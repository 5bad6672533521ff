
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::{
    command::{
        Command, CommandContext, CommandInvocation, CommandMode, CommandRegistry, Dispatcher,
    },
    config::Config,
    error::AppError,
    gateway::{fake::FakeGateway, MemberRoles},
    model::{help::HelpEntry, message::IncomingMessage},
    startup::build_dispatcher,
};

pub(super) const BOT: u64 = 1000;
pub(super) const GUILD: u64 = 42;
pub(super) const CHANNEL: u64 = 77;
pub(super) const DM_CHANNEL: u64 = 88;
pub(super) const USER: u64 = 5;
pub(super) const TITLE: &str = ":grey_question: BGSBot Help";

pub(super) struct Harness {
    pub gateway: Arc<FakeGateway>,
    pub dispatcher: Dispatcher,
    _test: TestContext,
}

/// Configuration with every optional variable left at its default.
pub(super) fn config() -> Config {
    Config::from_lookup(|name| match name {
        "DISCORD_BOT_TOKEN" => Some("token".to_string()),
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        _ => None,
    })
    .unwrap()
}

/// Builds a dispatcher over `gateway` with the default access chain and the commands added
/// by `register`.
pub(super) async fn harness(
    gateway: FakeGateway,
    register: impl FnOnce(&mut CommandRegistry),
) -> Harness {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();
    let gateway = Arc::new(gateway);

    let mut registry = CommandRegistry::new();
    register(&mut registry);

    let dispatcher = build_dispatcher(&config(), registry, db, gateway.clone());

    Harness {
        gateway,
        dispatcher,
        _test: test,
    }
}

pub(super) fn admin() -> MemberRoles {
    MemberRoles {
        role_ids: vec![],
        is_administrator: true,
    }
}

pub(super) fn regular() -> MemberRoles {
    MemberRoles {
        role_ids: vec![3],
        is_administrator: false,
    }
}

/// A guild message mentioning the bot.
pub(super) fn guild_message(content: &str) -> IncomingMessage {
    IncomingMessage {
        message_id: 900,
        channel_id: CHANNEL,
        guild_id: Some(GUILD),
        author_id: USER,
        author_is_bot: false,
        bot_id: BOT,
        mentions_bot: true,
        content: format!("<@{}> {}", BOT, content),
    }
}

pub(super) fn direct_message(content: &str) -> IncomingMessage {
    IncomingMessage {
        message_id: 901,
        channel_id: DM_CHANNEL,
        guild_id: None,
        author_id: USER,
        author_is_bot: false,
        bot_id: BOT,
        mentions_bot: false,
        content: content.to_string(),
    }
}

/// Command that records its executions and returns a fixed outcome.
pub(super) struct StubCommand {
    pub name: &'static str,
    pub calls: &'static [&'static str],
    pub dm_calls: &'static [&'static str],
    pub allows_dm: bool,
    pub mode: CommandMode,
    pub outcome: fn() -> Result<(), AppError>,
    pub runs: Arc<AtomicUsize>,
    pub last_argv: Arc<std::sync::Mutex<Vec<String>>>,
}

impl StubCommand {
    pub fn new(name: &'static str, calls: &'static [&'static str], mode: CommandMode) -> Self {
        Self {
            name,
            calls,
            dm_calls: &[],
            allows_dm: false,
            mode,
            outcome: || Ok(()),
            runs: Arc::new(AtomicUsize::new(0)),
            last_argv: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl Command for StubCommand {
    fn calls(&self) -> &'static [&'static str] {
        self.calls
    }

    fn dm_calls(&self) -> &'static [&'static str] {
        self.dm_calls
    }

    fn allows_direct_message(&self) -> bool {
        self.allows_dm
    }

    fn mode(&self) -> CommandMode {
        self.mode
    }

    fn help(&self) -> HelpEntry {
        HelpEntry::new(self.name, format!("{} command", self.name), self.name, vec![])
    }

    async fn exec(
        &self,
        _ctx: &CommandContext,
        _message: &IncomingMessage,
        invocation: &CommandInvocation,
    ) -> Result<(), AppError> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        *self.last_argv.lock().unwrap() = invocation.argv.clone();
        (self.outcome)()
    }
}
