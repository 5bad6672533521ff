use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    command::{Command, CommandMode},
    model::help::HelpEntry,
};

/// Maps case-folded invocation tokens onto handler instances.
///
/// Written during startup only. A duplicate token overwrites the earlier mapping.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
    /// Tokens in first-registration order.
    order: Vec<String>,
    instances: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the guild instance of a command and registers its tokens.
    ///
    /// When that instance allows direct messages, a second instance is built in
    /// [`CommandMode::DirectMessage`] and its `dm_calls` are registered to it.
    pub fn register<F>(&mut self, build: F)
    where
        F: Fn(CommandMode) -> Arc<dyn Command>,
    {
        let command = build(CommandMode::Guild);
        for call in command.calls() {
            self.insert(call, command.clone());
        }

        if command.allows_direct_message() {
            let dm_command = build(CommandMode::DirectMessage);
            for call in dm_command.dm_calls() {
                self.insert(call, dm_command.clone());
            }
            self.instances.push(dm_command);
        }

        self.instances.push(command);
    }

    pub fn get(&self, token: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(&token.to_lowercase()).cloned()
    }

    pub fn tokens(&self) -> &[String] {
        &self.order
    }

    /// Every instance ever built, including ones whose tokens were overwritten.
    pub fn instances(&self) -> &[Arc<dyn Command>] {
        &self.instances
    }

    /// Help entries of every reachable handler, one lookup per token in registration order.
    ///
    /// Handlers reachable through several tokens contribute repeated entries; callers
    /// collapse them by command name.
    pub fn help_entries(&self) -> Vec<HelpEntry> {
        self.order
            .iter()
            .filter_map(|token| self.commands.get(token))
            .map(|command| command.help())
            .collect()
    }

    fn insert(&mut self, token: &str, command: Arc<dyn Command>) {
        let token = token.to_lowercase();
        if !self.commands.contains_key(&token) {
            self.order.push(token.clone());
        }

        tracing::debug!("Registered command token '{}'", token);
        self.commands.insert(token, command);
    }
}
