//! Guildbot: a chat-command framework for Discord.
//!
//! Messages that mention the bot (or arrive as direct messages) are parsed into commands,
//! authorized through a priority-ordered [`access::AccessChain`] backed by per-guild role
//! configuration, and dispatched to registered [`command::Command`] handlers. The built-in
//! `help` command renders a paginated listing navigated with emoji reactions.

pub mod access;
pub mod bot;
pub mod command;
pub mod config;
pub mod data;
pub mod error;
pub mod gateway;
pub mod help;
pub mod model;
pub mod response;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
