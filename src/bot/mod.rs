//! Serenity integration.
//!
//! The bot receives message and reaction events from Discord's gateway, converts them into
//! the platform-neutral [`crate::model::message`] types and hands them to the
//! [`crate::command::Dispatcher`]. Outbound traffic does not go through the client; it uses
//! the separate REST client wrapped by [`crate::gateway::discord::SerenityGateway`].
//!
//! # Gateway Intents
//!
//! - `GUILDS`, `GUILD_MESSAGES`, `DIRECT_MESSAGES` - receive command messages
//! - `MESSAGE_CONTENT` - read command text (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS`, `DIRECT_MESSAGE_REACTIONS` - drive help navigation
//!
//! `MESSAGE_CONTENT` must be enabled in the Discord Developer Portal for the application.

pub mod convert;
pub mod handler;
pub mod start;
