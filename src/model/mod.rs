//! Domain models and parameter types.
//!
//! Chat events are converted from Serenity objects into these platform-neutral types at the
//! bot boundary, and database rows are converted into param models at the repository
//! boundary. Everything between those edges (access checks, dispatch, help rendering) works
//! on these types only.

pub mod embed;
pub mod guild_config;
pub mod help;
pub mod message;
