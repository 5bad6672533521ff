//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return param models to keep the
//! data layer separate from access checks and command logic.

pub mod guild_config;

pub use guild_config::GuildConfigRepository;

#[cfg(test)]
mod test;
