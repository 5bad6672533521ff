//! SeaORM entities for the guild configuration store.

pub mod prelude;

pub mod guild_config;
