//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Available Factories
//!
//! - `embed::create_test_embed` - Create Serenity Embed objects

pub mod embed;

pub use embed::create_test_embed;
