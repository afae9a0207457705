//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return, with sensible defaults for every field the
//! generator does not read.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create assignable Serenity Role objects
//! - `role::create_test_managed_role` - Create integration-owned Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects

pub mod channel;
pub mod role;

// Re-export commonly used functions for convenience
pub use channel::{channel_type, create_test_channel};
pub use role::{create_test_managed_role, create_test_role};
