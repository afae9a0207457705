//! Guild Enumgen Test Utils
//!
//! Provides shared testing utilities for the generator. The generator consumes
//! Serenity objects at its fetch boundary, so this crate offers factories that build
//! those objects the way Discord's API would return them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{channel_type, create_test_channel, create_test_role};
//!
//! let role = create_test_role(111111111, "Admin", 0xFF0000, 10);
//! let category = create_test_channel(100, 42, "General", channel_type::CATEGORY, None, 0);
//! ```

pub mod serenity;
