//! Generator business logic.
//!
//! - **Discord** (`discord/`) - Filtering and ordering rules for fetched entities
//! - **Generator** (`generator/`) - Definitions, registry, rendering, writing and the
//!   orchestrator that runs every registered definition

pub mod discord;
pub mod generator;
