//! Domain models and template data.
//!
//! Domain models are converted from Serenity types at the fetch boundary and flow
//! through the sorting layer unchanged. Template data structures are the serialized
//! shapes handed to the renderer.

pub mod discord;
pub mod template;
