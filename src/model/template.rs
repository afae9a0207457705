//! Template-facing data structures.
//!
//! These are the shapes handed to Tera when rendering a generated enum. They are built
//! from sorted domain models, serialized into the template context, and discarded once
//! rendering completes. IDs are plain integers so the template can print them verbatim.

use serde::Serialize;

/// A single role constant in the generated role enum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleEnumMember {
    pub id: u64,
    pub name: String,
}

/// Data for the role enum template, ordered from highest to lowest role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleEnumData {
    pub roles: Vec<RoleEnumMember>,
}

/// A category or channel constant in the generated channel enums.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelEnumMember {
    pub id: u64,
    pub name: String,
    /// ID of the resolved parent category, `0` when the channel has none.
    pub parent_id: u64,
}

/// Data for the channel enum template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelEnumData {
    pub category_channels: Vec<ChannelEnumMember>,
    pub channels: Vec<ChannelEnumMember>,
}
