//! Ordering rules for fetched Discord entities.
//!
//! Pure functions that turn raw fetched collections into the order the generated
//! enums declare them in. Nothing here performs I/O.

pub mod channel;
pub mod role;

pub use channel::{resolve_parent, sort_channels};
pub use role::filter_and_sort_roles;

#[cfg(test)]
mod test;
