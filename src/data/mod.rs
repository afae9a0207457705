//! Directory service access.
//!
//! Repositories in this module list entities from the directory service (Discord)
//! for a set of guilds and convert them into domain models at the boundary. They
//! perform no filtering or ordering; that is the service layer's job.

pub mod discord;
