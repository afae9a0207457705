pub mod channel;
pub mod directory;
pub mod role;

#[cfg(test)]
pub mod fake;

pub use channel::DiscordGuildChannelRepository;
pub use directory::{DirectoryService, SerenityDirectory};
pub use role::DiscordGuildRoleRepository;

#[cfg(test)]
mod test;
