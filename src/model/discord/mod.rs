pub mod channel;
pub mod role;

pub use channel::{ChannelKind, DiscordGuildChannel};
pub use role::DiscordGuildRole;
