//! In-memory directory service for tests.

use serenity::async_trait;
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use crate::{
    data::discord::DirectoryService,
    model::discord::{DiscordGuildChannel, DiscordGuildRole},
};

/// Directory service serving canned entities and recording every call.
///
/// Guilds without canned data list no entities. Guilds marked as failing return a
/// Serenity error for both channel and role listings.
#[derive(Default)]
pub struct FakeDirectory {
    channels: HashMap<u64, Vec<DiscordGuildChannel>>,
    roles: HashMap<u64, Vec<DiscordGuildRole>>,
    failing_guilds: HashSet<u64>,
    calls: Mutex<Vec<(&'static str, u64)>>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channels(mut self, guild_id: u64, channels: Vec<DiscordGuildChannel>) -> Self {
        self.channels.insert(guild_id, channels);
        self
    }

    pub fn with_roles(mut self, guild_id: u64, roles: Vec<DiscordGuildRole>) -> Self {
        self.roles.insert(guild_id, roles);
        self
    }

    pub fn failing_on(mut self, guild_id: u64) -> Self {
        self.failing_guilds.insert(guild_id);
        self
    }

    /// Calls received so far as `(operation, guild_id)` pairs, in order.
    pub fn calls(&self) -> Vec<(&'static str, u64)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, guild_id: u64) -> Result<(), serenity::Error> {
        self.calls.lock().unwrap().push((operation, guild_id));
        if self.failing_guilds.contains(&guild_id) {
            return Err(serenity::Error::Other("directory unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryService for FakeDirectory {
    async fn guild_channels(
        &self,
        guild_id: u64,
    ) -> Result<Vec<DiscordGuildChannel>, serenity::Error> {
        self.record("channels", guild_id)?;
        Ok(self.channels.get(&guild_id).cloned().unwrap_or_default())
    }

    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<DiscordGuildRole>, serenity::Error> {
        self.record("roles", guild_id)?;
        Ok(self.roles.get(&guild_id).cloned().unwrap_or_default())
    }
}

/// Builds a domain role for tests.
pub fn role(role_id: u64, guild_id: u64, name: &str, position: i32, managed: bool) -> DiscordGuildRole {
    DiscordGuildRole {
        role_id,
        guild_id,
        name: name.to_string(),
        position,
        managed,
    }
}

/// Builds a domain channel for tests.
pub fn channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: crate::model::discord::ChannelKind,
    parent_id: Option<u64>,
    position: i32,
) -> DiscordGuildChannel {
    DiscordGuildChannel {
        channel_id,
        guild_id,
        name: name.to_string(),
        kind,
        parent_id,
        position,
    }
}
