use crate::data::discord::{
    fake::{channel, role, FakeDirectory},
    DiscordGuildChannelRepository, DiscordGuildRoleRepository,
};
use crate::error::generator::FetchError;
use crate::model::discord::ChannelKind;
