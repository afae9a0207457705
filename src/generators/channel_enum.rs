use dioxus_logger::tracing;
use serenity::async_trait;

use crate::{
    data::discord::DiscordGuildChannelRepository,
    error::generator::{GeneratorError, RenderError},
    generators::{ensure_unique_identifiers, with_shared_helpers},
    model::{
        discord::DiscordGuildChannel,
        template::{ChannelEnumData, ChannelEnumMember},
    },
    service::{
        discord::{resolve_parent, sort_channels},
        generator::{DataSource, GeneratorContext, GeneratorDefinition},
    },
};

pub const NAME: &str = "channel_enum";
pub const OUTPUT_PATH: &str = "src/enums/channel.rs";
pub const CATEGORY_CONSTANT_PREFIX: &str = "GuildCategoryChannel";
pub const CHANNEL_CONSTANT_PREFIX: &str = "GuildChannel";

const TEMPLATE: &str = include_str!("../../templates/channel_enum.rs.tera");

/// Definition generating `GuildCategoryChannelEnum`, `GuildChannelEnum` and one
/// constant per category and supported channel.
pub fn definition() -> GeneratorDefinition {
    with_shared_helpers(GeneratorDefinition::new(
        NAME,
        OUTPUT_PATH,
        TEMPLATE,
        ChannelEnumSource,
    ))
}

/// Fetches channels from every configured guild and shapes them for the template.
pub struct ChannelEnumSource;

#[async_trait]
impl DataSource for ChannelEnumSource {
    async fn prepare(
        &self,
        context: &GeneratorContext<'_>,
    ) -> Result<serde_json::Value, GeneratorError> {
        let channels = DiscordGuildChannelRepository::new(context.directory)
            .get_by_guild_ids(context.guild_ids)
            .await?;

        let data = channel_enum_data(channels)?;
        tracing::info!(
            "Prepared {} categories and {} channels for {}",
            data.category_channels.len(),
            data.channels.len(),
            NAME
        );

        Ok(serde_json::to_value(data).map_err(RenderError::Data)?)
    }
}

/// Builds template data from fetched channels.
///
/// Each channel records the ID of its resolved parent category, or `0` when it has
/// none or its parent was not fetched. Categories and channels are generated as
/// separate types, so identifiers only need to be unique within each group.
///
/// # Returns
/// - `Ok(ChannelEnumData)` - Categories and channels in declaration order
/// - `Err(RenderError::IdentifierCollision)` - Two entities of one type would share a
///   constant
pub fn channel_enum_data(
    channels: Vec<DiscordGuildChannel>,
) -> Result<ChannelEnumData, RenderError> {
    let sorted = sort_channels(channels);

    ensure_unique_identifiers(
        CATEGORY_CONSTANT_PREFIX,
        sorted.categories.iter().map(|c| c.name.as_str()),
    )?;
    ensure_unique_identifiers(
        CHANNEL_CONSTANT_PREFIX,
        sorted.channels.iter().map(|c| c.name.as_str()),
    )?;

    let channels = sorted
        .channels
        .iter()
        .map(|channel| ChannelEnumMember {
            id: channel.channel_id,
            name: channel.name.clone(),
            parent_id: resolve_parent(channel, &sorted.categories)
                .map(|parent| parent.channel_id)
                .unwrap_or(0),
        })
        .collect();

    let category_channels = sorted
        .categories
        .into_iter()
        .map(|category| ChannelEnumMember {
            id: category.channel_id,
            name: category.name,
            parent_id: 0,
        })
        .collect();

    Ok(ChannelEnumData {
        category_channels,
        channels,
    })
}
