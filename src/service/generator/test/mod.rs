use serde_json::{json, Value};
use serenity::async_trait;
use std::path::Path;

use crate::{
    data::discord::{fake::FakeDirectory, DiscordGuildChannelRepository, DiscordGuildRoleRepository},
    error::{
        generator::{GeneratorError, RenderError},
        registry::RegistryError,
    },
    service::generator::{
        orchestrator::run_all,
        registry::Registry,
        render::{format_source, render, with_header},
        writer::write_atomic,
        DataSource, GeneratorContext, GeneratorDefinition,
    },
};


const SIMPLE_TEMPLATE: &str = "pub const {{ name }}: u64 = {{ value }};\n";

/// Data source returning a fixed value.
struct StaticSource(Value);

#[async_trait]
impl DataSource for StaticSource {
    async fn prepare(&self, _context: &GeneratorContext<'_>) -> Result<Value, GeneratorError> {
        Ok(self.0.clone())
    }
}

/// Data source counting fetched channels.
struct ChannelCountSource;

#[async_trait]
impl DataSource for ChannelCountSource {
    async fn prepare(&self, context: &GeneratorContext<'_>) -> Result<Value, GeneratorError> {
        let channels = DiscordGuildChannelRepository::new(context.directory)
            .get_by_guild_ids(context.guild_ids)
            .await?;
        Ok(json!({ "name": "CHANNEL_COUNT", "value": channels.len() }))
    }
}

/// Data source counting fetched roles.
struct RoleCountSource;

#[async_trait]
impl DataSource for RoleCountSource {
    async fn prepare(&self, context: &GeneratorContext<'_>) -> Result<Value, GeneratorError> {
        let roles = DiscordGuildRoleRepository::new(context.directory)
            .get_by_guild_ids(context.guild_ids)
            .await?;
        Ok(json!({ "name": "ROLE_COUNT", "value": roles.len() }))
    }
}

fn simple_definition(name: &'static str, output_path: &str) -> GeneratorDefinition {
    GeneratorDefinition::new(
        name,
        output_path,
        SIMPLE_TEMPLATE,
        StaticSource(json!({ "name": "ANSWER", "value": 42 })),
    )
}

fn shout(value: &str) -> String {
    value.to_uppercase()
}

fn context<'a>(
    directory: &'a FakeDirectory,
    guild_ids: &'a [u64],
    output_dir: &'a Path,
) -> GeneratorContext<'a> {
    GeneratorContext {
        directory,
        guild_ids,
        output_dir,
    }
}
