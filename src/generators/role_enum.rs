use dioxus_logger::tracing;
use serenity::async_trait;

use crate::{
    data::discord::DiscordGuildRoleRepository,
    error::generator::{GeneratorError, RenderError},
    generators::{ensure_unique_identifiers, with_shared_helpers},
    model::{
        discord::DiscordGuildRole,
        template::{RoleEnumData, RoleEnumMember},
    },
    service::{
        discord::filter_and_sort_roles,
        generator::{DataSource, GeneratorContext, GeneratorDefinition},
    },
};

pub const NAME: &str = "role_enum";
pub const OUTPUT_PATH: &str = "src/enums/role.rs";
pub const CONSTANT_PREFIX: &str = "Role";

const TEMPLATE: &str = include_str!("../../templates/role_enum.rs.tera");

/// Definition generating `RoleEnum` and one constant per assignable role.
pub fn definition() -> GeneratorDefinition {
    with_shared_helpers(GeneratorDefinition::new(
        NAME,
        OUTPUT_PATH,
        TEMPLATE,
        RoleEnumSource,
    ))
}

/// Fetches roles from every configured guild and shapes them for the template.
pub struct RoleEnumSource;

#[async_trait]
impl DataSource for RoleEnumSource {
    async fn prepare(
        &self,
        context: &GeneratorContext<'_>,
    ) -> Result<serde_json::Value, GeneratorError> {
        let roles = DiscordGuildRoleRepository::new(context.directory)
            .get_by_guild_ids(context.guild_ids)
            .await?;

        let data = role_enum_data(roles)?;
        tracing::info!("Prepared {} roles for {}", data.roles.len(), NAME);

        Ok(serde_json::to_value(data).map_err(RenderError::Data)?)
    }
}

/// Builds template data from fetched roles.
///
/// Managed roles are dropped and the rest ordered from the top of the hierarchy.
///
/// # Returns
/// - `Ok(RoleEnumData)` - Roles in declaration order
/// - `Err(RenderError::IdentifierCollision)` - Two roles would share a constant
pub fn role_enum_data(roles: Vec<DiscordGuildRole>) -> Result<RoleEnumData, RenderError> {
    let roles = filter_and_sort_roles(roles);

    ensure_unique_identifiers(CONSTANT_PREFIX, roles.iter().map(|role| role.name.as_str()))?;

    Ok(RoleEnumData {
        roles: roles
            .into_iter()
            .map(|role| RoleEnumMember {
                id: role.role_id,
                name: role.name,
            })
            .collect(),
    })
}
