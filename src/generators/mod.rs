//! Built-in generator definitions.
//!
//! `role_enum` and `channel_enum` turn the roles and channels of the configured
//! guilds into Rust constants. Both render through the `identifier` and
//! `rust_string` helpers and start with the same generated-file header.

pub mod channel_enum;
pub mod role_enum;

use dioxus_logger::tracing;
use std::collections::HashMap;

use crate::{
    error::{generator::RenderError, registry::RegistryError},
    service::generator::{GeneratorDefinition, Registry},
    util::identifier::{normalize_identifier, rust_string_literal},
};

#[cfg(test)]
mod test;

/// Header every built-in generator writes at the top of its file.
pub const GENERATED_FILE_HEADER: &str = "\
// Code generated by guild-enumgen; DO NOT EDIT.
// Re-run guild-enumgen to refresh this file from the configured guilds.
";

/// Builds the registry of built-in generators, in execution order.
///
/// # Returns
/// - `Ok(Registry)` - Roles first, then channels
/// - `Err(RegistryError)` - A built-in definition was rejected
pub fn registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    register_all(&mut registry)?;
    Ok(registry)
}

/// Registers every built-in generator: roles first, then channels.
pub fn register_all(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.try_register(role_enum::definition())?;
    registry.try_register(channel_enum::definition())?;
    Ok(())
}

/// Attaches the header and helpers shared by the built-in generators.
fn with_shared_helpers(definition: GeneratorDefinition) -> GeneratorDefinition {
    definition
        .with_header(GENERATED_FILE_HEADER)
        .with_helper("identifier", normalize_identifier)
        .with_helper("rust_string", rust_string_literal)
}

/// Checks that no two names produce the same constant under `prefix`.
///
/// A name without any letter produces the bare prefix as its constant. That is
/// allowed but logged, since a second such name in the same type collides.
///
/// # Arguments
/// - `prefix` - Constant prefix of the generated type, e.g. `Role`
/// - `names` - Display names in declaration order
///
/// # Returns
/// - `Ok(())` - Every name maps to a distinct constant
/// - `Err(RenderError::IdentifierCollision)` - First pair of names sharing a constant
pub fn ensure_unique_identifiers<'a>(
    prefix: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), RenderError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for name in names {
        let identifier = format!("{}{}", prefix, normalize_identifier(name));

        if identifier.len() == prefix.len() {
            tracing::warn!(
                "Name '{}' contains no letters, generating bare constant {}",
                name,
                identifier
            );
        }

        if let Some(first) = seen.insert(identifier.clone(), name) {
            return Err(RenderError::IdentifierCollision {
                identifier,
                first: first.to_string(),
                second: name.to_string(),
            });
        }
    }

    Ok(())
}
