use serde_json::Value;

use crate::{
    data::discord::fake::{channel, role, FakeDirectory},
    error::{generator::RenderError, registry::RegistryError, AppError},
    generators::{channel_enum, ensure_unique_identifiers, register_all, registry, role_enum},
    model::discord::ChannelKind,
    service::generator::{
        render::{format_source, render},
        run_all, GeneratorContext, GeneratorDefinition,
    },
};

mod run;

const GUILD_ID: u64 = 900;

/// Renders and formats a definition with the given data.
fn generate(definition: &GeneratorDefinition, data: &Value) -> String {
    let rendered = render(definition, data).expect("template renders");
    format_source(definition.name(), &rendered).expect("output is valid Rust")
}

/// Names of every `const` item in a generated file.
fn const_names(source: &str) -> Vec<String> {
    let file = syn::parse_file(source).expect("output parses");
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Const(item) => Some(item.ident.to_string()),
            _ => None,
        })
        .collect()
}
