use std::collections::HashMap;
use tera::{Context, Tera, Value};

use crate::{
    error::generator::{FormatError, RenderError},
    service::generator::GeneratorDefinition,
};

/// Builds a Tera instance holding the definition's template and helpers.
///
/// Each helper is registered as a filter taking a string and returning a string;
/// applying it to a non-string value fails the render.
///
/// # Returns
/// - `Ok(Tera)` - Engine with the template compiled under the definition's name
/// - `Err(tera::Error)` - The template does not compile
pub fn build_engine(definition: &GeneratorDefinition) -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();

    for (&name, &helper) in definition.helpers() {
        tera.register_filter(
            name,
            move |value: &Value, _args: &HashMap<String, Value>| -> tera::Result<Value> {
                let input = value.as_str().ok_or_else(|| {
                    tera::Error::msg(format!(
                        "Filter `{}` expects a string but got `{}`",
                        name, value
                    ))
                })?;
                Ok(Value::String(helper(input)))
            },
        );
    }

    tera.add_raw_template(definition.name(), definition.template())?;

    Ok(tera)
}

/// Renders a definition's template with prepared data.
///
/// # Arguments
/// - `definition` - Definition providing the template and helpers
/// - `data` - JSON object whose keys become template variables
///
/// # Returns
/// - `Ok(String)` - Rendered, unformatted source text
/// - `Err(RenderError::Template)` - Compilation or execution failed, e.g. an
///   undefined variable or a data value that is not an object
pub fn render(definition: &GeneratorDefinition, data: &Value) -> Result<String, RenderError> {
    let template_error = |source| RenderError::Template {
        template: definition.name().to_string(),
        source,
    };

    let tera = build_engine(definition).map_err(template_error)?;
    let context = Context::from_serialize(data).map_err(template_error)?;

    tera.render(definition.name(), &context).map_err(template_error)
}

/// Parses rendered text as a Rust file and pretty-prints it.
///
/// Plain `//` comments do not survive formatting; doc comments and attributes do.
///
/// # Arguments
/// - `template` - Name of the template the text came from, for error reporting
/// - `rendered` - Output of `render`
///
/// # Returns
/// - `Ok(String)` - Formatted source
/// - `Err(FormatError)` - The text is not a valid Rust file
pub fn format_source(template: &str, rendered: &str) -> Result<String, FormatError> {
    let file = syn::parse_file(rendered).map_err(|source| FormatError {
        template: template.to_string(),
        source,
    })?;

    Ok(prettyplease::unparse(&file))
}

/// Prepends the static header to formatted source, separated by a blank line.
pub fn with_header(header: &str, source: &str) -> String {
    let header = header.trim_end();
    if header.is_empty() {
        return source.to_string();
    }
    format!("{}\n\n{}", header, source)
}
