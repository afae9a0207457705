use dioxus_logger::tracing;
use std::path::PathBuf;

use crate::{
    error::generator::{GeneratorError, RunError},
    service::generator::{render, writer, GeneratorContext, GeneratorDefinition, Registry},
};

/// A file written by a successful generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    /// Name of the definition that produced the file.
    pub definition: &'static str,
    /// Full path of the written file.
    pub path: PathBuf,
    /// Size of the written file in bytes.
    pub bytes: usize,
}

/// Outcome of a successful run, files listed in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub files: Vec<GeneratedFile>,
}

/// Runs every registered generator in registration order.
///
/// Generators run one at a time. The first failure stops the run: later generators
/// are not started, and files written by earlier generators are left in place.
///
/// # Arguments
/// - `registry` - Definitions to run
/// - `context` - Directory service, guilds and output root shared by every definition
///
/// # Returns
/// - `Ok(RunReport)` - Every generator wrote its file
/// - `Err(RunError)` - Name of the failing generator and the step-specific error
pub async fn run_all(
    registry: &Registry,
    context: &GeneratorContext<'_>,
) -> Result<RunReport, RunError> {
    let mut report = RunReport::default();

    for definition in registry.iter() {
        tracing::info!("Running generator {}", definition.name());

        let file = run_one(definition, context)
            .await
            .map_err(|source| RunError {
                definition: definition.name().to_string(),
                source,
            })?;

        tracing::info!(
            "Generator {} wrote {} ({} bytes)",
            file.definition,
            file.path.display(),
            file.bytes
        );

        report.files.push(file);
    }

    Ok(report)
}

async fn run_one(
    definition: &GeneratorDefinition,
    context: &GeneratorContext<'_>,
) -> Result<GeneratedFile, GeneratorError> {
    let data = definition.source().prepare(context).await?;

    let rendered = render::render(definition, &data)?;
    let formatted = render::format_source(definition.name(), &rendered)?;
    let contents = render::with_header(definition.header(), &formatted);

    let path = context.output_dir.join(definition.output_path());
    writer::write_atomic(&path, &contents)?;

    Ok(GeneratedFile {
        definition: definition.name(),
        path,
        bytes: contents.len(),
    })
}
