//! Errors raised while running a single generator definition.
//!
//! Each variant of `GeneratorError` maps to one pipeline step: fetch, render, format
//! and write. `RunError` attaches the failing definition's name for the orchestrator.

use std::path::PathBuf;
use thiserror::Error;

/// Listing entities from the directory service failed.
///
/// The fetch is abandoned at the first failing guild; entities already received from
/// earlier guilds are discarded.
#[derive(Error, Debug)]
#[error("Failed to fetch {entity} for guild {guild_id}")]
pub struct FetchError {
    /// Kind of entity being listed ("channels" or "roles")
    pub entity: &'static str,
    /// Guild whose listing failed
    pub guild_id: u64,
    /// Boxed due to large size.
    #[source]
    pub source: Box<serenity::Error>,
}

impl FetchError {
    pub fn new(entity: &'static str, guild_id: u64, source: serenity::Error) -> Self {
        Self {
            entity,
            guild_id,
            source: Box::new(source),
        }
    }
}

/// Template data could not be prepared or rendered.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Tera failed to compile or execute the template, e.g. an undefined field.
    #[error("Failed to render template '{template}'")]
    Template {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// Prepared data could not be serialized into a template context.
    #[error("Failed to serialize template data")]
    Data(#[from] serde_json::Error),

    /// Two entities of the same generated type normalize to one identifier.
    ///
    /// The generated file would redefine the constant, so the run stops instead of
    /// emitting it.
    #[error("Constant {identifier} would be generated for both '{first}' and '{second}'")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },
}

/// The rendered text is not a valid Rust source file.
#[derive(Error, Debug)]
#[error("Rendered output of '{template}' is not valid Rust")]
pub struct FormatError {
    pub template: String,
    #[source]
    pub source: syn::Error,
}

/// The generated file could not be written.
#[derive(Error, Debug)]
#[error("Failed to write {}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Failure of one pipeline step for a single generator definition.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl GeneratorError {
    /// Name of the pipeline step that failed, for logging.
    pub fn step(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Render(_) => "render",
            Self::Format(_) => "format",
            Self::Write(_) => "write",
        }
    }
}

/// A registered generator failed. Generators registered after it did not run.
#[derive(Error, Debug)]
#[error("Generator '{definition}' failed during {}", .source.step())]
pub struct RunError {
    pub definition: String,
    #[source]
    pub source: GeneratorError,
}
