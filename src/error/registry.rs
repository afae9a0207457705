use std::path::PathBuf;
use thiserror::Error;

/// Registration errors. These indicate a mistake in a generator definition, never a
/// runtime condition.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Generator '{0}' is already registered")]
    DuplicateName(String),

    /// Two definitions would write the same file in one run.
    #[error("Generator '{name}' writes {path}, which is already claimed by '{existing}'")]
    DuplicateOutputPath {
        name: String,
        path: PathBuf,
        existing: String,
    },

    /// Helper names must be usable as Tera filter names.
    #[error("Generator '{name}' declares invalid helper name '{helper}'")]
    InvalidHelperName { name: String, helper: String },

    /// The template body does not compile.
    #[error("Generator '{name}' has an invalid template")]
    InvalidTemplate {
        name: String,
        #[source]
        source: tera::Error,
    },
}
