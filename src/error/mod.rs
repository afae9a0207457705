//! Error types for the generator.
//!
//! `AppError` is the top-level error returned to `main`. Startup problems surface as
//! `ConfigError` or `RegistryError`; a failed generator run surfaces as `RunError`,
//! which names the definition that failed and wraps the step-specific
//! `GeneratorError`. None of these are retried: every error ends the run.

pub mod config;
pub mod generator;
pub mod registry;

use thiserror::Error;

use crate::error::{config::ConfigError, generator::RunError, registry::RegistryError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while loading environment variables.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A generator definition could not be registered.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// A registered generator failed; later generators did not run.
    #[error(transparent)]
    RunErr(#[from] RunError),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logger: {0}")]
    LoggerErr(String),
}

/// Formats an error followed by every error in its source chain.
///
/// Tera and Serenity errors carry the useful detail in their sources, so the fatal
/// log line prints the whole chain separated by `: `.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::generator::WriteError;
    use std::path::PathBuf;

    /// Tests that nested sources are appended once.
    ///
    /// Verifies that a source whose message already appears in the outer message is
    /// not repeated.
    ///
    /// Expected: outer message followed by the io error exactly once
    #[test]
    fn error_chain_includes_sources_once() {
        let err = WriteError {
            path: PathBuf::from("src/enums/role.rs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };

        let chain = error_chain(&err);

        assert_eq!(chain.matches("read-only").count(), 1);
        assert!(chain.starts_with("Failed to write src/enums/role.rs"));
    }
}
