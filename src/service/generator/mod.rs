//! Source file generation pipeline.
//!
//! A `GeneratorDefinition` describes one generated file: where it goes, the header it
//! starts with, the Tera template producing it, the helpers that template may call,
//! and the `DataSource` that fetches and shapes its data. Definitions are collected
//! in a `Registry`, and `orchestrator::run_all` executes them in registration order:
//!
//! 1. **Prepare** - the data source fetches entities and shapes template data
//! 2. **Render** - Tera fills the template, helpers exposed as filters
//! 3. **Format** - `syn` parses the result and `prettyplease` prints it
//! 4. **Write** - the header is prepended and the file replaced atomically
//!
//! The first failing step stops the run.

pub mod definition;
pub mod orchestrator;
pub mod registry;
pub mod render;
pub mod writer;

pub use definition::{DataSource, GeneratorContext, GeneratorDefinition};
pub use orchestrator::run_all;
pub use registry::Registry;

#[cfg(test)]
mod test;
