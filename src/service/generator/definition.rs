use serenity::async_trait;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{data::discord::DirectoryService, error::generator::GeneratorError};

/// Helper callable from a template as a Tera filter: `{{ value | name }}`.
pub type Helper = fn(&str) -> String;

/// Everything a generator run needs from the outside world.
pub struct GeneratorContext<'a> {
    /// Directory service entities are fetched from.
    pub directory: &'a dyn DirectoryService,
    /// Guilds to fetch from, in fetch order.
    pub guild_ids: &'a [u64],
    /// Root that definition output paths are relative to.
    pub output_dir: &'a Path,
}

/// Fetch-and-shape step of a generator definition.
///
/// Implementations fetch entities for the context's guilds, filter and order them,
/// and return the data the template is rendered with. The returned value must be a
/// JSON object; its keys become template variables.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn prepare(
        &self,
        context: &GeneratorContext<'_>,
    ) -> Result<serde_json::Value, GeneratorError>;
}

/// Declarative description of one generated source file.
///
/// Built once at startup and immutable afterwards; the registry takes ownership of
/// it on registration.
pub struct GeneratorDefinition {
    name: &'static str,
    output_path: PathBuf,
    header: &'static str,
    helpers: BTreeMap<&'static str, Helper>,
    template: &'static str,
    source: Box<dyn DataSource>,
}

impl GeneratorDefinition {
    /// Creates a definition without header or helpers.
    ///
    /// # Arguments
    /// - `name` - Unique generator name, also used as the template name
    /// - `output_path` - Path of the generated file, relative to the output directory
    /// - `template` - Tera template body
    /// - `source` - Step producing the template data
    pub fn new(
        name: &'static str,
        output_path: impl Into<PathBuf>,
        template: &'static str,
        source: impl DataSource + 'static,
    ) -> Self {
        Self {
            name,
            output_path: output_path.into(),
            header: "",
            helpers: BTreeMap::new(),
            template,
            source: Box::new(source),
        }
    }

    /// Sets the static comment block the generated file starts with.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = header;
        self
    }

    /// Exposes a helper to the template under `name`.
    ///
    /// Registering the same name twice keeps the last helper.
    pub fn with_helper(mut self, name: &'static str, helper: Helper) -> Self {
        self.helpers.insert(name, helper);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn helpers(&self) -> &BTreeMap<&'static str, Helper> {
        &self.helpers
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }
}

impl std::fmt::Debug for GeneratorDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorDefinition")
            .field("name", &self.name)
            .field("output_path", &self.output_path)
            .field("helpers", &self.helpers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
