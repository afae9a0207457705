use crate::{
    error::registry::RegistryError,
    service::generator::{render, GeneratorDefinition},
};

/// Ordered collection of generator definitions.
///
/// Built once at startup and handed to the orchestrator by reference. Definitions
/// run in the order they were registered.
#[derive(Debug, Default)]
pub struct Registry {
    definitions: Vec<GeneratorDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, panicking if it is rejected.
    ///
    /// Registration happens once at startup with definitions known at compile time,
    /// so a rejected definition is a programming error rather than a runtime
    /// condition. Use `try_register` to handle the error instead.
    ///
    /// # Panics
    /// - If `try_register` returns an error
    pub fn register(&mut self, definition: GeneratorDefinition) {
        if let Err(e) = self.try_register(definition) {
            panic!("{}", e);
        }
    }

    /// Registers a definition after validating it.
    ///
    /// # Arguments
    /// - `definition` - Definition to append
    ///
    /// # Returns
    /// - `Ok(())` - Definition appended
    /// - `Err(RegistryError::DuplicateName)` - A definition with this name exists
    /// - `Err(RegistryError::DuplicateOutputPath)` - Another definition writes the same file
    /// - `Err(RegistryError::InvalidHelperName)` - A helper name is not a valid filter name
    /// - `Err(RegistryError::InvalidTemplate)` - The template does not compile
    pub fn try_register(&mut self, definition: GeneratorDefinition) -> Result<(), RegistryError> {
        if self.get(definition.name()).is_some() {
            return Err(RegistryError::DuplicateName(definition.name().to_string()));
        }

        if let Some(existing) = self
            .definitions
            .iter()
            .find(|d| d.output_path() == definition.output_path())
        {
            return Err(RegistryError::DuplicateOutputPath {
                name: definition.name().to_string(),
                path: definition.output_path().to_path_buf(),
                existing: existing.name().to_string(),
            });
        }

        if let Some(helper) = definition
            .helpers()
            .keys()
            .find(|helper| !is_valid_helper_name(helper))
        {
            return Err(RegistryError::InvalidHelperName {
                name: definition.name().to_string(),
                helper: helper.to_string(),
            });
        }

        render::build_engine(&definition).map_err(|source| RegistryError::InvalidTemplate {
            name: definition.name().to_string(),
            source,
        })?;

        self.definitions.push(definition);

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&GeneratorDefinition> {
        self.definitions.iter().find(|d| d.name() == name)
    }

    /// Iterates definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratorDefinition> {
        self.definitions.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.definitions.iter().map(|d| d.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn is_valid_helper_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
