use std::collections::HashMap;

use crate::config::Config;

/// Maps a raw registry type name to the name used in generated code.
pub trait TypeNameMapper {
    /// Must return a non-empty name for a non-empty input.
    fn mapped_name(&self, raw_name: &str) -> String;
}

/// Explicit table first, then the registry's type namespace (`Vk`) is dropped.
#[derive(Clone, Debug)]
pub struct RegistryTypeMapper<'a> {
    names: &'a HashMap<String, String>,
    type_namespace: &'a str,
}

impl<'a> RegistryTypeMapper<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            names: &config.type_names,
            type_namespace: &config.type_namespace,
        }
    }
}

impl TypeNameMapper for RegistryTypeMapper<'_> {
    fn mapped_name(&self, raw_name: &str) -> String {
        if let Some(name) = self.names.get(raw_name) {
            return name.clone();
        }
        match raw_name.strip_prefix(self.type_namespace) {
            Some(rest)
                if !self.type_namespace.is_empty()
                    && rest.starts_with(|c: char| c.is_ascii_uppercase()) =>
            {
                rest.to_string()
            }
            _ => raw_name.to_string(),
        }
    }
}

impl<F: Fn(&str) -> String> TypeNameMapper for F {
    fn mapped_name(&self, raw_name: &str) -> String {
        self(raw_name)
    }
}
