pub mod enumerator;
pub mod naming;
pub mod prefix;
pub mod rust;
pub mod type_map;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::registry::{CommandSpec, Registry};
use enumerator::{normalize_enum, NormalizedEnum};
use rust::{parameter_name, parameter_type, RustAssembler};
use type_map::{RegistryTypeMapper, TypeNameMapper};

/// What to do when two enumerators of one enumeration normalize to the same name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DuplicateNameAction {
    Deny,
    /// Keep the first, log the others.
    #[default]
    Warn,
    /// Keep the first silently.
    Allow,
}

/// Restricts generation to the named enumerations (raw type names); empty means all.
#[derive(Clone, Debug, Default)]
pub struct EnumFilter(pub Vec<String>);

impl EnumFilter {
    fn includes(&self, raw_type_name: &str) -> bool {
        self.0.is_empty() || self.0.iter().any(|n| n == raw_type_name)
    }
}

/// Normalize every selected enumeration of the registry, in registry order.
pub fn normalize_enums(
    registry: &Registry,
    config: &Config,
    filter: &EnumFilter,
) -> Vec<NormalizedEnum> {
    let mapper = RegistryTypeMapper::new(config);
    registry
        .enums
        .iter()
        .filter(|spec| filter.includes(&spec.raw_type_name))
        .map(|spec| {
            let normalized = normalize_enum(spec, &mapper, config);
            debug!(
                name = %normalized.raw_type_name,
                mapped = %normalized.mapped_type_name,
                prefix = %normalized.prefix,
                values = normalized.values.len(),
                "Normalized enumeration."
            );
            normalized
        })
        .collect()
}

pub fn generate_rust(
    registry: &Registry,
    config: &Config,
    filter: &EnumFilter,
    duplicate_names: DuplicateNameAction,
) -> Result<String> {
    let mut assembler = RustAssembler::new(duplicate_names);
    let enums = normalize_enums(registry, config, filter);
    for normalized in &enums {
        assembler.visit_enum(normalized)?;
    }
    info!(enums = enums.len(), "Generated enumeration declarations.");
    Ok(assembler.finish())
}

/// `vkCreateInstance(p_create_info: *mut InstanceCreateInfo, ...)`
pub fn describe_command(command: &CommandSpec, mapper: &dyn TypeNameMapper) -> String {
    let params = command
        .params
        .iter()
        .map(|p| format!("{}: {}", parameter_name(p), parameter_type(p, mapper)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({params})", command.name)
}
