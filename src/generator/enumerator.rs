//! Short names for enumerators.
//!
//! The input domain is raw registry constants. Running an already normalized name through
//! [`normalize`] again is not meaningful and its result is unspecified.

use std::collections::HashSet;

use super::{naming::pretty_name, prefix, type_map::TypeNameMapper};
use crate::config::Config;
use crate::registry::{EnumKind, EnumSpec, EnumValue};

/// Name of the zero enumerator synthesized for bitmasks that do not declare one.
pub const BITMASK_NONE: &str = "None";

/// Remove the first case-insensitive occurrence of each ignored part, in order.
pub fn trim_ignored_parts(constant: &str, ignored_parts: &[String]) -> String {
    let mut result = constant.to_string();
    for ignored in ignored_parts {
        if ignored.is_empty() {
            continue;
        }
        let lowered = result.to_ascii_lowercase();
        if let Some(index) = lowered.find(&ignored.to_ascii_lowercase()) {
            result.replace_range(index..index + ignored.len(), "");
        }
    }
    result
}

/// The final short name of `raw_name` within an enumeration whose prefix is `prefix`.
///
/// Never fails: names the heuristic gets wrong are corrected through the override table.
pub fn normalize(raw_name: &str, prefix: &str, config: &Config) -> String {
    if let Some(name) = config.overrides.enumerator(raw_name) {
        return name.to_string();
    }
    let trimmed = trim_ignored_parts(raw_name, &config.ignored_parts);
    pretty_name(&trimmed, prefix, config)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedValue {
    pub name: String,
    /// `None` for the synthesized bitmask zero value.
    pub raw_name: Option<String>,
    pub value: EnumValue,
    pub comment: Option<String>,
}

/// An enumeration with every value renamed, ready for the assembler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedEnum {
    pub raw_type_name: String,
    pub mapped_type_name: String,
    pub prefix: String,
    pub kind: EnumKind,
    pub bit_width: u32,
    pub values: Vec<NormalizedValue>,
    /// Names produced by more than one value, in order of their second occurrence.
    pub duplicates: Vec<String>,
}

impl NormalizedEnum {
    pub fn requires_bitmask_annotation(&self) -> bool {
        self.kind == EnumKind::Bitmask
    }
}

pub fn normalize_enum(
    spec: &EnumSpec,
    mapper: &dyn TypeNameMapper,
    config: &Config,
) -> NormalizedEnum {
    let mapped_type_name = mapper.mapped_name(&spec.raw_type_name);
    let prefix = prefix::resolve(&mapped_type_name, &config.overrides);

    let mut values: Vec<_> = spec
        .values
        .iter()
        .map(|v| NormalizedValue {
            name: normalize(&v.raw_name, &prefix, config),
            raw_name: Some(v.raw_name.clone()),
            value: v.value.clone(),
            comment: v.comment.clone(),
        })
        .collect();

    if spec.kind == EnumKind::Bitmask && !values.iter().any(|v| v.name == BITMASK_NONE) {
        values.insert(
            0,
            NormalizedValue {
                name: BITMASK_NONE.to_string(),
                raw_name: None,
                value: EnumValue::Literal(0),
                comment: None,
            },
        );
    }

    let duplicates = {
        let mut seen = HashSet::new();
        values
            .iter()
            .filter(|v| !seen.insert(v.name.as_str()))
            .map(|v| v.name.clone())
            .collect()
    };

    NormalizedEnum {
        raw_type_name: spec.raw_type_name.clone(),
        mapped_type_name,
        prefix,
        kind: spec.kind,
        bit_width: spec.bit_width,
        values,
        duplicates,
    }
}
