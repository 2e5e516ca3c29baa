//! Override tables and naming settings.
//!
//! The built-in catalog covers the registry's historically irregular names. A TOML file can
//! extend it; entries from the file win over built-in ones.

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Literal corrections for names the heuristics get wrong. Both maps are exact-match and
/// case-sensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameOverrideTable {
    /// Mapped type name -> canonical prefix.
    pub prefixes: HashMap<String, String>,
    /// Raw enumerator name -> final name.
    pub enumerators: HashMap<String, String>,
}

impl NameOverrideTable {
    pub fn prefix(&self, mapped_type_name: &str) -> Option<&str> {
        self.prefixes.get(mapped_type_name).map(String::as_str)
    }

    pub fn enumerator(&self, raw_name: &str) -> Option<&str> {
        self.enumerators.get(raw_name).map(String::as_str)
    }

    fn extend(&mut self, other: NameOverrideTable) {
        self.prefixes.extend(other.prefixes);
        self.enumerators.extend(other.enumerators);
    }
}

fn table<const N: usize>(entries: [(&str, &str); N]) -> HashMap<String, String> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

lazy_static! {
    static ref DEFAULT_OVERRIDES: NameOverrideTable = NameOverrideTable {
        prefixes: table([("Result", "VK")]),
        enumerators: table([
            ("VK_STENCIL_FRONT_AND_BACK", "FrontAndBack"),
            // StructureType
            ("VK_STRUCTURE_TYPE_MEMORY_ALLOCATE_FLAGS_INFO", "MemoryAllocateFlagsInfo"),
            // SampleCountFlagBits
            ("VK_SAMPLE_COUNT_1_BIT", "Count1"),
            ("VK_SAMPLE_COUNT_2_BIT", "Count2"),
            ("VK_SAMPLE_COUNT_4_BIT", "Count4"),
            ("VK_SAMPLE_COUNT_8_BIT", "Count8"),
            ("VK_SAMPLE_COUNT_16_BIT", "Count16"),
            ("VK_SAMPLE_COUNT_32_BIT", "Count32"),
            ("VK_SAMPLE_COUNT_64_BIT", "Count64"),
            // ImageType
            ("VK_IMAGE_TYPE_1D", "Image1D"),
            ("VK_IMAGE_TYPE_2D", "Image2D"),
            ("VK_IMAGE_TYPE_3D", "Image3D"),
            // ImageViewType
            ("VK_IMAGE_VIEW_TYPE_1D", "Image1D"),
            ("VK_IMAGE_VIEW_TYPE_2D", "Image2D"),
            ("VK_IMAGE_VIEW_TYPE_3D", "Image3D"),
            ("VK_IMAGE_VIEW_TYPE_CUBE", "ImageCube"),
            ("VK_IMAGE_VIEW_TYPE_1D_ARRAY", "Image1DArray"),
            ("VK_IMAGE_VIEW_TYPE_2D_ARRAY", "Image2DArray"),
            ("VK_IMAGE_VIEW_TYPE_CUBE_ARRAY", "ImageCubeArray"),
        ]),
    };

    static ref DEFAULT_TYPE_NAMES: HashMap<String, String> = table([
        ("void", "c_void"),
        ("char", "c_char"),
        ("float", "f32"),
        ("double", "f64"),
        ("int8_t", "i8"),
        ("uint8_t", "u8"),
        ("int16_t", "i16"),
        ("uint16_t", "u16"),
        ("int32_t", "i32"),
        ("uint32_t", "u32"),
        ("int64_t", "i64"),
        ("uint64_t", "u64"),
        ("int", "c_int"),
        ("size_t", "usize"),
        ("VkBool32", "Bool32"),
    ]);
}

const DEFAULT_NAMESPACE: &str = "VK";
const DEFAULT_TYPE_NAMESPACE: &str = "Vk";
const DEFAULT_IGNORED_PARTS: [&str; 2] = ["flags", "bit"];
const DEFAULT_VENDOR_TAGS: [&str; 14] = [
    "KHR", "EXT", "AMD", "NV", "NVX", "INTEL", "ARM", "QCOM", "HUAWEI", "GOOGLE", "LUNARG",
    "VALVE", "FUCHSIA", "MESA",
];

/// Everything the name generator is parameterised with. Built once and passed by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Namespace in front of every raw constant, e.g. `VK` in `VK_SUCCESS`.
    pub namespace: String,
    /// Namespace in front of every raw type name, e.g. `Vk` in `VkResult`.
    pub type_namespace: String,
    /// Noise removed from raw constants before prettifying, matched case-insensitively.
    pub ignored_parts: Vec<String>,
    /// Words kept upper case in prettified names.
    pub vendor_tags: Vec<String>,
    pub overrides: NameOverrideTable,
    /// Raw type name -> mapped type name.
    pub type_names: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            type_namespace: DEFAULT_TYPE_NAMESPACE.to_string(),
            ignored_parts: DEFAULT_IGNORED_PARTS.map(String::from).to_vec(),
            vendor_tags: DEFAULT_VENDOR_TAGS.map(String::from).to_vec(),
            overrides: DEFAULT_OVERRIDES.clone(),
            type_names: DEFAULT_TYPE_NAMES.clone(),
        }
    }
}

/// On-disk form; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    namespace: Option<String>,
    type_namespace: Option<String>,
    ignored_parts: Option<Vec<String>>,
    vendor_tags: Option<Vec<String>>,
    #[serde(default)]
    prefixes: HashMap<String, String>,
    #[serde(default)]
    enumerators: HashMap<String, String>,
    #[serde(default)]
    type_names: HashMap<String, String>,
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        debug!(
            prefixes = file.prefixes.len(),
            enumerators = file.enumerators.len(),
            type_names = file.type_names.len(),
            "Parsed configuration overrides."
        );

        let mut config = Self::default();
        if let Some(namespace) = file.namespace {
            config.namespace = namespace;
        }
        if let Some(type_namespace) = file.type_namespace {
            config.type_namespace = type_namespace;
        }
        if let Some(ignored_parts) = file.ignored_parts {
            config.ignored_parts = ignored_parts;
        }
        if let Some(vendor_tags) = file.vendor_tags {
            config.vendor_tags = vendor_tags;
        }
        config.overrides.extend(NameOverrideTable {
            prefixes: file.prefixes,
            enumerators: file.enumerators,
        });
        config.type_names.extend(file.type_names);
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn is_vendor_tag(&self, word: &str) -> bool {
        self.vendor_tags.iter().any(|tag| tag == word)
    }
}
