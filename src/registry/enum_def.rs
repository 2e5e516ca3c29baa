use roxmltree::Node;
use tracing::debug;

use super::values::{actual_value, EnumValue};
use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnumKind {
    Enum,
    Bitmask,
}

/// One `<enum>` entry of an `<enums>` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumeratorSpec {
    pub raw_name: String,
    pub value: EnumValue,
    pub comment: Option<String>,
}

impl EnumeratorSpec {
    pub fn new(raw_name: impl Into<String>, value: EnumValue) -> Self {
        Self {
            raw_name: raw_name.into(),
            value,
            comment: None,
        }
    }

    /// Returns `None` for alias entries, which carry no value of their own.
    pub fn map_from_xml(enumerator: Node) -> Result<Option<Self>> {
        let raw_name: String = enumerator
            .attribute("name")
            .map(|v| actual_value(v, enumerator))
            .transpose()?
            .ok_or(Error::MissingAttribute {
                element: "enum",
                attribute: "name",
            })?;

        let value = if let Some(value) = enumerator.attribute("value") {
            EnumValue::parse(&raw_name, value)?
        } else if let Some(bitpos) = enumerator.attribute("bitpos") {
            EnumValue::from_bitpos(&raw_name, bitpos)?
        } else if enumerator.has_attribute("alias") {
            return Ok(None);
        } else {
            return Err(Error::MissingAttribute {
                element: "enum",
                attribute: "value",
            });
        };

        let comment = enumerator
            .attribute("comment")
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(Some(Self {
            raw_name,
            value,
            comment,
        }))
    }
}

/// An `<enums>` block of kind `enum` or `bitmask`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumSpec {
    pub raw_type_name: String,
    pub kind: EnumKind,
    /// As declared; only 32 and 64 can be rendered.
    pub bit_width: u32,
    /// Never empty, in registry order.
    pub values: Vec<EnumeratorSpec>,
}

impl EnumSpec {
    pub const TAG_NAME: &'static str = "enums";
    pub const DEFAULT_BIT_WIDTH: u32 = 32;

    /// Returns `None` for blocks that are not enumeration types (API constants) and for
    /// enumerations without any valued entry.
    pub fn map_from_xml(enums: Node) -> Result<Option<Self>> {
        debug_assert_eq!(enums.tag_name().name(), Self::TAG_NAME);

        let kind = match enums.attribute("type") {
            Some("enum") => EnumKind::Enum,
            Some("bitmask") => EnumKind::Bitmask,
            _ => return Ok(None),
        };

        let raw_type_name: String = enums
            .attribute("name")
            .map(|v| actual_value(v, enums))
            .transpose()?
            .ok_or(Error::MissingAttribute {
                element: Self::TAG_NAME,
                attribute: "name",
            })?;

        let bit_width = enums
            .attribute("bitwidth")
            .map(|v| actual_value::<u32>(v, enums))
            .transpose()?
            .unwrap_or(Self::DEFAULT_BIT_WIDTH);

        let mut values = Vec::new();
        for enumerator in enums
            .children()
            .filter(|c| c.tag_name().name() == "enum")
        {
            if let Some(value) = EnumeratorSpec::map_from_xml(enumerator)? {
                values.push(value);
            }
        }

        if values.is_empty() {
            debug!(name = %raw_type_name, "Skipping enumeration without values.");
            return Ok(None);
        }

        Ok(Some(Self {
            raw_type_name,
            kind,
            bit_width,
            values,
        }))
    }
}
