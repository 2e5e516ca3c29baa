use roxmltree::Node;

use super::{child_text, node_text, type_spec::TypeSpec};
use crate::error::Result;

/// How a parameter is handed to the callee.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PassMode {
    #[default]
    Value,
    Reference,
    Out,
}

/// A `<param>` of a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    pub type_spec: TypeSpec,
    pub pass_mode: PassMode,
    pub is_optional: bool,
    /// The API profile this parameter belongs to; `None` means all profiles.
    pub api: Option<String>,
}

impl ParameterSpec {
    pub const TAG_NAME: &'static str = "param";

    pub fn new(name: impl Into<String>, type_spec: TypeSpec) -> Self {
        Self {
            name: name.into(),
            type_spec,
            pass_mode: PassMode::Value,
            is_optional: false,
            api: None,
        }
    }

    pub fn with_pass_mode(self, pass_mode: PassMode) -> Self {
        Self { pass_mode, ..self }
    }

    pub fn map_from_xml(param: Node) -> Result<Self> {
        debug_assert_eq!(param.tag_name().name(), Self::TAG_NAME);

        let name = child_text(param, Self::TAG_NAME, "name")?;
        let type_name = child_text(param, Self::TAG_NAME, "type")?;
        let type_spec = TypeSpec::infer(&node_text(param), &type_name);

        // Only a bare `true` marks the parameter itself; lists describe multi-level pointers.
        let is_optional = param.attribute("optional") == Some("true");

        let api = param.attribute("api").map(str::to_string);

        Ok(Self {
            name,
            type_spec,
            pass_mode: PassMode::Value,
            is_optional,
            api,
        })
    }
}
