//! Reader for the registry XML (`vk.xml`).
//!
//! Only the parts the name generator consumes are read: typed `<enums>` blocks and the
//! parameter lists of `<command>` elements.

pub mod enum_def;
pub mod parameter;
pub mod type_spec;
pub mod values;

use roxmltree::Node;
use tracing::{debug, info};

use crate::error::{Error, Result};
pub use enum_def::{EnumKind, EnumSpec, EnumeratorSpec};
pub use parameter::{ParameterSpec, PassMode};
pub use type_spec::{Indirection, TypeSpec};
pub use values::EnumValue;

/// A `<command>` with a `<proto>`; aliases are not represented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub params: Vec<ParameterSpec>,
}

impl CommandSpec {
    pub const TAG_NAME: &'static str = "command";

    pub fn map_from_xml(command: Node) -> Result<Option<Self>> {
        let Some(proto) = command.children().find(|c| c.tag_name().name() == "proto") else {
            return Ok(None);
        };
        let name = child_text(proto, "proto", "name")?;
        let params = command
            .children()
            .filter(|c| c.tag_name().name() == ParameterSpec::TAG_NAME)
            .map(ParameterSpec::map_from_xml)
            .collect::<Result<_>>()?;
        Ok(Some(Self { name, params }))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    pub enums: Vec<EnumSpec>,
    pub commands: Vec<CommandSpec>,
}

impl Registry {
    pub fn map_from_xml(registry: Node) -> Result<Self> {
        let mut enums = Vec::new();
        for node in registry
            .children()
            .filter(|c| c.tag_name().name() == EnumSpec::TAG_NAME)
        {
            if let Some(spec) = EnumSpec::map_from_xml(node)? {
                enums.push(spec);
            }
        }

        let mut commands = Vec::new();
        for node in registry
            .children()
            .filter(|c| c.tag_name().name() == "commands")
            .flat_map(|c| c.children())
            .filter(|c| c.tag_name().name() == CommandSpec::TAG_NAME)
        {
            match CommandSpec::map_from_xml(node)? {
                Some(command) => commands.push(command),
                None => debug!(
                    name = node.attribute("name").unwrap_or_default(),
                    "Skipping command alias."
                ),
            }
        }

        info!(
            enums = enums.len(),
            commands = commands.len(),
            "Read registry."
        );
        Ok(Self { enums, commands })
    }

    pub fn find_enum(&self, raw_type_name: &str) -> Option<&EnumSpec> {
        self.enums.iter().find(|e| e.raw_type_name == raw_type_name)
    }
}

pub fn read_registry(document: &roxmltree::Document) -> Result<Registry> {
    Registry::map_from_xml(document.root_element())
}

/// Read the registry text from a file path or an `http(s)://` URL.
pub fn load_source(input: &str) -> Result<String> {
    if input.starts_with("http://") || input.starts_with("https://") {
        info!(url = input, "Downloading registry.");
        Ok(reqwest::blocking::get(input)?
            .error_for_status()?
            .text()?)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

/// Concatenated text of all descendants, i.e. the declaration as written in C.
pub(crate) fn node_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

pub(crate) fn child_text(
    node: Node,
    parent: &'static str,
    child: &'static str,
) -> Result<String> {
    node.children()
        .find(|c| c.tag_name().name() == child)
        .map(node_text)
        .ok_or(Error::MissingElement { parent, child })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<registry>
    <comment>Test registry</comment>
    <enums name="API Constants" comment="Misc. hardcoded constants">
        <enum type="uint32_t" value="256" name="VK_MAX_PHYSICAL_DEVICE_NAME_SIZE"/>
    </enums>
    <enums name="VkResult" type="enum">
        <enum value="0" name="VK_SUCCESS" comment="Command completed successfully"/>
        <enum value="-1" name="VK_ERROR_OUT_OF_HOST_MEMORY"/>
    </enums>
    <enums name="VkCullModeFlagBits" type="bitmask">
        <enum value="0" name="VK_CULL_MODE_NONE"/>
        <enum bitpos="0" name="VK_CULL_MODE_FRONT_BIT"/>
    </enums>
    <commands comment="Vulkan command definitions">
        <command successcodes="VK_SUCCESS">
            <proto><type>VkResult</type> <name>vkCreateInstance</name></proto>
            <param>const <type>VkInstanceCreateInfo</type>* <name>pCreateInfo</name></param>
            <param optional="true">const <type>VkAllocationCallbacks</type>* <name>pAllocator</name></param>
            <param><type>VkInstance</type>* <name>pInstance</name></param>
        </command>
        <command name="vkGetPhysicalDeviceFeatures2KHR" alias="vkGetPhysicalDeviceFeatures2"/>
    </commands>
</registry>"#;

    #[test]
    fn reads_enums_and_commands() {
        let doc = roxmltree::Document::parse(REGISTRY).unwrap();
        let registry = read_registry(&doc).unwrap();

        let names: Vec<_> = registry
            .enums
            .iter()
            .map(|e| e.raw_type_name.as_str())
            .collect();
        assert_eq!(names, ["VkResult", "VkCullModeFlagBits"]);
        assert_eq!(
            registry.find_enum("VkResult").unwrap().values[1].value,
            EnumValue::Literal(-1)
        );

        assert_eq!(registry.commands.len(), 1);
        let command = &registry.commands[0];
        assert_eq!(command.name, "vkCreateInstance");
        assert_eq!(command.params.len(), 3);
        assert!(command.params[1].is_optional);
        assert_eq!(command.params[2].type_spec.indirection, Indirection::Single);
    }

    #[test]
    fn node_text_joins_descendants() {
        let doc = roxmltree::Document::parse(
            "<param>const <type>char</type>* const* <name>ppNames</name></param>",
        )
        .unwrap();
        assert_eq!(node_text(doc.root_element()), "const char* const* ppNames");
    }

    #[test]
    fn loads_source_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, REGISTRY.as_bytes()).unwrap();
        let text = load_source(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, REGISTRY);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_source("/nonexistent/vk.xml"),
            Err(Error::Io(_))
        ));
    }
}
