use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read the registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to download the registry: {0}")]
    Http(#[from] reqwest::Error),

    #[error("the registry is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("<{element}> is missing the {attribute:?} attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("<{parent}> has no <{child}> child")]
    MissingElement {
        parent: &'static str,
        child: &'static str,
    },

    #[error("{name}: cannot interpret value {text:?}")]
    InvalidValue { name: String, text: String },

    #[error("{name}: unknown bit width {bit_width}, expected 32 or 64")]
    UnknownBitWidth { name: String, bit_width: u32 },

    #[error("{enum_name}: more than one enumerator is named {name:?}")]
    DuplicateName { enum_name: String, name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
