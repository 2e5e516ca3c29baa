//! Normalized names for the Vulkan registry's enumerations and parameters.
//!
//! The core is pure: [`generator::prefix::resolve`], [`generator::enumerator::normalize`] and
//! [`registry::TypeSpec::infer`] depend only on their arguments and on a [`config::Config`]
//! that is built once and shared by reference.

pub mod config;
pub mod error;
pub mod generator;
pub mod registry;

pub use config::{Config, NameOverrideTable};
pub use error::{Error, Result};
pub use generator::{generate_rust, DuplicateNameAction, EnumFilter};
pub use registry::{read_registry, Registry};
