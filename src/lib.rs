pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::engine::{plan, DependsEngine, PlanEntry};
pub use crate::core::generator::ManifestGenerator;
pub use crate::core::module_name::{module_name_from_content, module_name_from_file};
pub use crate::core::parser::{parse_dependency_content, parse_dependency_file};
pub use crate::domain::model::{DependencyConfig, Layer, Package};
pub use crate::utils::error::{DependsError, Result};
