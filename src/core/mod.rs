pub mod engine;
pub mod generator;
pub mod module_name;
pub mod parser;

pub use crate::domain::model::{Artifact, DependencyConfig, Layer, Package};
pub use crate::domain::ports::{ConfigProvider, Generator, Storage};
pub use crate::utils::error::Result;
