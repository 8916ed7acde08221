use crate::domain::model::{Artifact, DependencyConfig};
use crate::utils::error::Result;

/// File access relative to a base directory.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    /// Manifest looked up next to the dependency file to find the module name.
    fn manifest_file_name(&self) -> &str;
    /// Explicit module name; skips the manifest lookup when set.
    fn module_override(&self) -> Option<&str>;
}

/// Renders a finished model into per-package artifacts. Writing them is the caller's job.
pub trait Generator {
    fn generate(&self, module: &str, config: &DependencyConfig) -> Result<Vec<Artifact>>;
}
