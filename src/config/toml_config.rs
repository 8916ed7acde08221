use crate::core::generator::{ManifestGenerator, DEFAULT_OUTPUT_FILE};
use crate::core::ConfigProvider;
use crate::utils::error::{DependsError, Result};
use crate::utils::validation::{validate_file_name, validate_module_name, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_MANIFEST_FILE: &str = "go.mod";

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub output_file: String,
    pub manifest_file: String,
    pub module: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            module: None,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DependsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// File name written into each package directory.
    pub fn output_file_name(&self) -> &str {
        &self.generator.output_file
    }

    pub fn generator(&self) -> ManifestGenerator {
        ManifestGenerator::new(self.output_file_name())
    }
}

impl ConfigProvider for TomlConfig {
    fn manifest_file_name(&self) -> &str {
        &self.generator.manifest_file
    }

    fn module_override(&self) -> Option<&str> {
        self.generator.module.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_file_name("generator.output_file", &self.generator.output_file)?;
        validate_file_name("generator.manifest_file", &self.generator.manifest_file)?;
        if let Some(module) = &self.generator.module {
            validate_module_name(module)?;
        }
        Ok(())
    }
}
