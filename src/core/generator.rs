use crate::core::{Artifact, DependencyConfig, Generator};
use crate::domain::model::package_name;
use crate::utils::error::Result;
use serde::Serialize;

pub const DEFAULT_OUTPUT_FILE: &str = "dependency.gen.json";

/// Allowed dependencies of one package, as written to its generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageManifest {
    pub package: String,
    pub name: String,
    pub layer: String,
    pub level: usize,
    pub allowed: Vec<String>,
}

/// Writes a JSON manifest of allowed imports into every package directory.
#[derive(Debug, Clone)]
pub struct ManifestGenerator {
    output_file: String,
}

impl ManifestGenerator {
    pub fn new(output_file: impl Into<String>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    pub fn manifests(&self, module: &str, config: &DependencyConfig) -> Vec<PackageManifest> {
        config
            .layers
            .iter()
            .flat_map(|layer| {
                layer.packages.iter().map(move |pkg| PackageManifest {
                    package: qualify(module, &pkg.path),
                    name: package_name(&pkg.path).to_string(),
                    layer: layer.name.clone(),
                    level: pkg.level,
                    allowed: config
                        .dependencies_of(pkg)
                        .iter()
                        .map(|dep| qualify(module, dep))
                        .collect(),
                })
            })
            .collect()
    }
}

impl Default for ManifestGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }
}

impl Generator for ManifestGenerator {
    fn generate(&self, module: &str, config: &DependencyConfig) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::new();

        for (pkg, manifest) in config
            .all_packages()
            .into_iter()
            .zip(self.manifests(module, config))
        {
            let mut contents = serde_json::to_vec_pretty(&manifest)?;
            contents.push(b'\n');
            artifacts.push(Artifact {
                path: format!("{}/{}", pkg.path.trim_end_matches('/'), self.output_file),
                contents,
            });
        }

        tracing::debug!("Rendered {} package manifests", artifacts.len());
        Ok(artifacts)
    }
}

fn qualify(module: &str, path: &str) -> String {
    format!("{}/{}", module.trim_end_matches('/'), path)
}
