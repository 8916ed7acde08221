use crate::core::module_name::module_name_from_content;
use crate::core::parser::parse_dependency_content;
use crate::core::{ConfigProvider, DependencyConfig, Generator, Storage};
use crate::utils::error::Result;

/// Invalid UTF-8 surfaces as an I/O error, matching `std::fs::read_to_string`.
fn decode(data: Vec<u8>) -> Result<String> {
    String::from_utf8(data)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// A package together with everything it is allowed to import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub layer: String,
    pub path: String,
    pub level: usize,
    pub dependencies: Vec<String>,
}

/// Derived dependencies of every package, in declaration order.
pub fn plan(config: &DependencyConfig) -> Vec<PlanEntry> {
    config
        .layers
        .iter()
        .flat_map(|layer| {
            layer.packages.iter().map(move |pkg| PlanEntry {
                layer: layer.name.clone(),
                path: pkg.path.clone(),
                level: pkg.level,
                dependencies: config.dependencies_of(pkg),
            })
        })
        .collect()
}

/// Parses a dependency file found in `storage` and writes the generated artifacts back
/// into it.
pub struct DependsEngine<S: Storage, G: Generator, C: ConfigProvider> {
    storage: S,
    generator: G,
    config: C,
}

impl<S: Storage, G: Generator, C: ConfigProvider> DependsEngine<S, G, C> {
    pub fn new(storage: S, generator: G, config: C) -> Self {
        Self {
            storage,
            generator,
            config,
        }
    }

    pub fn load(&self, dependency_file: &str) -> Result<DependencyConfig> {
        let data = self.storage.read_file(dependency_file)?;
        parse_dependency_content(&decode(data)?)
    }

    pub fn module_name(&self) -> Result<String> {
        if let Some(module) = self.config.module_override() {
            tracing::debug!("Using configured module name: {}", module);
            return Ok(module.to_string());
        }

        let manifest = self.config.manifest_file_name();
        let data = self.storage.read_file(manifest)?;
        module_name_from_content(&decode(data)?, manifest)
    }

    /// Returns the paths of the written artifacts.
    pub fn run(&self, dependency_file: &str) -> Result<Vec<String>> {
        tracing::info!("Parsing {}", dependency_file);
        let model = self.load(dependency_file)?;
        tracing::info!(
            "Found {} layers and {} packages",
            model.layers.len(),
            model.all_packages().len()
        );

        let module = self.module_name()?;
        tracing::info!("Module: {}", module);

        let artifacts = self.generator.generate(&module, &model)?;
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            self.storage.write_file(&artifact.path, &artifact.contents)?;
            tracing::debug!("Wrote {}", artifact.path);
            written.push(artifact.path);
        }

        tracing::info!("Generated {} files", written.len());
        Ok(written)
    }
}
