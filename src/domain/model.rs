/// A unit of code inside a layer, e.g. `domain/entity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub path: String,
    /// Nesting depth inside the owning layer; only 0 and 1 are produced by the parser.
    pub level: usize,
}

impl Package {
    pub fn new(path: impl Into<String>, level: usize) -> Self {
        Self {
            path: path.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub name: String,
    /// Taken verbatim from the numbered line; gaps and duplicates are kept.
    pub order: u32,
    pub packages: Vec<Package>,
}

impl Layer {
    pub fn new(name: impl Into<String>, order: u32) -> Self {
        Self {
            name: name.into(),
            order,
            packages: Vec::new(),
        }
    }

    fn position_of(&self, path: &str) -> Option<usize> {
        self.packages.iter().position(|pkg| pkg.path == path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyConfig {
    pub layers: Vec<Layer>,
}

impl DependencyConfig {
    pub fn all_packages(&self) -> Vec<&Package> {
        self.layers
            .iter()
            .flat_map(|layer| layer.packages.iter())
            .collect()
    }

    pub fn packages_by_layer(&self, name: &str) -> Option<&[Package]> {
        self.layers
            .iter()
            .find(|layer| layer.name == name)
            .map(|layer| layer.packages.as_slice())
    }

    /// The first layer, in declaration order, that holds a package with `path`.
    pub fn layer_of(&self, path: &str) -> Option<&Layer> {
        self.layers
            .iter()
            .find(|layer| layer.position_of(path).is_some())
    }

    /// Every package `target` may depend on.
    ///
    /// All packages of layers with a strictly lower order come first, layer by layer in
    /// declaration order. They are followed by the siblings in the target's own layer that
    /// are either shallower than the target, or at the same level and declared before it.
    /// Duplicate paths in the model are not collapsed.
    pub fn dependencies_of(&self, target: &Package) -> Vec<String> {
        let Some(target_layer) = self.layer_of(&target.path) else {
            return Vec::new();
        };

        let mut dependencies: Vec<String> = self
            .layers
            .iter()
            .filter(|layer| layer.order < target_layer.order)
            .flat_map(|layer| layer.packages.iter().map(|pkg| pkg.path.clone()))
            .collect();

        let target_index = target_layer.position_of(&target.path).unwrap_or_default();

        dependencies.extend(
            target_layer
                .packages
                .iter()
                .enumerate()
                .filter(|(_, pkg)| pkg.path != target.path)
                .filter(|(i, pkg)| {
                    pkg.level < target.level || (pkg.level == target.level && *i < target_index)
                })
                .map(|(_, pkg)| pkg.path.clone()),
        );

        dependencies
    }
}

/// Generated output for one package, addressed relative to the dependency file's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: String,
    pub contents: Vec<u8>,
}

/// Last `/`-separated segment of a package path.
pub fn package_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> DependencyConfig {
        let mut domain = Layer::new("Domain layer", 1);
        domain.packages = vec![
            Package::new("domain/entity", 0),
            Package::new("domain/valueobject", 0),
            Package::new("domain/service", 1),
        ];
        let mut app = Layer::new("Application layer", 2);
        app.packages = vec![Package::new("app/service", 0), Package::new("app/usecase", 1)];
        let mut infra = Layer::new("Infra layer", 4);
        infra.packages = vec![Package::new("infra/database", 0)];

        DependencyConfig {
            layers: vec![domain, app, infra],
        }
    }

    #[test]
    fn test_first_package_of_top_layer_has_no_dependencies() {
        let config = sample_config();
        assert!(config
            .dependencies_of(&Package::new("domain/entity", 0))
            .is_empty());
    }

    #[test]
    fn test_same_level_siblings_declared_earlier_are_allowed() {
        let config = sample_config();
        assert_eq!(
            config.dependencies_of(&Package::new("domain/valueobject", 0)),
            vec!["domain/entity"]
        );
    }

    #[test]
    fn test_deeper_package_sees_shallower_siblings() {
        let config = sample_config();
        assert_eq!(
            config.dependencies_of(&Package::new("domain/service", 1)),
            vec!["domain/entity", "domain/valueobject"]
        );
    }

    #[test]
    fn test_gap_in_orders_still_includes_all_upper_layers() {
        let config = sample_config();
        assert_eq!(
            config.dependencies_of(&Package::new("infra/database", 0)),
            vec![
                "domain/entity",
                "domain/valueobject",
                "domain/service",
                "app/service",
                "app/usecase",
            ]
        );
    }

    #[test]
    fn test_unknown_package_yields_nothing() {
        let config = sample_config();
        assert!(config
            .dependencies_of(&Package::new("nowhere", 0))
            .is_empty());
    }

    #[test]
    fn test_level_of_query_decides_sibling_visibility() {
        let config = sample_config();
        // a level-0 query for a level-1 package only sees earlier level-0 siblings
        assert_eq!(
            config.dependencies_of(&Package::new("app/usecase", 0)),
            vec![
                "domain/entity",
                "domain/valueobject",
                "domain/service",
                "app/service",
            ]
        );
    }

    #[test]
    fn test_duplicate_paths_are_not_collapsed() {
        let mut top = Layer::new("Top", 1);
        top.packages = vec![Package::new("shared", 0)];
        let mut also_top = Layer::new("Also top", 1);
        also_top.packages = vec![Package::new("shared", 0)];
        let mut bottom = Layer::new("Bottom", 2);
        bottom.packages = vec![Package::new("leaf", 0)];
        let config = DependencyConfig {
            layers: vec![top, also_top, bottom],
        };

        assert_eq!(
            config.dependencies_of(&Package::new("leaf", 0)),
            vec!["shared", "shared"]
        );
        // the first occurrence decides the governing layer
        assert_eq!(config.layer_of("shared").map(|l| l.name.as_str()), Some("Top"));
    }

    #[test]
    fn test_all_packages_and_lookup_by_layer() {
        let config = sample_config();
        let paths: Vec<&str> = config
            .all_packages()
            .into_iter()
            .map(|pkg| pkg.path.as_str())
            .collect();
        assert_eq!(paths.len(), 6);
        assert_eq!(paths[0], "domain/entity");
        assert_eq!(paths[5], "infra/database");

        assert_eq!(config.packages_by_layer("Application layer").map(<[_]>::len), Some(2));
        assert!(config.packages_by_layer("Missing").is_none());
    }

    #[test]
    fn test_queries_from_several_threads() {
        let config = &sample_config();
        let targets = [
            Package::new("domain/service", 1),
            Package::new("app/usecase", 1),
        ];

        let results: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = targets
                .iter()
                .map(|target| scope.spawn(move || config.dependencies_of(target).len()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results, vec![2, 4]);
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("domain/entity"), "entity");
        assert_eq!(package_name("api"), "api");
        assert_eq!(package_name("a/b/c"), "c");
    }
}
