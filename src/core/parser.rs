//! Line parser for dependency specification files.
//!
//! A specification is a markdown outline with two recognized sections:
//!
//! ```text
//! ## Layers
//!
//! 1. Domain layer
//! 2. Application layer
//!
//! ## Packages in layers
//!
//! 1. Domain layer
//!   - domain/entity
//!     - domain/service
//! 2. Application layer
//!   - app/usecase
//! ```
//!
//! The file is read in a single forward pass. A failure on any recognized line aborts the
//! whole parse; lines the parser does not recognize are skipped.

use crate::domain::model::{DependencyConfig, Layer, Package};
use crate::utils::error::{DependsError, Result};
use crate::utils::validation::{validate_name, validate_path};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const LAYERS_HEADER: &str = "## Layers";
pub const PACKAGES_HEADER: &str = "## Packages in layers";
const COMMENTARY_MARKER: &str = "cannot depend";
const BULLET_MARKER: &str = "- ";

/// Leading spaces from which a bullet counts as nested.
const NESTED_INDENT: usize = 4;

static EMPTY_LAYER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s*$").unwrap());
static LAYER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s+(.+)$").unwrap());

/// Which part of the specification the parser is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    Layers,
    Packages,
}

impl Section {
    /// The section a header line switches to, if the line is a recognized header.
    pub fn from_header(trimmed: &str) -> Option<Section> {
        if trimmed.starts_with(LAYERS_HEADER) {
            Some(Section::Layers)
        } else if trimmed.starts_with(PACKAGES_HEADER) {
            Some(Section::Packages)
        } else {
            None
        }
    }
}

pub fn parse_dependency_file(path: impl AsRef<Path>) -> Result<DependencyConfig> {
    let path = path.as_ref();
    tracing::debug!("Reading dependency file: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_dependency_content(&content)
}

pub fn parse_dependency_content(content: &str) -> Result<DependencyConfig> {
    let mut config = DependencyConfig::default();
    let mut section = Section::None;
    let mut current_layer: Option<usize> = None;

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();

        if let Some(next) = Section::from_header(line) {
            tracing::debug!("Line {}: entering {:?} section", index + 1, next);
            section = next;
            if next == Section::Packages {
                current_layer = None;
            }
            continue;
        }

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match section {
            Section::None => {}
            Section::Layers => parse_layer_line(raw_line, &mut config)?,
            Section::Packages => {
                let package = parse_package_line(raw_line, &config.layers, &mut current_layer)?;
                if let (Some(package), Some(index)) = (package, current_layer) {
                    config.layers[index].packages.push(package);
                }
            }
        }
    }

    tracing::debug!(
        "Parsed {} layers with {} packages",
        config.layers.len(),
        config.all_packages().len()
    );

    Ok(config)
}

/// Reads one line of the Layers section, appending a layer for each numbered entry.
pub fn parse_layer_line(line: &str, config: &mut DependencyConfig) -> Result<()> {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with('-') || trimmed.contains(COMMENTARY_MARKER) {
        return Ok(());
    }

    if let Some((order, name)) = numbered_entry(trimmed)? {
        tracing::debug!("Layer {}: {}", order, name);
        config.layers.push(Layer::new(name, order));
    }

    Ok(())
}

/// Reads one line of the Packages section.
///
/// Numbered entries rebind `current_layer` to the matching entry of `layers` (or to `None`
/// when nothing matches). Bullet entries under a bound layer come back as a new package for
/// the caller to attach; everything else yields `None`.
pub fn parse_package_line(
    line: &str,
    layers: &[Layer],
    current_layer: &mut Option<usize>,
) -> Result<Option<Package>> {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.contains(COMMENTARY_MARKER) {
        return Ok(None);
    }

    if let Some((order, name)) = numbered_entry(trimmed)? {
        *current_layer = layers
            .iter()
            .position(|layer| layer.name == name && layer.order == order);
        if current_layer.is_none() {
            tracing::warn!(
                "No layer '{}' with order {} declared in the Layers section; its packages are skipped",
                name,
                order
            );
        }
        return Ok(None);
    }

    let Some(rest) = trimmed.strip_prefix(BULLET_MARKER) else {
        return Ok(None);
    };

    if current_layer.is_none() {
        tracing::debug!("Skipping package outside a known layer: {}", trimmed);
        return Ok(None);
    }

    let path = rest.trim();
    validate_path(path)?;

    let level = indentation_level(line);
    tracing::debug!("Package {} (level {})", path, level);
    Ok(Some(Package::new(path, level)))
}

/// Nesting level of a bullet line: fewer than four leading spaces is level 0, anything
/// deeper is level 1.
pub fn indentation_level(line: &str) -> usize {
    let spaces = line.chars().take_while(|c| *c == ' ').count();
    if spaces >= NESTED_INDENT {
        1
    } else {
        0
    }
}

/// Splits `<integer>. <name>` into its parts.
fn numbered_entry(trimmed: &str) -> Result<Option<(u32, &str)>> {
    if EMPTY_LAYER_RE.is_match(trimmed) {
        return Err(DependsError::InvalidName {
            message: "layer name cannot be empty".to_string(),
        });
    }

    let Some(captures) = LAYER_RE.captures(trimmed) else {
        return Ok(None);
    };

    let (Some(order), Some(name)) = (captures.get(1), captures.get(2)) else {
        return Ok(None);
    };

    let order = order
        .as_str()
        .parse::<u32>()
        .map_err(|_| DependsError::InvalidOrder {
            value: order.as_str().to_string(),
        })?;
    let name = name.as_str().trim();
    validate_name(name)?;

    Ok(Some((order, name)))
}
