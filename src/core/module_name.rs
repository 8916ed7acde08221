use crate::utils::error::{DependsError, Result};
use crate::utils::validation::validate_module_name;
use std::path::Path;

const MODULE_KEYWORD: &str = "module ";

/// Reads the module name from a manifest file such as `go.mod`.
pub fn module_name_from_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    module_name_from_content(&content, &path.display().to_string())
}

/// First `module <name>` line of `content`. `source` names the input in the error.
pub fn module_name_from_content(content: &str, source: &str) -> Result<String> {
    let declaration = content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(MODULE_KEYWORD));

    match declaration {
        Some(rest) => {
            let module = rest.trim();
            validate_module_name(module)?;
            tracing::debug!("Module name from {}: {}", source, module);
            Ok(module.to_string())
        }
        None => Err(DependsError::ModuleNotFound {
            source_name: source.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_module_name_from_content() {
        let content = "// comment\nmodule github.com/acme/shop\n\ngo 1.22\n";
        assert_eq!(
            module_name_from_content(content, "go.mod").unwrap(),
            "github.com/acme/shop"
        );
    }

    #[test]
    fn test_first_declaration_wins_and_is_trimmed() {
        let content = "   module    first/one   \nmodule second/two\n";
        assert_eq!(module_name_from_content(content, "go.mod").unwrap(), "first/one");
    }

    #[test]
    fn test_missing_declaration() {
        let err = module_name_from_content("go 1.22\nmodules are here\n", "go.mod").unwrap_err();
        match err {
            DependsError::ModuleNotFound { source_name } => assert_eq!(source_name, "go.mod"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        assert!(module_name_from_content("Module example.com/x\n", "go.mod").is_err());
    }

    #[test]
    fn test_module_name_with_space_is_rejected() {
        let err = module_name_from_content("module example.com/a b\n", "go.mod").unwrap_err();
        assert!(matches!(err, DependsError::InvalidModuleName { .. }));
    }

    #[test]
    fn test_module_name_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"module example.com/layered\n\ngo 1.21\n")
            .unwrap();

        assert_eq!(
            module_name_from_file(temp_file.path()).unwrap(),
            "example.com/layered"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = module_name_from_file("/definitely/not/here/go.mod").unwrap_err();
        assert!(matches!(err, DependsError::IoError(_)));
    }
}
