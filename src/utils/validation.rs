use crate::utils::error::{DependsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Layer names must contain at least one non-whitespace character.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DependsError::InvalidName {
            message: "layer name cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Package paths must be non-blank and may not contain `..` anywhere, not only as a segment.
pub fn validate_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(DependsError::InvalidPath {
            path: path.to_string(),
            reason: "layer path cannot be empty".to_string(),
        });
    }

    if path.contains("..") {
        return Err(DependsError::InvalidPath {
            path: path.to_string(),
            reason: "layer path cannot contain '..'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_module_name(module: &str) -> Result<()> {
    if module.trim().is_empty() {
        return Err(DependsError::InvalidModuleName {
            value: module.to_string(),
            reason: "module name cannot be empty".to_string(),
        });
    }

    if module.contains(' ') {
        return Err(DependsError::InvalidModuleName {
            value: module.to_string(),
            reason: "module name cannot contain spaces".to_string(),
        });
    }

    Ok(())
}

/// File names taken from configuration are joined onto package directories,
/// so they must stay a single plain component.
pub fn validate_file_name(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DependsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }

    if value.contains('/') || value.contains('\\') || value.contains("..") {
        return Err(DependsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "File name must not contain path separators or '..'".to_string(),
        });
    }

    if value.contains('\0') {
        return Err(DependsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "File name contains null bytes".to_string(),
        });
    }

    Ok(())
}
