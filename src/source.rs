// src/source.rs
// ============================================================================
// Module: Settings Source Adapter
// Description: Materialises section trees from JSON/TOML settings files.
// Purpose: Strict, fail-closed loading with hard path and size limits.
// Dependencies: serde_json, thiserror, toml
// ============================================================================

//! ## Overview
//! The source adapter turns an external settings representation into an owned
//! [`Section`] tree. Files are loaded with strict limits (path length, file
//! size, UTF-8) and parsed as JSON or TOML by extension; in-memory values can
//! be converted directly. Loading is the only I/O in the crate and happens
//! entirely before the bind/validate pipeline runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::section::Section;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default settings filename when no path is specified.
const DEFAULT_SETTINGS_NAME: &str = "appsettings.json";
/// Environment variable used to override the settings path.
pub(crate) const SETTINGS_ENV_VAR: &str = "SECTION_BIND_SETTINGS";
/// Maximum settings file size in bytes.
pub(crate) const MAX_SETTINGS_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Settings loading or parsing errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// I/O failure while reading settings.
    #[error("settings io error: {0}")]
    Io(String),
    /// JSON or TOML parsing error.
    #[error("settings parse error: {0}")]
    Parse(String),
    /// Invalid settings input.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: File Loading
// ============================================================================

/// Loads a settings file into a root [`Section`] tree.
///
/// The path resolves from the explicit argument, then the
/// `SECTION_BIND_SETTINGS` environment variable, then `appsettings.json`.
/// Files ending in `.toml` parse as TOML; everything else parses as JSON.
///
/// # Errors
///
/// Returns [`SourceError`] when path limits, size limits, encoding, or
/// parsing fail.
pub fn load_settings(path: Option<&Path>) -> Result<Section, SourceError> {
    let resolved = resolve_path(path)?;
    validate_path(&resolved)?;
    let bytes = fs::read(&resolved).map_err(|err| SourceError::Io(err.to_string()))?;
    if bytes.len() > MAX_SETTINGS_FILE_SIZE {
        return Err(SourceError::Invalid("settings file exceeds size limit".to_string()));
    }
    let content = std::str::from_utf8(&bytes)
        .map_err(|_| SourceError::Invalid("settings file must be utf-8".to_string()))?;
    let is_toml = resolved
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        from_toml_str(content)
    } else {
        from_json_str(content)
    }
}

/// Resolves the settings path from the argument or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, SourceError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(SETTINGS_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(SourceError::Invalid("settings path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_SETTINGS_NAME))
}

/// Validates the resolved path against hard limits.
fn validate_path(path: &Path) -> Result<(), SourceError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(SourceError::Invalid("settings path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(SourceError::Invalid("settings path component too long".to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: JSON Conversion
// ============================================================================

/// Parses a JSON document into a root [`Section`] tree.
///
/// # Errors
///
/// Returns [`SourceError::Parse`] when the document is not valid JSON.
pub fn from_json_str(content: &str) -> Result<Section, SourceError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|err| SourceError::Parse(err.to_string()))?;
    Ok(from_json_value("", &value))
}

/// Converts a JSON value into a [`Section`] with the given key.
///
/// Objects become named children in document order, arrays become children
/// keyed by their index (preserving order), scalars become the section's
/// value, and `null` stays absent.
#[must_use]
pub fn from_json_value(key: &str, value: &serde_json::Value) -> Section {
    let mut section = Section::new(key);
    match value {
        serde_json::Value::Null => {}
        serde_json::Value::Bool(flag) => section.set_value(flag.to_string()),
        serde_json::Value::Number(number) => section.set_value(number.to_string()),
        serde_json::Value::String(text) => section.set_value(text.clone()),
        serde_json::Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                section.push_child(from_json_value(&index.to_string(), item));
            }
        }
        serde_json::Value::Object(entries) => {
            for (child_key, child_value) in entries {
                section.push_child(from_json_value(child_key, child_value));
            }
        }
    }
    section
}

// ============================================================================
// SECTION: TOML Conversion
// ============================================================================

/// Parses a TOML document into a root [`Section`] tree.
///
/// # Errors
///
/// Returns [`SourceError::Parse`] when the document is not valid TOML.
pub fn from_toml_str(content: &str) -> Result<Section, SourceError> {
    let value: toml::Value =
        toml::from_str(content).map_err(|err| SourceError::Parse(err.to_string()))?;
    Ok(from_toml_value("", &value))
}

/// Converts a TOML value into a [`Section`] with the given key.
///
/// Tables become named children, arrays become children keyed by their index
/// (preserving order), and scalars become the section's value.
#[must_use]
pub fn from_toml_value(key: &str, value: &toml::Value) -> Section {
    let mut section = Section::new(key);
    match value {
        toml::Value::String(text) => section.set_value(text.clone()),
        toml::Value::Integer(number) => section.set_value(number.to_string()),
        toml::Value::Float(number) => section.set_value(number.to_string()),
        toml::Value::Boolean(flag) => section.set_value(flag.to_string()),
        toml::Value::Datetime(stamp) => section.set_value(stamp.to_string()),
        toml::Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                section.push_child(from_toml_value(&index.to_string(), item));
            }
        }
        toml::Value::Table(entries) => {
            for (child_key, child_value) in entries {
                section.push_child(from_toml_value(child_key, child_value));
            }
        }
    }
    section
}
