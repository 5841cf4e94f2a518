//! Preview settings.
//!
//! # Example YAML
//!
//! ```yaml
//! indent: 2
//! submit_label: Validate Form
//! busy_label: Validating...
//! empty_preview_message: Please provide a valid JSON schema
//! ```
//!
//! Every key is optional; missing keys take their default.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use form_schema_core::DEFAULT_INDENT;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::shell::PLACEHOLDER_MESSAGE;

/// Label of the submit button while idle.
pub const DEFAULT_SUBMIT_LABEL: &str = "Validate Form";
/// Label of the submit button while a submission is being validated.
pub const DEFAULT_BUSY_LABEL: &str = "Validating...";

/// Cosmetic settings for the editor host and the rendered form.
///
/// # Examples
///
/// ```
/// use form_schema_preview::PreviewConfig;
///
/// let config: PreviewConfig = serde_yaml::from_str("indent: 4").unwrap();
/// assert_eq!(config.indent, 4);
/// assert_eq!(config.submit_label, "Validate Form");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Spaces per level when pretty-printing schema text.
    pub indent: usize,
    pub submit_label: String,
    pub busy_label: String,
    /// Shown in place of the form while the schema is rejected.
    pub empty_preview_message: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            busy_label: DEFAULT_BUSY_LABEL.to_string(),
            empty_preview_message: PLACEHOLDER_MESSAGE.to_string(),
        }
    }
}

impl PreviewConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::PreviewError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::PreviewError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_complete() {
        let yaml = r#"
indent: 4
submit_label: Send
busy_label: Sending...
empty_preview_message: Nothing to show
"#;
        let config: PreviewConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.indent, 4);
        assert_eq!(config.submit_label, "Send");
        assert_eq!(config.busy_label, "Sending...");
        assert_eq!(config.empty_preview_message, "Nothing to show");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: PreviewConfig = serde_yaml::from_str("busy_label: Wait").unwrap();
        assert_eq!(config.indent, 2);
        assert_eq!(config.submit_label, DEFAULT_SUBMIT_LABEL);
        assert_eq!(config.busy_label, "Wait");
        assert_eq!(config.empty_preview_message, PLACEHOLDER_MESSAGE);
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.yml");

        let original = PreviewConfig {
            indent: 3,
            ..PreviewConfig::default()
        };
        original.save(&path).unwrap();

        let loaded = PreviewConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PreviewConfig::load(dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, crate::PreviewError::IoError(_)));
    }
}
