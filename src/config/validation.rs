//! Configuration validation for aasx-tools.

use super::defaults::{MIN_LABEL_WIDTH, MIN_TREE_DEPTH};
use super::types::{AppConfig, BehaviorConfig, OutputConfig, TreeConfig};

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.tree.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        errors
    }
}

impl Validatable for TreeConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(depth) = self.max_depth {
            if depth < MIN_TREE_DEPTH {
                errors.push(ConfigError {
                    field: "tree.max_depth".to_string(),
                    message: format!("Max depth must be at least {MIN_TREE_DEPTH}, got {depth}"),
                });
            }
        }

        if let Some(width) = self.max_label_width {
            if width < MIN_LABEL_WIDTH {
                errors.push(ConfigError {
                    field: "tree.max_label_width".to_string(),
                    message: format!(
                        "Max label width must be at least {MIN_LABEL_WIDTH}, got {width}"
                    ),
                });
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_tree_limits() {
        let config = AppConfig::builder()
            .max_depth(Some(0))
            .max_label_width(Some(4))
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "tree.max_depth");
        assert_eq!(errors[1].field, "tree.max_label_width");

        let config = AppConfig::builder()
            .max_depth(Some(1))
            .max_label_width(Some(8))
            .build();
        assert!(config.is_valid());
    }

    #[test]
    fn test_output_parent_must_exist() {
        let config = AppConfig::builder()
            .output_file(Some(PathBuf::from("/nonexistent/dir/report.json")))
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("output.file: "));

        let relative = AppConfig::builder()
            .output_file(Some(PathBuf::from("report.json")))
            .build();
        assert!(relative.is_valid());
    }
}
