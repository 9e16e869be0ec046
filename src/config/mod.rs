//! Configuration module for aasx-tools.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use aasx_tools::config::AppConfig;
//!
//! let config = AppConfig::builder()
//!     .show_ids(true)
//!     .max_depth(Some(3))
//!     .strict(true)
//!     .build();
//!
//! use aasx_tools::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.aasx-tools.yaml` file in your project root or `~/.config/aasx-tools/`:
//!
//! ```yaml
//! output:
//!   format: tree
//! tree:
//!   show_ids: true
//!   max_label_width: 80
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{MIN_LABEL_WIDTH, MIN_TREE_DEPTH};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, SummaryConfig, TransformConfig,
    TreeConfig, ValidateConfig, ViewConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.aasx-tools.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_names_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"output\""));
        assert!(schema.contains("\"tree\""));
        assert!(schema.contains("\"max_label_width\""));
    }
}
