//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".aasx-tools.yaml",
    ".aasx-tools.yml",
    "aasx-tools.yaml",
    "aasx-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/aasx-tools/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|p| p.exists()) {
        return Some(path.to_path_buf());
    }

    let cwd = std::env::current_dir().ok();
    let user_dir = dirs::config_dir().map(|dir| dir.join("aasx-tools"));

    cwd.into_iter()
        .chain(find_git_root())
        .chain(user_dir)
        .chain(dirs::home_dir())
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    NotFound(PathBuf),
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so unset CLI
    /// flags leave file settings alone.
    pub fn merge(&mut self, other: &Self) {
        if other.output.format != crate::reports::ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.compact_json {
            self.output.compact_json = true;
        }

        if other.tree.show_ids {
            self.tree.show_ids = true;
        }
        if other.tree.max_depth.is_some() {
            self.tree.max_depth = other.tree.max_depth;
        }
        if other.tree.max_label_width.is_some() {
            self.tree.max_label_width = other.tree.max_label_width;
        }
        if !other.tree.include_in_json {
            self.tree.include_in_json = false;
        }

        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.strict {
            self.behavior.strict = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    format!(
        r"# aasx-tools configuration
# Place this file at .aasx-tools.yaml in your project root or ~/.config/aasx-tools/

{}",
        serde_yaml::to_string(&AppConfig::default()).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# aasx-tools Configuration File
# =============================
#
# Place it at:
#   - .aasx-tools.yaml in your project root
#   - ~/.config/aasx-tools/aasx-tools.yaml for global config
#
# CLI arguments always override file settings.

# Output configuration
output:
  # Format: auto, tree, json, summary
  format: auto
  # Output file path (omit for stdout)
  # file: shells.json
  # Disable colored output
  no_color: false
  # Single-line JSON
  compact_json: false

# Tree rendering
tree:
  # Append [node-id] to each line
  show_ids: false
  # Number of levels to draw (at least 1)
  # max_depth: 3
  # Truncate labels wider than this (at least 8)
  # max_label_width: 80
  # Embed the tree in JSON reports
  include_in_json: true

# Behavior flags
behavior:
  # Suppress non-essential output
  quiet: false
  # Exit with code 2 when diagnostics are found
  strict: false
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BehaviorConfig, TreeConfig};
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".aasx-tools.yaml");
        std::fs::write(&config_path, "tree:\n  show_ids: true\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_prefers_first_name() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("aasx-tools.yml"), "").unwrap();
        std::fs::write(tmp.path().join(".aasx-tools.yml"), "").unwrap();

        assert_eq!(
            find_config_in_dir(tmp.path()),
            Some(tmp.path().join(".aasx-tools.yml"))
        );
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
output:
  format: json
  compact_json: true
tree:
  max_depth: 3
behavior:
  strict: true
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.compact_json);
        assert_eq!(config.tree.max_depth, Some(3));
        assert!(config.behavior.strict);
    }

    #[test]
    fn test_load_config_file_invalid_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "tree: [not, a, map").unwrap();

        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig {
            tree: TreeConfig {
                max_depth: Some(5),
                max_label_width: Some(40),
                ..TreeConfig::default()
            },
            ..AppConfig::default()
        };
        let overrides = AppConfig {
            tree: TreeConfig {
                max_depth: Some(2),
                ..TreeConfig::default()
            },
            behavior: BehaviorConfig {
                strict: true,
                ..Default::default()
            },
            ..AppConfig::default()
        };

        base.merge(&overrides);

        assert_eq!(base.tree.max_depth, Some(2));
        assert_eq!(base.tree.max_label_width, Some(40));
        assert!(base.behavior.strict);
        assert_eq!(base.output.format, ReportFormat::Auto);
    }

    #[test]
    fn test_example_configs_parse() {
        let example: AppConfig = serde_yaml::from_str(&generate_example_config()).unwrap();
        assert_eq!(example, AppConfig::default());

        let full: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(full, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "behavior:\n  quiet: true\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
