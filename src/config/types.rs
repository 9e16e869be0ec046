//! Configuration types for aasx-tools operations.
//!
//! Provides structured configuration for the view, transform, validate and
//! summary commands.

use crate::reports::ReportFormat;
use crate::tree::RenderOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// It can be constructed from CLI arguments, config files, or both (with CLI
/// overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Tree rendering configuration
    pub tree: TreeConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn compact_json(mut self, compact: bool) -> Self {
        self.config.output.compact_json = compact;
        self
    }

    pub const fn show_ids(mut self, show: bool) -> Self {
        self.config.tree.show_ids = show;
        self
    }

    pub const fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.config.tree.max_depth = depth;
        self
    }

    pub const fn max_label_width(mut self, width: Option<usize>) -> Self {
        self.config.tree.max_label_width = width;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Exit with a distinct code when diagnostics are found.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.config.behavior.strict = strict;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration
// ============================================================================

/// Configuration for the view command
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub path: PathBuf,
    pub output: OutputConfig,
    pub tree: TreeConfig,
    pub behavior: BehaviorConfig,
}

/// Configuration for the transform command
#[derive(Debug, Clone)]
pub struct TransformConfig {
    pub path: PathBuf,
    pub output: OutputConfig,
    pub quiet: bool,
}

/// Configuration for the validate command
#[derive(Debug, Clone)]
pub struct ValidateConfig {
    pub path: PathBuf,
    pub behavior: BehaviorConfig,
}

/// Configuration for the multi-file summary command
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub paths: Vec<PathBuf>,
    pub output: OutputConfig,
    pub quiet: bool,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Emit single-line JSON instead of pretty-printed JSON
    pub compact_json: bool,
}

/// Tree rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TreeConfig {
    /// Append node ids to each line
    pub show_ids: bool,
    /// Number of levels to draw (None for all)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Truncate labels wider than this many columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_label_width: Option<usize>,
    /// Embed the tree in JSON reports
    pub include_in_json: bool,
}

impl TreeConfig {
    /// Render options for this configuration.
    #[must_use]
    pub const fn render_options(&self, colored: bool) -> RenderOptions {
        RenderOptions::new()
            .show_ids(self.show_ids)
            .max_depth(self.max_depth)
            .max_label_width(self.max_label_width)
            .colored(colored)
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 2 when structural diagnostics are found
    pub strict: bool,
}
