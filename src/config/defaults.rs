//! Default values for aasx-tools configuration.

use super::types::{OutputConfig, TreeConfig};
use crate::reports::ReportFormat;

/// Smallest accepted `tree.max_label_width`.
pub const MIN_LABEL_WIDTH: usize = 8;

/// Smallest accepted `tree.max_depth`.
pub const MIN_TREE_DEPTH: usize = 1;

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
            compact_json: false,
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            show_ids: false,
            max_depth: None,
            max_label_width: None,
            include_in_json: true,
        }
    }
}
