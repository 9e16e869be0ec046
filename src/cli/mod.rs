//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements the
//! business logic for one subcommand and returns the process exit code.

mod summary;
mod transform;
mod validate;
mod view;

pub use summary::run_summary;
pub use transform::run_transform;
pub use validate::{run_validate, validate_content};
pub use view::run_view;

// Re-export config types used by handlers
pub use crate::config::{SummaryConfig, TransformConfig, ValidateConfig, ViewConfig};
