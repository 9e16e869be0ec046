//! Pipeline orchestration for AAS documents.
//!
//! Shared read → detect → transform → report logic used by the CLI command
//! handlers.

mod output;
mod parse;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::{parse_document_with_context, parse_many, ParsedDocument};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The input is not an AAS document
    pub const INVALID_DOCUMENT: i32 = 1;
    /// The document parsed but carries diagnostics (strict mode)
    pub const DIAGNOSTICS_FOUND: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
