//! **Tools for reading Asset Administration Shell (AAS) documents.**
//!
//! `aasx-tools` turns the JSON serialization of an AAS environment into a
//! compact normalized document and a display tree of shells and submodels.
//! It powers both a command-line interface and a library for programmatic use.
//!
//! ## Key Features
//!
//! - **Normalization**: [`transform`] reduces an environment to shells
//!   (`AAS`) and submodels (`SM`), links each submodel to the shells that
//!   reference it and keeps two levels of element collections.
//! - **Tree building**: [`build_tree`] (or the lazy [`TreeBuilder`]) produces
//!   a deterministic tree with stable node ids, ready for any tree widget.
//! - **Format detection**: environments (metamodel V2 and V3) and already
//!   normalized documents are told apart by confidence score.
//! - **Reporting**: tree, JSON and summary reports, plus reference
//!   diagnostics for orphan submodels and dangling references.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the raw input view and the [`NormalizedDocument`].
//! - **[`parsers`]**: the transformer, format detection and file reading.
//! - **[`tree`]**: tree nodes, the builder and the text renderer.
//! - **[`pipeline`]**: parse-with-context and parallel multi-file parsing.
//! - **[`reports`]**: report generators.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use aasx_tools::{build_tree, parse_document};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let doc = parse_document(Path::new("environment.json"))?;
//!     println!("{} shells, {} submodels", doc.shell_count(), doc.submodel_count());
//!
//!     for node in build_tree(&doc) {
//!         println!("{} ({} nodes)", node.label(), node.node_count());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Transforming in memory
//!
//! ```
//! use aasx_tools::transform;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "assetAdministrationShells": [{"idShort": "A1", "id": "urn:a1"}],
//!     "submodels": []
//! });
//! let doc = transform(&raw).expect("an AAS environment");
//! assert_eq!(doc.shells[0].name, "A1");
//!
//! assert!(transform(&json!({})).is_none());
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod tree;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, TreeConfig};
pub use config::{ConfigError, Validatable};
pub use config::{SummaryConfig, TransformConfig, ValidateConfig, ViewConfig};
pub use error::{AasError, ErrorContext, ParseErrorKind, Result};
pub use model::{
    AasItem, DocumentDiagnostics, NormalizedDocument, RawEnvironment, SubmodelElement,
    SubmodelItem,
};
pub use parsers::{
    detect_format, parse_document, parse_document_str, transform, transform_str, DocumentParser,
};
pub use reports::{ReportFormat, ReportGenerator};
pub use tree::{build_tree, render_tree, RenderOptions, TreeBuilder, TreeNode};
