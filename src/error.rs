//! Library error type for aasx-tools.
//!
//! File-level operations ([`crate::parse_document`], [`crate::parse_document_str`],
//! [`crate::parsers::read_document_file`]) return [`AasError`], which carries
//! the file path and a chain of context strings. The per-format parsers
//! keep the lighter [`crate::parsers::ParseError`] and convert at this
//! boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for aasx-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AasError {
    /// Errors while reading or interpreting an AAS document
    #[error("Failed to parse AAS document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Not an AAS document - expected assetAdministrationShells and submodels")]
    NotAnAasDocument,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("File too large: {size_mb} MB (limit {limit_mb} MB)")]
    FileTooLarge { size_mb: u64, limit_mb: u64 },
}

/// Convenient Result type for aasx-tools operations
pub type Result<T> = std::result::Result<T, AasError>;

impl AasError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// The parse error kind, if this is a parse error
    #[must_use]
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Io { .. } => None,
        }
    }
}

impl From<std::io::Error> for AasError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<crate::parsers::ParseError> for AasError {
    fn from(err: crate::parsers::ParseError) -> Self {
        use crate::parsers::ParseError;

        match err {
            ParseError::IoError(message) => Self::Io {
                path: None,
                source: std::io::Error::other(message.clone()),
                message,
            },
            ParseError::JsonError(message) => {
                Self::parse("JSON deserialization", ParseErrorKind::InvalidJson(message))
            }
            ParseError::NotAnAasDocument(reason) => {
                Self::parse(reason, ParseErrorKind::NotAnAasDocument)
            }
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost-first, so a failure deep inside
/// a call stack reads as `"plant.json: JSON deserialization"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AasError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: AasError, new_ctx: &str) -> AasError {
    match err {
        AasError::Parse { context, source } => AasError::Parse {
            context: chain_context(new_ctx, &context),
            source,
        },
        AasError::Io {
            path,
            message,
            source,
        } => AasError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// `"new: existing"`, or just `new` when there is no existing context.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
