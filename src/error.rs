//! Error types for KLE decoding and layout loading.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What was wrong with a malformed layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    /// The root value is not an array
    #[error("layout root must be an array of rows")]
    RootNotArray,

    /// A row is neither an array nor a leading metadata object
    #[error("row must be an array of tokens (or a metadata object at index 0)")]
    InvalidRow,

    /// An object row appears after the first row
    #[error("metadata object is only allowed as the first row")]
    MetadataOutOfPlace,

    /// A token is neither an object nor a string
    #[error("token must be a modifier object or a label string")]
    InvalidToken,

    /// A recognized modifier field has the wrong JSON type
    #[error("field \"{field}\" must be {expected}")]
    InvalidField {
        /// Field name as written in the layout
        field: &'static str,
        /// Expected JSON type
        expected: &'static str,
    },
}

/// Malformed KLE shape, located by row and token index.
///
/// Decoding stops at the first error; no partial key list is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// Index of the offending row in the root array
    pub row: usize,
    /// Index of the offending token within the row, if the error is token-level
    pub token: Option<usize>,
    /// Error detail
    pub kind: FormatErrorKind,
}

impl FormatError {
    /// Row-level error.
    pub const fn row(row: usize, kind: FormatErrorKind) -> Self {
        Self {
            row,
            token: None,
            kind,
        }
    }

    /// Token-level error.
    pub const fn token(row: usize, token: usize, kind: FormatErrorKind) -> Self {
        Self {
            row,
            token: Some(token),
            kind,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token {
            Some(token) => write!(f, "invalid layout at row {}, token {}: {}", self.row, token, self.kind),
            None => write!(f, "invalid layout at row {}: {}", self.row, self.kind),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Errors from loading a layout file.
#[derive(Debug, Error)]
pub enum KleError {
    /// The layout file is absent or could not be read
    #[error("layout file not found or unreadable: {}", path.display())]
    MissingInput {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is neither JSON nor KLE raw data
    #[error("failed to parse layout: {0}")]
    Syntax(String),

    /// The JSON parsed but has the wrong shape
    #[error(transparent)]
    Format(#[from] FormatError),
}
