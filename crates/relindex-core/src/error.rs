//! Error types for index assembly.
//!
//! Interning failures are local: the relation that needed the element is
//! dropped and the walk continues. Only malformed unit roots and
//! serialization surface to callers.
//!
//! ## Design
//!
//! - **Explicit results**: interning returns `IndexResult`, callers decide
//!   whether a failure drops a relation or aborts
//! - **No panics**: library code never unwraps an interning result

use thiserror::Error;

use relindex_syntax::ElementId;

/// Errors produced while building an index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The element's enclosing chain reaches no compilation unit or library.
    #[error("element {element} ('{name}') is not linked into any compilation unit")]
    UnlinkedElement { element: ElementId, name: String },

    /// The element id is not present in the element model.
    #[error("unknown element {element}")]
    UnknownElement { element: ElementId },

    /// A library or unit element has no source URI.
    #[error("element {element} has no source uri")]
    MissingSourceUri { element: ElementId },

    /// A serialized index was written with a different layout version.
    #[error("unsupported index schema version {found} (expected {expected})")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    Internal { message: String },

    /// JSON encoding or decoding of an index failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IndexError {
    /// True for failures that only drop the affected relation.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            IndexError::UnlinkedElement { .. } | IndexError::UnknownElement { .. }
        )
    }
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
