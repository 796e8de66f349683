//! Indexing options.

use serde::{Deserialize, Serialize};

/// Options controlling which relations the contributor records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexOptions {
    /// Record an `is_defined_by` relation for each top-level declaration.
    pub record_definitions: bool,
    /// Record `is_extended_by` against the implicit supertype of a class
    /// without an extends clause.
    pub index_implicit_supertypes: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            record_definitions: false,
            index_implicit_supertypes: true,
        }
    }
}

impl IndexOptions {
    /// Options that also record top-level definitions.
    pub fn with_definitions() -> Self {
        IndexOptions {
            record_definitions: true,
            ..Default::default()
        }
    }

    /// Toggle implicit supertype relations.
    pub fn implicit_supertypes(mut self, enabled: bool) -> Self {
        self.index_implicit_supertypes = enabled;
        self
    }
}
