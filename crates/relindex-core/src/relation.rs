//! Relation kinds and recorded relation occurrences.

use serde::{Deserialize, Serialize};

use crate::element_table::ElementInfoId;

/// How a source location relates to the element it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Class named in an extends clause, or the implicit supertype.
    IsExtendedBy,
    /// Class named in a with clause.
    IsMixedInBy,
    /// Class named in an implements clause.
    IsImplementedBy,
    /// Method, function, operator, or property invoked at the location.
    IsInvokedBy,
    /// Any other reference: types, accessors, constructors, directives.
    IsReferencedBy,
    /// Declaration site of a top-level element. Recorded only when
    /// `IndexOptions::record_definitions` is set.
    IsDefinedBy,
}

impl RelationKind {
    /// Returns the string representation used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::IsExtendedBy => "is_extended_by",
            RelationKind::IsMixedInBy => "is_mixed_in_by",
            RelationKind::IsImplementedBy => "is_implemented_by",
            RelationKind::IsInvokedBy => "is_invoked_by",
            RelationKind::IsReferencedBy => "is_referenced_by",
            RelationKind::IsDefinedBy => "is_defined_by",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One relation occurrence inside a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationInfo {
    /// The referenced element.
    pub element: ElementInfoId,
    pub kind: RelationKind,
    /// Byte offset of the referencing location.
    pub offset: u32,
    /// Byte length of the referencing location; may be zero.
    pub length: u32,
}
