//! Per-unit relation accumulation and the serialized unit index.

use serde::{Deserialize, Serialize};

use relindex_syntax::ElementId;

use crate::element_table::{ElementInterner, ElementTable, UnitUris};
use crate::error::{IndexError, IndexResult};
use crate::relation::{RelationInfo, RelationKind};

// ============================================================================
// Unit Index
// ============================================================================

/// Relations recorded in one compilation unit, as parallel arrays sorted by
/// element id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitIndex {
    pub library_uri_id: u32,
    pub unit_uri_id: u32,
    /// Final id of the referenced element, one per relation.
    pub elements: Vec<u32>,
    pub kinds: Vec<RelationKind>,
    pub location_offsets: Vec<u32>,
    pub location_lengths: Vec<u32>,
}

/// One relation read back from a [`UnitIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRelation {
    pub element: u32,
    pub kind: RelationKind,
    pub offset: u32,
    pub length: u32,
}

impl UnitIndex {
    /// Number of relations.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check that the four relation arrays have equal length.
    pub fn is_consistent(&self) -> bool {
        let n = self.elements.len();
        self.kinds.len() == n
            && self.location_offsets.len() == n
            && self.location_lengths.len() == n
    }

    /// The relation at position `index`.
    pub fn relation(&self, index: usize) -> Option<UnitRelation> {
        Some(UnitRelation {
            element: *self.elements.get(index)?,
            kind: *self.kinds.get(index)?,
            offset: *self.location_offsets.get(index)?,
            length: *self.location_lengths.get(index)?,
        })
    }

    /// All relations in element id order.
    pub fn relations(&self) -> impl Iterator<Item = UnitRelation> + '_ {
        (0..self.len()).filter_map(|index| self.relation(index))
    }

    /// Relations that target `element`, found by binary search.
    pub fn relations_of(&self, element: u32) -> impl Iterator<Item = UnitRelation> + '_ {
        let start = self.elements.partition_point(|&id| id < element);
        let end = self.elements.partition_point(|&id| id <= element);
        (start..end).filter_map(|index| self.relation(index))
    }
}

// ============================================================================
// Unit Assembler
// ============================================================================

/// Accumulates the relations of one unit while it is walked.
#[derive(Debug, Clone)]
pub struct UnitAssembler {
    uris: UnitUris,
    relations: Vec<RelationInfo>,
}

impl UnitAssembler {
    pub fn new(uris: UnitUris) -> Self {
        UnitAssembler {
            uris,
            relations: Vec::new(),
        }
    }

    /// Library and unit URIs of the unit.
    pub fn uris(&self) -> UnitUris {
        self.uris
    }

    /// Relations recorded so far, in recording order.
    pub fn relations(&self) -> &[RelationInfo] {
        &self.relations
    }

    /// Intern `element` and record a relation to it.
    ///
    /// If the element cannot be interned the relation is dropped and `false`
    /// is returned; the walk is never interrupted.
    pub fn add_relation(
        &mut self,
        interner: &mut ElementInterner<'_>,
        element: ElementId,
        kind: RelationKind,
        offset: u32,
        length: u32,
    ) -> bool {
        match interner.element_info(element) {
            Ok(info) => {
                tracing::trace!("{} {} at {}+{}", kind, element, offset, length);
                self.relations.push(RelationInfo {
                    element: info,
                    kind,
                    offset,
                    length,
                });
                true
            }
            Err(err) if err.is_recoverable() => {
                tracing::debug!("dropping {} relation at {}: {}", kind, offset, err);
                false
            }
            Err(err) => {
                tracing::warn!("dropping {} relation at {}: {}", kind, offset, err);
                false
            }
        }
    }

    /// Sort relations by final element id and emit the unit index.
    ///
    /// Every referenced element must already have its final id.
    pub fn assemble(self, elements: &ElementTable) -> IndexResult<UnitIndex> {
        let mut sorted = Vec::with_capacity(self.relations.len());
        for relation in self.relations {
            let id = elements
                .final_id(relation.element)
                .ok_or_else(|| IndexError::Internal {
                    message: format!("element {:?} has no final id", relation.element),
                })?;
            sorted.push((id, relation));
        }
        sorted.sort_by_key(|&(id, _)| id);

        let mut index = UnitIndex {
            library_uri_id: self.uris.library.0,
            unit_uri_id: self.uris.unit.0,
            elements: Vec::with_capacity(sorted.len()),
            kinds: Vec::with_capacity(sorted.len()),
            location_offsets: Vec::with_capacity(sorted.len()),
            location_lengths: Vec::with_capacity(sorted.len()),
        };
        for (id, relation) in sorted {
            index.elements.push(id);
            index.kinds.push(relation.kind);
            index.location_offsets.push(relation.offset);
            index.location_lengths.push(relation.length);
        }
        Ok(index)
    }
}
