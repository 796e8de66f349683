//! Element interning and enclosing-unit resolution.
//!
//! Every element referenced by a relation is interned once per package into
//! an [`ElementInfo`] that records the element's owning unit and declaration
//! offset. Interning hands out provisional [`ElementInfoId`] handles (arena
//! positions in insertion order); the dense final ids are assigned only when
//! the package is assembled, see [`ElementTable::assign_ids`].

use std::collections::HashMap;

use relindex_syntax::{ElementId, ElementKind, ElementModel};

use crate::error::{IndexError, IndexResult};
use crate::uri::{UriId, UriTable};

// ============================================================================
// Element Info
// ============================================================================

/// Provisional handle to an interned element, valid for one package session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementInfoId(pub u32);

impl ElementInfoId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-element record shared by every relation that targets the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    /// The interned element.
    pub element: ElementId,
    /// Owning unit, an index into [`ElementTable::units`].
    pub unit_id: u32,
    /// Declaration name offset within the owning unit.
    pub offset: u32,
    id: Option<u32>,
}

impl ElementInfo {
    /// Final dense id, `None` until the package is assembled.
    pub fn id(&self) -> Option<u32> {
        self.id
    }
}

/// Library and unit URI of one compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitUris {
    pub library: UriId,
    pub unit: UriId,
}

// ============================================================================
// Element Table
// ============================================================================

/// Append-only table of interned elements and the units that own them.
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    infos: Vec<ElementInfo>,
    by_element: HashMap<ElementId, ElementInfoId>,
    units: Vec<UnitUris>,
    unit_ids: HashMap<UnitUris, u32>,
}

impl ElementTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The record behind a handle.
    pub fn get(&self, id: ElementInfoId) -> Option<&ElementInfo> {
        self.infos.get(id.index())
    }

    /// Handle of an already interned element.
    pub fn lookup(&self, element: ElementId) -> Option<ElementInfoId> {
        self.by_element.get(&element).copied()
    }

    /// Final id of an interned element, once assigned.
    pub fn final_id(&self, id: ElementInfoId) -> Option<u32> {
        self.get(id).and_then(ElementInfo::id)
    }

    /// Number of distinct interned elements.
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Distinct owning units, indexed by `ElementInfo::unit_id`.
    pub fn units(&self) -> &[UnitUris] {
        &self.units
    }

    /// Dense id of a unit, allocated on first use.
    pub fn unit_id(&mut self, uris: UnitUris) -> u32 {
        if let Some(&id) = self.unit_ids.get(&uris) {
            return id;
        }
        let id = self.units.len() as u32;
        self.units.push(uris);
        self.unit_ids.insert(uris, id);
        id
    }

    fn insert(&mut self, element: ElementId, unit_id: u32, offset: u32) -> ElementInfoId {
        let id = ElementInfoId(self.infos.len() as u32);
        self.infos.push(ElementInfo {
            element,
            unit_id,
            offset,
            id: None,
        });
        self.by_element.insert(element, id);
        id
    }

    /// Assign final ids and return the records in final id order.
    ///
    /// Records are ordered by declaration offset; equal offsets keep
    /// insertion order. Record `i` of the returned list gets id `i`.
    pub fn assign_ids(&mut self) -> Vec<&ElementInfo> {
        let mut order: Vec<usize> = (0..self.infos.len()).collect();
        order.sort_by_key(|&index| self.infos[index].offset);
        for (id, &index) in order.iter().enumerate() {
            debug_assert!(self.infos[index].id.is_none(), "element id assigned twice");
            self.infos[index].id = Some(id as u32);
        }
        order.into_iter().map(|index| &self.infos[index]).collect()
    }
}

// ============================================================================
// Enclosing Unit Resolution
// ============================================================================

/// Find the compilation unit that contains `element`.
///
/// Walks the enclosing chain outward from the element itself. A library
/// resolves to its defining unit.
pub fn enclosing_unit(model: &ElementModel, element: ElementId) -> IndexResult<ElementId> {
    let Some(start) = model.get(element) else {
        return Err(IndexError::UnknownElement { element });
    };
    for (id, current) in model.enclosing_chain(element) {
        match current.kind {
            ElementKind::CompilationUnit => return Ok(id),
            ElementKind::Library => {
                if let Some(unit) = current.defining_unit {
                    return Ok(unit);
                }
                break;
            }
            _ => {}
        }
    }
    Err(IndexError::UnlinkedElement {
        element,
        name: start.name.clone(),
    })
}

/// Intern the library and unit URIs of a compilation unit element.
///
/// A unit without an enclosing library is treated as its own library.
pub fn unit_uris(
    model: &ElementModel,
    uris: &mut UriTable,
    unit: ElementId,
) -> IndexResult<UnitUris> {
    let unit_element = model
        .get(unit)
        .ok_or(IndexError::UnknownElement { element: unit })?;
    let unit_uri = unit_element
        .source_uri
        .as_deref()
        .ok_or(IndexError::MissingSourceUri { element: unit })?;
    let library_uri = match unit_element.enclosing {
        Some(library) => model
            .get(library)
            .ok_or(IndexError::UnknownElement { element: library })?
            .source_uri
            .as_deref()
            .ok_or(IndexError::MissingSourceUri { element: library })?,
        None => unit_uri,
    };
    Ok(UnitUris {
        library: uris.intern(library_uri),
        unit: uris.intern(unit_uri),
    })
}

// ============================================================================
// Interner
// ============================================================================

/// Mutable view over the package tables used while one unit is walked.
pub struct ElementInterner<'a> {
    model: &'a ElementModel,
    uris: &'a mut UriTable,
    elements: &'a mut ElementTable,
}

impl<'a> ElementInterner<'a> {
    pub fn new(
        model: &'a ElementModel,
        uris: &'a mut UriTable,
        elements: &'a mut ElementTable,
    ) -> Self {
        ElementInterner {
            model,
            uris,
            elements,
        }
    }

    /// The element model references are resolved against.
    pub fn model(&self) -> &'a ElementModel {
        self.model
    }

    /// Intern `element`, creating its record on first use.
    ///
    /// Fails when the element is unknown to the model or cannot be traced
    /// to a compilation unit; nothing is interned in that case.
    pub fn element_info(&mut self, element: ElementId) -> IndexResult<ElementInfoId> {
        if let Some(id) = self.elements.lookup(element) {
            return Ok(id);
        }
        let offset = self
            .model
            .get(element)
            .ok_or(IndexError::UnknownElement { element })?
            .name_offset;
        let unit = enclosing_unit(self.model, element)?;
        let uris = unit_uris(self.model, self.uris, unit)?;
        let unit_id = self.elements.unit_id(uris);
        Ok(self.elements.insert(element, unit_id, offset))
    }
}
