//! Package-level assembly and the serialized package index.
//!
//! A [`PackageAssembler`] owns the URI and element tables shared by every
//! unit of one package session. Each [`PackageAssembler::index_unit`] call
//! walks one resolved unit; [`PackageAssembler::assemble`] then assigns the
//! final element ids and emits the [`PackageIndex`].

use serde::{Deserialize, Serialize};

use relindex_syntax::nodes::CompilationUnit;
use relindex_syntax::ElementModel;

use crate::contributor::contribute;
use crate::element_table::{unit_uris, ElementInterner, ElementTable};
use crate::error::{IndexError, IndexResult};
use crate::options::IndexOptions;
use crate::relation::RelationKind;
use crate::unit::{UnitAssembler, UnitIndex};
use crate::uri::UriTable;

/// Version of the [`PackageIndex`] layout. Bumped on breaking changes.
pub const INDEX_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Package Index
// ============================================================================

/// Index of every relation recorded in a package.
///
/// The four `element_*` arrays are indexed by final element id and always
/// have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageIndex {
    /// Layout version, always [`INDEX_SCHEMA_VERSION`] when written.
    pub schema_version: u32,
    /// URI id of each element's library.
    pub element_library_uris: Vec<u32>,
    /// URI id of each element's compilation unit.
    pub element_unit_uris: Vec<u32>,
    /// Dense unit id of each element.
    pub element_units: Vec<u32>,
    /// Declaration name offset of each element within its unit.
    pub element_offsets: Vec<u32>,
    /// URI strings, indexed by URI id.
    pub uris: Vec<String>,
    /// One entry per indexed unit, in indexing order.
    pub units: Vec<UnitIndex>,
}

/// A relation read back from a [`PackageIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageRelation {
    /// Position of the recording unit in [`PackageIndex::units`].
    pub unit: usize,
    pub kind: RelationKind,
    pub offset: u32,
    pub length: u32,
}

impl Default for PackageIndex {
    fn default() -> Self {
        PackageIndex {
            schema_version: INDEX_SCHEMA_VERSION,
            element_library_uris: Vec::new(),
            element_unit_uris: Vec::new(),
            element_units: Vec::new(),
            element_offsets: Vec::new(),
            uris: Vec::new(),
            units: Vec::new(),
        }
    }
}

impl PackageIndex {
    /// Number of distinct elements.
    pub fn element_count(&self) -> usize {
        self.element_offsets.len()
    }

    /// Check the parallel array invariants of the package and every unit.
    pub fn is_consistent(&self) -> bool {
        let n = self.element_count();
        let uri_count = self.uris.len() as u32;
        self.element_library_uris.len() == n
            && self.element_unit_uris.len() == n
            && self.element_units.len() == n
            && self
                .element_library_uris
                .iter()
                .chain(&self.element_unit_uris)
                .all(|&uri| uri < uri_count)
            && self.units.iter().all(|unit| {
                unit.is_consistent()
                    && unit.elements.iter().all(|&id| (id as usize) < n)
                    && unit.elements.windows(2).all(|pair| pair[0] <= pair[1])
            })
    }

    /// URI string for a URI id.
    pub fn uri(&self, id: u32) -> Option<&str> {
        self.uris.get(id as usize).map(String::as_str)
    }

    /// Id of the element declared at `offset` in the unit `unit_uri`.
    pub fn find_element(&self, unit_uri: &str, offset: u32) -> Option<u32> {
        let uri = self.uris.iter().position(|uri| uri == unit_uri)? as u32;
        self.element_unit_uris
            .iter()
            .zip(&self.element_offsets)
            .position(|(&unit, &element_offset)| unit == uri && element_offset == offset)
            .map(|id| id as u32)
    }

    /// Every relation that targets `element`, unit by unit.
    pub fn relations_of(&self, element: u32) -> impl Iterator<Item = PackageRelation> + '_ {
        self.units.iter().enumerate().flat_map(move |(unit, index)| {
            index
                .relations_of(element)
                .map(move |relation| PackageRelation {
                    unit,
                    kind: relation.kind,
                    offset: relation.offset,
                    length: relation.length,
                })
        })
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> IndexResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> IndexResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON written with the current schema version.
    pub fn from_json(json: &str) -> IndexResult<Self> {
        let index: PackageIndex = serde_json::from_str(json)?;
        if index.schema_version != INDEX_SCHEMA_VERSION {
            return Err(IndexError::UnsupportedSchemaVersion {
                found: index.schema_version,
                expected: INDEX_SCHEMA_VERSION,
            });
        }
        Ok(index)
    }
}

// ============================================================================
// Package Assembler
// ============================================================================

/// Collects relations from many units and assembles the package index.
///
/// # Example
///
/// ```ignore
/// let mut assembler = PackageAssembler::new(&model);
/// for unit in &units {
///     assembler.index_unit(unit)?;
/// }
/// let index = assembler.assemble()?;
/// ```
pub struct PackageAssembler<'m> {
    model: &'m ElementModel,
    options: IndexOptions,
    uris: UriTable,
    elements: ElementTable,
    units: Vec<UnitAssembler>,
}

impl<'m> PackageAssembler<'m> {
    /// Create an assembler with default options.
    pub fn new(model: &'m ElementModel) -> Self {
        Self::with_options(model, IndexOptions::default())
    }

    pub fn with_options(model: &'m ElementModel, options: IndexOptions) -> Self {
        PackageAssembler {
            model,
            options,
            uris: UriTable::new(),
            elements: ElementTable::new(),
            units: Vec::new(),
        }
    }

    pub fn options(&self) -> IndexOptions {
        self.options
    }

    /// Number of units indexed so far.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Walk one resolved unit and keep its relations for assembly.
    ///
    /// Fails only when the unit itself has no usable URI; nothing is
    /// recorded in that case. Unresolvable references inside the unit are
    /// dropped individually.
    pub fn index_unit(&mut self, unit: &CompilationUnit) -> IndexResult<()> {
        let uris = unit_uris(self.model, &mut self.uris, unit.element)?;
        let mut assembler = UnitAssembler::new(uris);
        {
            let mut interner = ElementInterner::new(self.model, &mut self.uris, &mut self.elements);
            contribute(unit, &mut assembler, &mut interner, self.options);
        }
        tracing::debug!(
            "indexed {} ({} relations)",
            self.uris.uri(uris.unit).unwrap_or("<unknown>"),
            assembler.relations().len()
        );
        self.units.push(assembler);
        Ok(())
    }

    /// Assign final element ids and build the package index.
    ///
    /// Consumes the assembler, so ids are assigned exactly once.
    pub fn assemble(mut self) -> IndexResult<PackageIndex> {
        let units = self.elements.units().to_vec();
        let ordered = self.elements.assign_ids();

        let mut index = PackageIndex {
            schema_version: INDEX_SCHEMA_VERSION,
            element_library_uris: Vec::with_capacity(ordered.len()),
            element_unit_uris: Vec::with_capacity(ordered.len()),
            element_units: Vec::with_capacity(ordered.len()),
            element_offsets: Vec::with_capacity(ordered.len()),
            uris: Vec::new(),
            units: Vec::with_capacity(self.units.len()),
        };
        for info in ordered {
            let owner = units[info.unit_id as usize];
            index.element_library_uris.push(owner.library.0);
            index.element_unit_uris.push(owner.unit.0);
            index.element_units.push(info.unit_id);
            index.element_offsets.push(info.offset);
        }

        for unit in self.units {
            index.units.push(unit.assemble(&self.elements)?);
        }
        index.uris = self.uris.into_uris();

        tracing::debug!(
            "assembled package index: {} units, {} elements, {} uris",
            index.units.len(),
            index.element_count(),
            index.uris.len()
        );
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relindex_syntax::nodes::{ClassDeclaration, CompilationUnitMember, Token, TypeName};
    use relindex_syntax::nodes::{ExtendsClause, SimpleIdentifier};
    use relindex_syntax::{Element, ElementId, ElementKind};

    /// `class B extends A {}` in `uri`, with `A` declared in another library.
    fn subclass_unit(
        model: &mut ElementModel,
        uri: &str,
        superclass: ElementId,
    ) -> CompilationUnit {
        let (_, unit) = model.add_library(uri);
        let b = model.add_child(unit, ElementKind::Class, "B", 6);
        let mut class =
            ClassDeclaration::new(Token::new("class", 0), SimpleIdentifier::new("B", 6, Some(b)));
        class.extends_clause = Some(ExtendsClause {
            keyword: Token::new("extends", 8),
            superclass: TypeName::simple("A", 16, Some(superclass)),
        });
        CompilationUnit::new(unit).with_declaration(CompilationUnitMember::Class(class))
    }

    #[test]
    fn empty_package_assembles_to_empty_index() {
        crate::init_test_tracing();
        let model = ElementModel::new();
        let index = PackageAssembler::new(&model).assemble().unwrap();

        assert_eq!(index, PackageIndex::default());
        assert_eq!(index.schema_version, INDEX_SCHEMA_VERSION);
        assert_eq!(index.element_count(), 0);
        assert!(index.is_consistent());
    }

    #[test]
    fn shared_element_gets_one_id() {
        crate::init_test_tracing();
        let mut model = ElementModel::new();
        let (_, shared) = model.add_library("package:a/shared.dart");
        let a = model.add_child(shared, ElementKind::Class, "A", 6);
        let first = subclass_unit(&mut model, "package:a/b.dart", a);
        let second = subclass_unit(&mut model, "package:a/c.dart", a);

        let mut assembler = PackageAssembler::new(&model);
        assembler.index_unit(&first).unwrap();
        assembler.index_unit(&second).unwrap();
        assert_eq!(assembler.unit_count(), 2);
        let index = assembler.assemble().unwrap();

        assert!(index.is_consistent());
        assert_eq!(index.element_count(), 1);
        assert_eq!(index.units.len(), 2);
        assert_eq!(index.units[0].elements, vec![0]);
        assert_eq!(index.units[1].elements, vec![0]);
        let shared_uri = index.element_unit_uris[0];
        assert_eq!(index.uri(shared_uri), Some("package:a/shared.dart"));
        assert_eq!(index.find_element("package:a/shared.dart", 6), Some(0));
        assert_eq!(index.find_element("package:a/b.dart", 6), None);

        let relations: Vec<PackageRelation> = index.relations_of(0).collect();
        assert_eq!(relations.len(), 2);
        assert_eq!(relations[0].unit, 0);
        assert_eq!(relations[1].unit, 1);
        assert!(relations
            .iter()
            .all(|r| r.kind == RelationKind::IsExtendedBy && r.offset == 16 && r.length == 1));
    }

    #[test]
    fn element_ids_follow_declaration_offsets() {
        crate::init_test_tracing();
        let mut model = ElementModel::new();
        let (_, lib) = model.add_library("package:a/lib.dart");
        let late = model.add_child(lib, ElementKind::Class, "Late", 90);
        let early = model.add_child(lib, ElementKind::Class, "Early", 10);

        let (_, unit) = model.add_library("package:a/main.dart");
        let c = model.add_child(unit, ElementKind::Class, "C", 6);
        let mut class =
            ClassDeclaration::new(Token::new("class", 0), SimpleIdentifier::new("C", 6, Some(c)));
        class.extends_clause = Some(ExtendsClause {
            keyword: Token::new("extends", 8),
            superclass: TypeName::simple("Late", 16, Some(late)),
        });
        class.implements_clause = Some(relindex_syntax::nodes::ImplementsClause {
            keyword: Token::new("implements", 21),
            interfaces: vec![TypeName::simple("Early", 32, Some(early))],
        });
        let tree = CompilationUnit::new(unit).with_declaration(CompilationUnitMember::Class(class));

        let mut assembler = PackageAssembler::new(&model);
        assembler.index_unit(&tree).unwrap();
        let index = assembler.assemble().unwrap();

        assert_eq!(index.element_offsets, vec![10, 90]);
        assert_eq!(index.units[0].elements, vec![0, 1]);
        assert_eq!(
            index.units[0].kinds,
            vec![RelationKind::IsImplementedBy, RelationKind::IsExtendedBy]
        );
        assert_eq!(index.units[0].location_offsets, vec![32, 16]);
    }

    #[test]
    fn unit_without_uri_is_rejected() {
        crate::init_test_tracing();
        let mut model = ElementModel::new();
        let unit = model.add(Element::new(ElementKind::CompilationUnit, "", 0));
        let tree = CompilationUnit::new(unit);

        let mut assembler = PackageAssembler::new(&model);
        let err = assembler.index_unit(&tree).unwrap_err();

        assert!(matches!(err, IndexError::MissingSourceUri { .. }));
        assert_eq!(assembler.unit_count(), 0);
    }

    #[test]
    fn json_round_trip_preserves_index() {
        crate::init_test_tracing();
        let mut model = ElementModel::new();
        let (_, shared) = model.add_library("package:a/shared.dart");
        let a = model.add_child(shared, ElementKind::Class, "A", 6);
        let tree = subclass_unit(&mut model, "package:a/b.dart", a);
        let mut assembler = PackageAssembler::new(&model);
        assembler.index_unit(&tree).unwrap();
        let index = assembler.assemble().unwrap();

        let json = index.to_json().unwrap();
        assert!(json.starts_with("{\"schemaVersion\":1,"));
        assert!(json.contains("\"elementLibraryUris\""));
        assert!(json.contains("\"is_extended_by\""));
        assert_eq!(PackageIndex::from_json(&json).unwrap(), index);
        assert!(PackageIndex::from_json("{").is_err());
    }

    #[test]
    fn other_schema_version_is_rejected() {
        crate::init_test_tracing();
        let stale = PackageIndex {
            schema_version: INDEX_SCHEMA_VERSION + 1,
            ..PackageIndex::default()
        };
        let json = stale.to_json().unwrap();

        let err = PackageIndex::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            IndexError::UnsupportedSchemaVersion { found: 2, expected: 1 }
        ));

        let unversioned = r#"{"elementLibraryUris":[],"elementUnitUris":[],"elementUnits":[],
            "elementOffsets":[],"uris":[],"units":[]}"#;
        assert!(matches!(
            PackageIndex::from_json(unversioned),
            Err(IndexError::Serialization(_))
        ));
    }
}
