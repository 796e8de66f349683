//! relindex: cross-reference relation index for resolved syntax trees.
//!
//! Given resolved compilation units and the element model they point into,
//! relindex records every declaration-to-use relation (extends, mixes in,
//! implements, invokes, references) and assembles them into a compact,
//! serializable [`PackageIndex`] with dense element ids.
//!
//! ```ignore
//! let index = relindex::index_units(&model, &units, IndexOptions::default())?;
//! let json = index.to_json()?;
//! ```

// Input side - re-exported from relindex-syntax
pub use relindex_syntax::element;
pub use relindex_syntax::nodes;
pub use relindex_syntax::visitor;

// Indexing core - re-exported from relindex-core
pub use relindex_core::contributor;
pub use relindex_core::element_table;
pub use relindex_core::error;
pub use relindex_core::options;
pub use relindex_core::package;
pub use relindex_core::relation;
pub use relindex_core::unit;
pub use relindex_core::uri;

pub use relindex_core::{
    IndexError, IndexOptions, IndexResult, PackageAssembler, PackageIndex, RelationKind,
    UnitIndex, INDEX_SCHEMA_VERSION,
};
pub use relindex_syntax::{CompilationUnit, ElementId, ElementKind, ElementModel};

/// Index every unit with one assembler and return the package index.
///
/// Stops at the first unit that cannot be indexed.
pub fn index_units(
    model: &ElementModel,
    units: &[CompilationUnit],
    options: IndexOptions,
) -> IndexResult<PackageIndex> {
    let mut assembler = PackageAssembler::with_options(model, options);
    for unit in units {
        assembler.index_unit(unit)?;
    }
    tracing::debug!("indexed {} units", units.len());
    assembler.assemble()
}

/// Read resolved compilation units from a JSON array.
pub fn units_from_json(json: &str) -> IndexResult<Vec<CompilationUnit>> {
    Ok(serde_json::from_str(json)?)
}
