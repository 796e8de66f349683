//! Relation index core.
//!
//! This crate turns resolved syntax trees into a compact package index:
//! - URI and element interning with provisional ids
//! - Enclosing-unit resolution for referenced elements
//! - Relation extraction from a tree walk
//! - Per-unit and per-package assembly with dense final ids
//! - Serializable `PackageIndex`/`UnitIndex` output
//! - Error types and indexing options

pub mod contributor;
pub mod element_table;
pub mod error;
pub mod options;
pub mod package;
pub mod relation;
pub mod unit;
pub mod uri;

pub use contributor::{contribute, redirect_target, RelationContributor};
pub use element_table::{ElementInfo, ElementInfoId, ElementInterner, ElementTable, UnitUris};
pub use error::{IndexError, IndexResult};
pub use options::IndexOptions;
pub use package::{PackageAssembler, PackageIndex, PackageRelation, INDEX_SCHEMA_VERSION};
pub use relation::{RelationInfo, RelationKind};
pub use unit::{UnitAssembler, UnitIndex, UnitRelation};
pub use uri::{UriId, UriTable};

/// Install a test subscriber honouring `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    static TRACING: std::sync::Once = std::sync::Once::new();
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
