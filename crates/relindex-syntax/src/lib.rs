// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Resolved syntax trees and the element model they point into.
//!
//! This crate is the input side of relindex:
//! - [`element`]: semantic elements and the [`ElementModel`] arena
//! - [`nodes`]: resolved syntax tree node types
//! - [`visitor`]: the [`Visitor`] trait and `walk_*` traversal functions
//!
//! Name resolution itself happens upstream; every tree handed to the indexer
//! is expected to be fully resolved.

pub mod element;
pub mod nodes;
pub mod visitor;

pub use element::{Element, ElementId, ElementKind, ElementModel, ParameterKind};
pub use nodes::CompilationUnit;
pub use visitor::{walk_compilation_unit, VisitResult, Visitor};
