// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for resolved tree traversal.
//!
//! The [`Visitor`] trait has one `visit_*`/`leave_*` pair per node category,
//! generated by macro, with defaults that descend into children. The `walk_*`
//! functions in [`dispatch`] implement the traversal itself.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order** for `visit_*` methods
//! - **Post-order** for `leave_*` methods
//! - Children are visited in source order (left-to-right, top-to-bottom)
//!
//! # Declaration Names
//!
//! A name at a declaration site (class name, parameter name, label, ...) is
//! reported through `visit_declared_identifier`. Every other identifier goes
//! through `visit_simple_identifier`.
//!
//! ```ignore
//! use relindex_syntax::visitor::{walk_compilation_unit, Visitor, VisitResult};
//!
//! struct ReferenceCounter {
//!     count: usize,
//! }
//!
//! impl Visitor for ReferenceCounter {
//!     fn visit_simple_identifier(&mut self, _node: &SimpleIdentifier) -> VisitResult {
//!         self.count += 1;
//!         VisitResult::Continue
//!     }
//! }
//!
//! let mut counter = ReferenceCounter { count: 0 };
//! walk_compilation_unit(&mut counter, &unit);
//! ```

pub mod dispatch;
mod traits;

pub use dispatch::*;
pub use traits::{VisitResult, Visitor};
