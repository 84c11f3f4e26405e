// SPDX-License-Identifier: Apache-2.0
//! sema-core: shortest-common-ancestor queries over rooted hypernym digraphs.
//!
//! The crate holds two pieces, built in dependency order: [`Digraph`], an
//! immutable integer-indexed adjacency store, and [`AncestryEngine`], which
//! validates a digraph as a single-rooted tree of concepts and then answers
//! shortest-ancestral-path queries via paired multi-source breadth-first
//! search. Labels, file formats, and word-level lookups live in higher
//! layers; this crate operates purely on vertex ids.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::use_self
)]

mod ancestry;
mod digraph;

/// Validated ancestry engine and its query surface.
pub use ancestry::{AncestryEngine, QueryError, SapResult, ValidationError};
/// Immutable directed graph store.
pub use digraph::{Digraph, DigraphError};
