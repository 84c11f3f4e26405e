// SPDX-License-Identifier: Apache-2.0
//! sema-lexicon: word-level lookups over the shortest-common-ancestor core.
//!
//! [`Lexicon`] owns the label tables (word to synset ids, synset id to
//! record); [`Taxonomy`] pairs a lexicon with a validated
//! [`sema_core::AncestryEngine`] and answers word-level distance, common
//! ancestor, and outcast queries. File formats stay out of this crate: it
//! takes already-structured [`Synset`] records.
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
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod lexicon;
mod taxonomy;

/// Synset records and the word index over them.
pub use lexicon::{Lexicon, Synset};
/// Word-level query surface and its error type.
pub use taxonomy::{Taxonomy, TaxonomyError};
