// SPDX-License-Identifier: Apache-2.0
//! Word-level queries: distance, common ancestor, outcast.
use thiserror::Error;

use sema_core::{AncestryEngine, Digraph, QueryError, ValidationError};

use crate::lexicon::{Lexicon, Synset};

/// Errors from building or querying a [`Taxonomy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// The lexicon and graph disagree on the number of synsets.
    #[error("lexicon has {synsets} synsets but graph has {vertices} vertices")]
    SynsetCountMismatch {
        /// Synset count in the lexicon.
        synsets: usize,
        /// Vertex count in the hypernym graph.
        vertices: usize,
    },
    /// The hypernym graph failed structural validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The underlying engine rejected the query arguments.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// A queried word is not in the lexicon.
    #[error("word not in lexicon: {0}")]
    UnknownWord(String),
    /// The word list for an outcast query was empty.
    #[error("word list must not be empty")]
    EmptyInput,
    /// No common ancestor exists (unreachable on validated input).
    #[error("no common ancestor")]
    NoCommonAncestor,
}

/// A lexicon paired with a validated ancestry engine.
///
/// Construction consumes both sides and runs the full structural validation
/// of [`AncestryEngine::new`]; a `Taxonomy` that exists answers queries over
/// a well-formed rooted hypernym graph.
#[derive(Debug)]
pub struct Taxonomy {
    lexicon: Lexicon,
    engine: AncestryEngine,
}

impl Taxonomy {
    /// Validates `graph` against `lexicon` and wraps both.
    ///
    /// # Errors
    ///
    /// [`TaxonomyError::SynsetCountMismatch`] when the tables disagree on
    /// size, or any [`ValidationError`] from the engine.
    pub fn new(lexicon: Lexicon, graph: Digraph) -> Result<Self, TaxonomyError> {
        if lexicon.len() != graph.vertex_count() {
            return Err(TaxonomyError::SynsetCountMismatch {
                synsets: lexicon.len(),
                vertices: graph.vertex_count(),
            });
        }
        let engine = AncestryEngine::new(graph)?;
        Ok(Self { lexicon, engine })
    }

    /// The word tables.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Semantic distance between two words: the shortest ancestral path
    /// between their synset sets.
    pub fn distance(&self, a: &str, b: &str) -> Result<i64, TaxonomyError> {
        let v = self.ids_of(a)?;
        let w = self.ids_of(b)?;
        Ok(self.engine.length(v, w)?)
    }

    /// The synset that is the common ancestor of `a` and `b` on a shortest
    /// ancestral path.
    pub fn common_ancestor(&self, a: &str, b: &str) -> Result<&Synset, TaxonomyError> {
        let v = self.ids_of(a)?;
        let w = self.ids_of(b)?;
        let result = self.engine.query(v, w)?;
        if !result.found() {
            return Err(TaxonomyError::NoCommonAncestor);
        }
        self.lexicon
            .synset(result.ancestor as usize)
            .ok_or(TaxonomyError::NoCommonAncestor)
    }

    /// The word in `words` that is semantically farthest from the rest: the
    /// one maximizing the sum of distances to every word in the list.
    ///
    /// Ties keep the earliest word. Self-distance contributes zero to each
    /// sum, so including a word in its own comparison is harmless.
    ///
    /// # Errors
    ///
    /// [`TaxonomyError::EmptyInput`] on an empty list, and
    /// [`TaxonomyError::UnknownWord`] naming the first unindexed word; every
    /// word is checked before any distance is summed.
    pub fn outcast<'a, S: AsRef<str>>(&self, words: &'a [S]) -> Result<&'a str, TaxonomyError> {
        if words.is_empty() {
            return Err(TaxonomyError::EmptyInput);
        }
        let id_sets: Vec<&[usize]> = words
            .iter()
            .map(|w| self.ids_of(w.as_ref()))
            .collect::<Result<_, _>>()?;

        let mut best_index = 0;
        let mut best_total = -1_i64;
        for (i, contender) in id_sets.iter().enumerate() {
            let mut total = 0_i64;
            for other in &id_sets {
                total += self.engine.length(contender, other)?;
            }
            if total > best_total {
                best_total = total;
                best_index = i;
            }
        }
        Ok(words[best_index].as_ref())
    }

    fn ids_of(&self, word: &str) -> Result<&[usize], TaxonomyError> {
        self.lexicon
            .synset_ids(word)
            .ok_or_else(|| TaxonomyError::UnknownWord(word.to_string()))
    }
}
