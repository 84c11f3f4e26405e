// SPDX-License-Identifier: Apache-2.0
//! Immutable in-memory digraph store used by the ancestry engine.
use thiserror::Error;

/// Error returned by [`Digraph::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigraphError {
    /// An edge endpoint was outside `[0, vertex_count)`.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex id.
        vertex: usize,
        /// The fixed vertex count of the graph under construction.
        vertex_count: usize,
    },
}

/// Fixed directed graph over integer vertex ids `[0, V)`.
///
/// The adjacency structure is sealed at construction: there is no edge
/// insertion afterwards, so anything validated against a `Digraph` stays
/// valid for its lifetime. Self-loops and duplicate edges are representable
/// here; whether they are *acceptable* is the ancestry engine's concern.
///
/// Successor order is the insertion order of the edge list. Traversal
/// results must not depend on that order for correctness; it only shows up
/// in tie-break scenarios that callers are required to treat as unspecified.
#[derive(Debug, Clone)]
pub struct Digraph {
    vertex_count: usize,
    /// Mapping from source vertex to its successor list.
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Digraph {
    /// Builds a graph with `vertex_count` vertices from `(from, to)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`DigraphError::InvalidVertex`] if any endpoint lies outside
    /// `[0, vertex_count)`. Note that ids are unsigned, so the classic
    /// "negative id" half of the range check cannot occur; only the upper
    /// bound is live.
    pub fn new<I>(vertex_count: usize, edges: I) -> Result<Self, DigraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut adj = vec![Vec::new(); vertex_count];
        let mut edge_count = 0;
        for (from, to) in edges {
            for endpoint in [from, to] {
                if endpoint >= vertex_count {
                    return Err(DigraphError::InvalidVertex {
                        vertex: endpoint,
                        vertex_count,
                    });
                }
            }
            adj[from].push(to);
            edge_count += 1;
        }
        Ok(Self {
            vertex_count,
            adj,
            edge_count,
        })
    }

    /// Returns the fixed number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over the successors of `v` in insertion order.
    ///
    /// The iterator is finite and restartable: calling `successors(v)` again
    /// yields the same sequence.
    ///
    /// # Panics
    ///
    /// Panics if `v >= vertex_count`. Callers hold ids produced by this
    /// crate's own range checks; the engine validates query ids before
    /// traversing.
    pub fn successors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[v].iter().copied()
    }

    /// Successor list of `v` as a slice, for traversals that keep explicit
    /// per-frame cursors (iterative DFS).
    pub(crate) fn adjacency(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Returns the out-degree of `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v >= vertex_count`.
    #[must_use]
    pub fn out_degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Returns a new graph with every edge direction flipped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut adj = vec![Vec::new(); self.vertex_count];
        for (from, successors) in self.adj.iter().enumerate() {
            for &to in successors {
                adj[to].push(from);
            }
        }
        Self {
            vertex_count: self.vertex_count,
            adj,
            edge_count: self.edge_count,
        }
    }
}
