// SPDX-License-Identifier: Apache-2.0
//! Validated ancestry engine: structural checks plus shortest-common-ancestor
//! queries via paired multi-source breadth-first search.
use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::digraph::Digraph;

/// Structural violations detected once, at engine construction.
///
/// These are unrecoverable for the engine instance: the input graph is
/// wrong, not transiently unavailable. Callers must fix the data and
/// rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The graph contains a directed cycle through `vertex`.
    #[error("graph contains a directed cycle through vertex {vertex}")]
    CyclicGraph {
        /// A vertex on the detected cycle.
        vertex: usize,
    },
    /// No vertex has out-degree zero, so no root exists.
    #[error("graph has no root (every vertex has a hypernym)")]
    NotRooted,
    /// More than one vertex has out-degree zero.
    #[error("graph has multiple roots (vertices {first} and {second} both lack hypernyms)")]
    MultipleRoots {
        /// The first root encountered, in increasing id order.
        first: usize,
        /// The second root encountered.
        second: usize,
    },
    /// Some vertex cannot reach the root along hypernym edges.
    #[error("vertex {vertex} is disconnected from the root")]
    DisconnectedGraph {
        /// The smallest vertex id with no path to the root.
        vertex: usize,
    },
}

/// Bad runtime arguments to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A query vertex id was outside `[0, vertex_count)`.
    #[error("query vertex {vertex} out of range for graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex id.
        vertex: usize,
        /// The engine's fixed vertex count.
        vertex_count: usize,
    },
    /// A query set was empty.
    #[error("query set must not be empty")]
    EmptyInput,
}

/// Outcome of a shortest-ancestral-path query.
///
/// "No common ancestor" is a valid result, not an error; it is encoded as
/// `length == -1 && ancestor == -1`. On a validated engine it cannot occur
/// (every vertex reaches the unique root), but the contract stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SapResult {
    /// Minimal combined path length through a common ancestor, or `-1`.
    pub length: i64,
    /// A vertex achieving that minimum, or `-1`.
    pub ancestor: i64,
}

impl SapResult {
    /// The sentinel for "no common ancestor".
    pub const NO_ANCESTOR: Self = Self {
        length: -1,
        ancestor: -1,
    };

    /// Returns `true` when a common ancestor was found.
    #[must_use]
    pub fn found(self) -> bool {
        self.ancestor >= 0
    }
}

/// Shortest-common-ancestor engine over a validated hypernym digraph.
///
/// Construction runs three structural checks, in order: no directed cycle,
/// exactly one vertex with out-degree zero (the root), and reachability of
/// every vertex from that root over reversed edges. A graph can pass the
/// first two and still fail the third, so the coverage check is mandatory,
/// not redundant.
///
/// The engine takes the graph by value and never exposes mutation, so the
/// validated invariants hold for its whole lifetime. Queries are stateless
/// with respect to one another: each builds its own pair of frontiers and
/// discards them, which also makes concurrent queries from multiple threads
/// safe (`&self` only, no interior mutability).
#[derive(Debug)]
pub struct AncestryEngine {
    graph: Digraph,
    root: usize,
}

/// Vertex marks for the iterative cycle check.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unseen,
    OnPath,
    Finished,
}

impl AncestryEngine {
    /// Validates `graph` and wraps it in an engine.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first violated invariant.
    /// A failed validation leaves no usable engine behind.
    pub fn new(graph: Digraph) -> Result<Self, ValidationError> {
        check_acyclic(&graph)?;
        let root = find_root(&graph)?;
        check_root_coverage(&graph, root)?;
        Ok(Self { graph, root })
    }

    /// The validated graph.
    #[must_use]
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// The unique vertex with no hypernym.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Shortest ancestral path between two vertex sets.
    ///
    /// Runs one multi-source BFS per set along hypernym edges, then picks
    /// the vertex reachable from both sets that minimizes the combined
    /// distance. `length` and `ancestor` come from this single shared run;
    /// the thin wrappers below discard one half of the pair.
    ///
    /// Ties on combined length resolve to the smallest vertex id, which is
    /// deterministic and reproducible across runs.
    ///
    /// # Errors
    ///
    /// [`QueryError::EmptyInput`] if either set is empty;
    /// [`QueryError::InvalidVertex`] if any id is out of range. Out-of-range
    /// ids are reported, never clamped.
    pub fn query(&self, v_set: &[usize], w_set: &[usize]) -> Result<SapResult, QueryError> {
        self.check_query_set(v_set)?;
        self.check_query_set(w_set)?;

        let d1 = self.ancestral_distances(v_set);
        let d2 = self.ancestral_distances(w_set);

        // Intersect through the smaller frontier; cost stays proportional to
        // the reachable set, not to the whole vertex range.
        let (near, far) = if d1.len() <= d2.len() {
            (&d1, &d2)
        } else {
            (&d2, &d1)
        };
        let mut best: Option<(u64, usize)> = None;
        for (&candidate, &dn) in near {
            if let Some(&df) = far.get(&candidate) {
                let key = (u64::from(dn) + u64::from(df), candidate);
                if best.is_none_or(|b| key < b) {
                    best = Some(key);
                }
            }
        }

        Ok(best.map_or(SapResult::NO_ANCESTOR, |(length, ancestor)| SapResult {
            length: length as i64,
            ancestor: ancestor as i64,
        }))
    }

    /// Length of the shortest ancestral path between two vertex sets; `-1`
    /// if no common ancestor exists.
    pub fn length(&self, v_set: &[usize], w_set: &[usize]) -> Result<i64, QueryError> {
        Ok(self.query(v_set, w_set)?.length)
    }

    /// A common ancestor on a shortest ancestral path between two vertex
    /// sets; `-1` if none exists.
    pub fn ancestor(&self, v_set: &[usize], w_set: &[usize]) -> Result<i64, QueryError> {
        Ok(self.query(v_set, w_set)?.ancestor)
    }

    /// Single-vertex convenience for [`AncestryEngine::length`].
    pub fn length_between(&self, v: usize, w: usize) -> Result<i64, QueryError> {
        self.length(&[v], &[w])
    }

    /// Single-vertex convenience for [`AncestryEngine::ancestor`].
    pub fn ancestor_of(&self, v: usize, w: usize) -> Result<i64, QueryError> {
        self.ancestor(&[v], &[w])
    }

    fn check_query_set(&self, set: &[usize]) -> Result<(), QueryError> {
        if set.is_empty() {
            return Err(QueryError::EmptyInput);
        }
        let vertex_count = self.graph.vertex_count();
        for &vertex in set {
            if vertex >= vertex_count {
                return Err(QueryError::InvalidVertex {
                    vertex,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Multi-source BFS along hypernym edges from every vertex in
    /// `sources`, returning the sparse map of reached vertex to shortest
    /// distance. The map lives only for the duration of one query.
    fn ancestral_distances(&self, sources: &[usize]) -> FxHashMap<usize, u32> {
        let mut dist: FxHashMap<usize, u32> = FxHashMap::default();
        let mut queue: VecDeque<usize> = VecDeque::new();
        for &source in sources {
            // Sets may repeat ids; the first insertion wins at distance 0.
            if !dist.contains_key(&source) {
                dist.insert(source, 0);
                queue.push_back(source);
            }
        }
        while let Some(vertex) = queue.pop_front() {
            let d = dist[&vertex];
            for next in self.graph.successors(vertex) {
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    }
}

/// Cycle detection with an explicit stack.
///
/// Same contract as the recursive "on current path" DFS, but the frames live
/// on the heap so deep hierarchies cannot overflow the call stack. Each
/// frame keeps a cursor into its successor list.
fn check_acyclic(graph: &Digraph) -> Result<(), ValidationError> {
    let mut marks = vec![Mark::Unseen; graph.vertex_count()];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..graph.vertex_count() {
        if marks[start] != Mark::Unseen {
            continue;
        }
        marks[start] = Mark::OnPath;
        stack.push((start, 0));
        while let Some(&mut (vertex, ref mut cursor)) = stack.last_mut() {
            let successors = graph.adjacency(vertex);
            if let Some(&next) = successors.get(*cursor) {
                *cursor += 1;
                match marks[next] {
                    Mark::Unseen => {
                        marks[next] = Mark::OnPath;
                        stack.push((next, 0));
                    }
                    Mark::OnPath => return Err(ValidationError::CyclicGraph { vertex: next }),
                    Mark::Finished => {}
                }
            } else {
                marks[vertex] = Mark::Finished;
                stack.pop();
            }
        }
    }
    Ok(())
}

/// Finds the unique vertex with out-degree zero.
fn find_root(graph: &Digraph) -> Result<usize, ValidationError> {
    let mut root: Option<usize> = None;
    for vertex in 0..graph.vertex_count() {
        if graph.out_degree(vertex) == 0 {
            match root {
                None => root = Some(vertex),
                Some(first) => {
                    return Err(ValidationError::MultipleRoots {
                        first,
                        second: vertex,
                    })
                }
            }
        }
    }
    root.ok_or(ValidationError::NotRooted)
}

/// BFS over the edge-reversed graph from the root; every vertex must be
/// reached. Acyclicity and a unique root do not imply this: a vertex can sit
/// in a side component whose hypernym chains never meet the root, which is
/// why the check is mandatory.
fn check_root_coverage(graph: &Digraph, root: usize) -> Result<(), ValidationError> {
    let reversed = graph.reversed();
    let mut marked = vec![false; reversed.vertex_count()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    marked[root] = true;
    queue.push_back(root);
    while let Some(vertex) = queue.pop_front() {
        for next in reversed.successors(vertex) {
            if !marked[next] {
                marked[next] = true;
                queue.push_back(next);
            }
        }
    }
    match marked.iter().position(|&m| !m) {
        Some(vertex) => Err(ValidationError::DisconnectedGraph { vertex }),
        None => Ok(()),
    }
}
