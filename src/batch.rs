//! Batch builders over a ranked edge list.
//!
//! Two acceptance policies share the same ranked input:
//! - closest-K takes a prefix of the ranking with no connectivity checks;
//! - greedy spanning (Kruskal) keeps an edge only when it merges two
//!   components, stopping as soon as everything is connected.
//!
//! Both emit accepted edges in acceptance order, chunked into fixed-size
//! batches with a trailing partial batch.

use crate::edges::Edge;
use crate::union_find::UnionFind;

/// Which policy accepted an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeTag {
    ClosestPair,
    Spanning,
}

impl EdgeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeTag::ClosestPair => "closest-pair",
            EdgeTag::Spanning => "spanning",
        }
    }
}

impl std::fmt::Display for EdgeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An accepted edge. Indices refer to the original point slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchEdge {
    pub a: u32,
    pub b: u32,
    pub tag: EdgeTag,
}

/// A group of accepted edges, in acceptance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeBatch {
    edges: Vec<BatchEdge>,
}

impl EdgeBatch {
    #[inline]
    pub fn edges(&self) -> &[BatchEdge] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, BatchEdge> {
        self.edges.iter()
    }
}

impl From<Vec<BatchEdge>> for EdgeBatch {
    fn from(edges: Vec<BatchEdge>) -> Self {
        Self { edges }
    }
}

impl<'a> IntoIterator for &'a EdgeBatch {
    type Item = &'a BatchEdge;
    type IntoIter = std::slice::Iter<'a, BatchEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Accumulates accepted edges and cuts a batch every `batch_size` edges.
struct Batcher {
    batch_size: usize,
    current: Vec<BatchEdge>,
    batches: Vec<EdgeBatch>,
}

impl Batcher {
    fn new(batch_size: usize) -> Self {
        assert!(batch_size > 0, "batch size must be positive");
        Self {
            batch_size,
            current: Vec::with_capacity(batch_size),
            batches: Vec::new(),
        }
    }

    #[inline]
    fn push(&mut self, edge: BatchEdge) {
        self.current.push(edge);
        if self.current.len() == self.batch_size {
            let full = std::mem::replace(&mut self.current, Vec::with_capacity(self.batch_size));
            self.batches.push(EdgeBatch { edges: full });
        }
    }

    fn finish(mut self) -> Vec<EdgeBatch> {
        if !self.current.is_empty() {
            self.batches.push(EdgeBatch {
                edges: self.current,
            });
        }
        self.batches
    }
}

/// The `k` globally shortest edges, tagged `ClosestPair`, in rank order.
///
/// Connectivity is never consulted, so the selection may contain cycles.
/// `ranked` must already be sorted (see [`crate::edges::rank_edges`]).
///
/// Panics if `batch_size == 0`.
pub fn closest_k_batches(ranked: &[Edge], k: usize, batch_size: usize) -> Vec<EdgeBatch> {
    let mut batcher = Batcher::new(batch_size);
    let take = k.min(ranked.len());
    for e in &ranked[..take] {
        batcher.push(BatchEdge {
            a: e.a,
            b: e.b,
            tag: EdgeTag::ClosestPair,
        });
    }
    let batches = batcher.finish();
    log::debug!(
        "closest-k: selected {} of {} edges in {} batches",
        take,
        ranked.len(),
        batches.len()
    );
    batches
}

/// Result of the greedy spanning walk, before batching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// Accepted edges in acceptance order.
    pub edges: Vec<Edge>,
    /// Candidates evaluated, accepted or rejected.
    pub evaluated: usize,
    /// Components remaining when the walk stopped (1 for a connected tree,
    /// 0 for an empty point set).
    pub components: usize,
}

impl SpanningTree {
    /// The edge whose acceptance connected the final two components.
    pub fn closing_edge(&self) -> Option<Edge> {
        if self.components == 1 {
            self.edges.last().copied()
        } else {
            None
        }
    }

    /// True if the walk reached a single component.
    pub fn is_complete(&self) -> bool {
        self.components <= 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Scanning,
    Complete,
}

/// Kruskal walk over `ranked` for a set of `n` points.
///
/// The walk stops the moment one component remains; later edges are never
/// evaluated. If `ranked` runs out first, the result is a spanning forest.
pub fn spanning_tree(ranked: &[Edge], n: usize) -> SpanningTree {
    let mut uf = UnionFind::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut evaluated = 0usize;
    let mut state = if n <= 1 {
        WalkState::Complete
    } else {
        WalkState::Scanning
    };

    for e in ranked {
        if state == WalkState::Complete {
            break;
        }
        evaluated += 1;
        if uf.union(e.a, e.b) {
            edges.push(*e);
            log::trace!(
                "spanning: accepted ({}, {}) dist_sq={} components={}",
                e.a,
                e.b,
                e.dist_sq,
                uf.component_count()
            );
            if uf.component_count() == 1 {
                state = WalkState::Complete;
            }
        }
    }

    log::debug!(
        "spanning: accepted {} edges after evaluating {} of {} candidates ({} components left)",
        edges.len(),
        evaluated,
        ranked.len(),
        uf.component_count()
    );

    SpanningTree {
        edges,
        evaluated,
        components: uf.component_count(),
    }
}

/// Batch a spanning walk's accepted edges, tagged `Spanning`.
pub fn tree_batches(tree: &SpanningTree, batch_size: usize) -> Vec<EdgeBatch> {
    let mut batcher = Batcher::new(batch_size);
    for e in &tree.edges {
        batcher.push(BatchEdge {
            a: e.a,
            b: e.b,
            tag: EdgeTag::Spanning,
        });
    }
    batcher.finish()
}

/// Greedy spanning batches over `ranked` for a set of `n` points.
///
/// Panics if `batch_size == 0`.
pub fn spanning_batches(ranked: &[Edge], n: usize, batch_size: usize) -> Vec<EdgeBatch> {
    assert!(batch_size > 0, "batch size must be positive");
    tree_batches(&spanning_tree(ranked, n), batch_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::ranked_edges;
    use crate::types::Point3;

    fn square() -> Vec<Point3> {
        vec![
            Point3::new(0, 0, 0),
            Point3::new(1, 0, 0),
            Point3::new(1, 1, 0),
            Point3::new(0, 1, 0),
        ]
    }

    fn sizes(batches: &[EdgeBatch]) -> Vec<usize> {
        batches.iter().map(|b| b.len()).collect()
    }

    #[test]
    fn test_batcher_emits_trailing_partial() {
        let mut b = Batcher::new(3);
        for i in 0..7 {
            b.push(BatchEdge {
                a: i,
                b: i + 1,
                tag: EdgeTag::ClosestPair,
            });
        }
        let batches = b.finish();
        assert_eq!(sizes(&batches), vec![3, 3, 1]);
        assert_eq!(batches[2].edges()[0].a, 6);
    }

    #[test]
    fn test_batcher_exact_multiple_has_no_empty_tail() {
        let mut b = Batcher::new(2);
        for i in 0..4 {
            b.push(BatchEdge {
                a: i,
                b: i + 1,
                tag: EdgeTag::Spanning,
            });
        }
        assert_eq!(sizes(&b.finish()), vec![2, 2]);
    }

    #[test]
    #[should_panic(expected = "batch size must be positive")]
    fn test_zero_batch_size_panics() {
        closest_k_batches(&[], 10, 0);
    }

    #[test]
    fn test_closest_k_takes_prefix_with_cycles() {
        let ranked = ranked_edges(&square());
        let batches = closest_k_batches(&ranked, 5, 2);
        assert_eq!(sizes(&batches), vec![2, 2, 1]);

        let flat: Vec<(u32, u32)> = batches.iter().flatten().map(|e| (e.a, e.b)).collect();
        // Four sides (a cycle) come first, then the first diagonal.
        assert_eq!(flat, vec![(0, 1), (0, 3), (1, 2), (2, 3), (0, 2)]);
        assert!(batches
            .iter()
            .flatten()
            .all(|e| e.tag == EdgeTag::ClosestPair));
    }

    #[test]
    fn test_closest_k_caps_at_edge_count() {
        let ranked = ranked_edges(&square());
        let batches = closest_k_batches(&ranked, 1000, 25);
        assert_eq!(sizes(&batches), vec![6]);
    }

    #[test]
    fn test_closest_k_zero_k_is_empty() {
        let ranked = ranked_edges(&square());
        assert!(closest_k_batches(&ranked, 0, 4).is_empty());
    }

    #[test]
    fn test_spanning_square_skips_diagonals() {
        let pts = square();
        let ranked = ranked_edges(&pts);
        let tree = spanning_tree(&ranked, pts.len());

        assert_eq!(tree.edges.len(), 3);
        assert!(tree.edges.iter().all(|e| e.dist_sq == 1));
        assert_eq!(tree.components, 1);
        // (0,1), (0,3), (1,2) connect everything; (2,3) is never looked at.
        assert_eq!(tree.evaluated, 3);
        assert_eq!(tree.closing_edge(), Some(Edge::new(1, 1, 2)));
    }

    #[test]
    fn test_spanning_rejects_cycle_edges() {
        // Triangle of equal sides plus a far point: the third side closes a cycle.
        let pts = vec![
            Point3::new(0, 0, 0),
            Point3::new(2, 0, 0),
            Point3::new(1, 0, 0),
            Point3::new(100, 0, 0),
        ];
        let ranked = ranked_edges(&pts);
        let tree = spanning_tree(&ranked, pts.len());
        let pairs: Vec<(u32, u32)> = tree.edges.iter().map(|e| (e.a, e.b)).collect();
        assert_eq!(pairs, vec![(0, 2), (1, 2), (1, 3)]);
        // (0,1) with dist 4 was evaluated and rejected before (1,3).
        assert!(tree.evaluated > tree.edges.len());
    }

    #[test]
    fn test_spanning_degenerate_inputs() {
        assert!(spanning_batches(&[], 0, 20).is_empty());
        assert!(spanning_batches(&[], 1, 20).is_empty());

        let tree = spanning_tree(&[], 1);
        assert_eq!(tree.evaluated, 0);
        assert!(tree.is_complete());
        assert_eq!(tree.closing_edge(), None);
    }

    #[test]
    fn test_spanning_forest_when_edges_run_out() {
        // Only one candidate for three points: the walk ends as a forest.
        let ranked = vec![Edge::new(1, 0, 1)];
        let tree = spanning_tree(&ranked, 3);
        assert_eq!(tree.edges.len(), 1);
        assert_eq!(tree.components, 2);
        assert!(!tree.is_complete());
        assert_eq!(tree.closing_edge(), None);
    }

    #[test]
    fn test_spanning_batches_tagged_and_chunked() {
        let pts: Vec<Point3> = (0..9).map(|i| Point3::new(i, 0, 0)).collect();
        let ranked = ranked_edges(&pts);
        let batches = spanning_batches(&ranked, pts.len(), 3);
        assert_eq!(sizes(&batches), vec![3, 3, 2]);
        assert!(batches.iter().flatten().all(|e| e.tag == EdgeTag::Spanning));
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(EdgeTag::ClosestPair.to_string(), "closest-pair");
        assert_eq!(EdgeTag::Spanning.as_str(), "spanning");
    }
}
