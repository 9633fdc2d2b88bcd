//! Exhaustive pairwise edge enumeration and ranking.
//!
//! Every unordered pair of points becomes one candidate edge. There is no
//! spatial acceleration: the candidate set is always `n(n-1)/2` entries, so
//! callers should keep point sets to a few thousand points.

use crate::types::{Point3, Point3Like};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A candidate connection between points `a` and `b` (always `a < b`).
///
/// Field order matters: the derived `Ord` compares `(dist_sq, a, b)`, which is
/// the ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    /// Exact squared Euclidean distance between the endpoints.
    pub dist_sq: u128,
    pub a: u32,
    pub b: u32,
}

impl Edge {
    #[inline]
    pub fn new(dist_sq: u128, a: u32, b: u32) -> Self {
        debug_assert!(a < b, "edge endpoints must be ordered: {} >= {}", a, b);
        Self { dist_sq, a, b }
    }
}

/// Number of candidate edges for `n` points.
#[inline]
pub fn edge_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// Enumerate every unordered pair `{i, j}`, `i < j`, with its squared distance.
///
/// Output is grouped by `i` ascending, then `j` ascending. The order is the
/// same with or without the `parallel` feature.
///
/// Panics if `points.len()` does not fit in a `u32` index, or if any
/// coordinate is outside `[-COORD_LIMIT, COORD_LIMIT]`.
pub fn enumerate_edges<P: Point3Like>(points: &[P]) -> Vec<Edge> {
    let n = points.len();
    assert!(
        n <= u32::MAX as usize,
        "point set too large for u32 indices: {}",
        n
    );
    if n < 2 {
        return Vec::new();
    }

    let pts: Vec<Point3> = points.iter().map(Point3::from_like).collect();
    assert!(
        pts.iter().all(Point3::in_range),
        "coordinate outside [-2^62, 2^62]"
    );
    let pts = pts.as_slice();

    let row = move |i: usize| {
        let pi = pts[i];
        (i + 1..n).map(move |j| {
            let dist_sq = pi.distance_squared(pts[j]);
            Edge::new(dist_sq, i as u32, j as u32)
        })
    };

    #[cfg(feature = "parallel")]
    let edges: Vec<Edge> = (0..n - 1).into_par_iter().flat_map_iter(row).collect();
    #[cfg(not(feature = "parallel"))]
    let edges: Vec<Edge> = (0..n - 1).flat_map(row).collect();

    debug_assert_eq!(edges.len(), edge_count(n));
    edges
}

/// Sort edges ascending by `(dist_sq, a, b)`.
///
/// The key is unique per pair, so the unstable sort is still deterministic.
pub fn rank_edges(edges: &mut [Edge]) {
    #[cfg(feature = "parallel")]
    {
        edges.par_sort_unstable();
    }
    #[cfg(not(feature = "parallel"))]
    {
        edges.sort_unstable();
    }
}

/// Enumerate and rank in one step.
pub fn ranked_edges<P: Point3Like>(points: &[P]) -> Vec<Edge> {
    let mut edges = enumerate_edges(points);
    rank_edges(&mut edges);
    log::debug!(
        "ranked {} candidate edges over {} points",
        edges.len(),
        points.len()
    );
    edges
}

/// Returns true if `edges` is non-decreasing in `(dist_sq, a, b)`.
pub fn is_ranked(edges: &[Edge]) -> bool {
    edges.windows(2).all(|w| w[0] <= w[1])
}
