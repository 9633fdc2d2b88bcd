//! Circuit summaries derived from accepted edges.

use crate::batch::{EdgeBatch, SpanningTree};
use crate::types::{Point3, Point3Like};
use crate::union_find::UnionFind;

/// Replay every edge in `batches` over `n` points and return component
/// sizes, largest first.
///
/// Edges that close a cycle are harmless here, so closest-pair batches can be
/// passed directly.
pub fn circuit_sizes(n: usize, batches: &[EdgeBatch]) -> Vec<usize> {
    let mut uf = UnionFind::new(n);
    for edge in batches.iter().flatten() {
        uf.union(edge.a, edge.b);
    }
    uf.component_sizes()
}

/// Product of the `count` largest sizes. `sizes` must be sorted descending.
///
/// Returns `Some(1)` for `count == 0`, and multiplies all sizes when fewer are
/// present. `None` if the product overflows `u128`.
pub fn largest_circuits_product(sizes: &[usize], count: usize) -> Option<u128> {
    debug_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
    sizes
        .iter()
        .take(count)
        .try_fold(1u128, |acc, &s| acc.checked_mul(s as u128))
}

/// Product of the x coordinates of the edge that completed the spanning tree.
///
/// `None` if the walk never reached a single component through an edge
/// (empty or single-point sets, or a forest).
pub fn closing_edge_product<P: Point3Like>(points: &[P], tree: &SpanningTree) -> Option<i128> {
    let edge = tree.closing_edge()?;
    let a = Point3::from_like(&points[edge.a as usize]);
    let b = Point3::from_like(&points[edge.b as usize]);
    Some(a.x as i128 * b.x as i128)
}
