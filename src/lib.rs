//! Closest-pair and spanning-tree connection batches over 3D integer points.
//!
//! Every pair of points is a candidate edge, ranked by exact squared distance
//! with `(a, b)` as the tiebreak. Two policies turn the ranking into ordered,
//! fixed-size batches:
//!
//! - **closest-K**: the `k` globally shortest edges, cycles allowed;
//! - **greedy spanning**: Kruskal's minimum spanning tree, stopping the moment
//!   every point is connected.
//!
//! Candidate generation is exhaustive and quadratic; inputs beyond a few
//! thousand points are not a target.
//!
//! # Example
//!
//! ```
//! use box_circuits::{build_spanning_batches, Point3};
//!
//! let points = vec![
//!     Point3::new(0, 0, 0),
//!     Point3::new(1, 0, 0),
//!     Point3::new(1, 1, 0),
//!     Point3::new(0, 1, 0),
//! ];
//!
//! let batches = build_spanning_batches(&points, 20);
//! assert_eq!(batches.len(), 1);
//! assert_eq!(batches[0].len(), 3);
//! ```

mod batch;
mod edges;
mod error;
mod types;
mod union_find;

pub mod input;
pub mod summary;
pub mod timing;
pub mod validation;

pub use batch::{
    closest_k_batches, spanning_batches, spanning_tree, tree_batches, BatchEdge, EdgeBatch,
    EdgeTag, SpanningTree,
};
pub use edges::{edge_count, enumerate_edges, is_ranked, rank_edges, ranked_edges, Edge};
pub use error::CircuitError;
pub use types::{coord_in_range, Point3, Point3Like, COORD_LIMIT};
pub use union_find::UnionFind;

use timing::{LapTimer, Phase, PhaseTimings};

/// Edges selected by the closest-K policy in the reference configuration.
pub const DEFAULT_CLOSEST_K: usize = 1000;
/// Closest-K edges per batch in the reference configuration.
pub const DEFAULT_CLOSEST_BATCH_SIZE: usize = 25;
/// Spanning edges per batch in the reference configuration.
pub const DEFAULT_SPANNING_BATCH_SIZE: usize = 20;

/// Configuration for [`compute_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitConfig {
    /// Number of shortest edges taken by the closest-K policy.
    pub closest_k: usize,
    /// Batch size for closest-K output. Must be positive.
    pub closest_batch_size: usize,
    /// Batch size for spanning output. Must be positive.
    pub spanning_batch_size: usize,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            closest_k: DEFAULT_CLOSEST_K,
            closest_batch_size: DEFAULT_CLOSEST_BATCH_SIZE,
            spanning_batch_size: DEFAULT_SPANNING_BATCH_SIZE,
        }
    }
}

/// Output of both policies over one shared ranking.
#[derive(Debug, Clone)]
pub struct CircuitOutput {
    /// Closest-K batches, tagged `ClosestPair`.
    pub closest: Vec<EdgeBatch>,
    /// Spanning batches, tagged `Spanning`.
    pub spanning: Vec<EdgeBatch>,
    /// The unbatched spanning walk behind `spanning`.
    pub tree: SpanningTree,
    /// Number of candidate edges that were ranked.
    pub candidates: usize,
    /// Phase timings (zero-sized unless the `timing` feature is enabled).
    pub timings: PhaseTimings,
}

/// The `k` globally shortest connections, in batches of `batch_size`.
///
/// Panics if `batch_size == 0`.
pub fn build_closest_k_batches<P: Point3Like>(
    points: &[P],
    k: usize,
    batch_size: usize,
) -> Vec<EdgeBatch> {
    assert!(batch_size > 0, "batch size must be positive");
    let ranked = ranked_edges(points);
    closest_k_batches(&ranked, k, batch_size)
}

/// Minimum spanning tree edges in acceptance order, in batches of `batch_size`.
///
/// Panics if `batch_size == 0`.
pub fn build_spanning_batches<P: Point3Like>(points: &[P], batch_size: usize) -> Vec<EdgeBatch> {
    assert!(batch_size > 0, "batch size must be positive");
    let ranked = ranked_edges(points);
    spanning_batches(&ranked, points.len(), batch_size)
}

/// Run both policies with the reference configuration.
pub fn compute<P: Point3Like>(points: &[P]) -> CircuitOutput {
    compute_with(points, &CircuitConfig::default())
}

/// Run both policies with explicit configuration, ranking the edges once.
///
/// Panics if either batch size is zero.
pub fn compute_with<P: Point3Like>(points: &[P], config: &CircuitConfig) -> CircuitOutput {
    assert!(
        config.closest_batch_size > 0 && config.spanning_batch_size > 0,
        "batch size must be positive"
    );

    let mut timings = PhaseTimings::default();
    let mut lap = LapTimer::start();

    let mut ranked = enumerate_edges(points);
    timings.record(Phase::Enumerate, lap.lap());

    rank_edges(&mut ranked);
    timings.record(Phase::Rank, lap.lap());

    let closest = closest_k_batches(&ranked, config.closest_k, config.closest_batch_size);
    timings.record(Phase::Closest, lap.lap());

    let tree = spanning_tree(&ranked, points.len());
    let spanning = tree_batches(&tree, config.spanning_batch_size);
    timings.record(Phase::Spanning, lap.lap());

    log::debug!(
        "computed {} closest batches and {} spanning batches from {} candidates",
        closest.len(),
        spanning.len(),
        ranked.len()
    );
    timings.report(points.len());

    CircuitOutput {
        closest,
        spanning,
        tree,
        candidates: ranked.len(),
        timings,
    }
}
