//! Structural validation for edge batch sequences.
//!
//! Provides functions to verify that a batch sequence matches what one of the
//! builders promises. Useful for debugging, testing, and checking output that
//! was produced elsewhere.

use std::collections::HashSet;

use crate::batch::{EdgeBatch, EdgeTag};
use crate::types::{Point3, Point3Like};
use crate::union_find::UnionFind;

/// Detailed validation report for a batch sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Policy the batches are checked against.
    pub policy: EdgeTag,
    /// Number of points the indices refer to.
    pub num_points: usize,
    /// Number of batches.
    pub num_batches: usize,
    /// Total edges across all batches.
    pub num_edges: usize,
    /// Configured batch size.
    pub batch_size: usize,

    /// Batches whose length breaks the fixed-size rule (every batch full,
    /// except a non-empty last batch).
    pub misshapen_batches: usize,
    /// Edges tagged with a different policy.
    pub wrong_tags: usize,
    /// Edges with an endpoint `>= num_points`.
    pub out_of_range: usize,
    /// Edges with `a >= b`.
    pub unordered_endpoints: usize,
    /// Edges that appear more than once.
    pub duplicate_edges: usize,
    /// Adjacent edge pairs that descend in `(dist_sq, a, b)`.
    pub out_of_order: usize,

    /// Edges that joined two points already connected by earlier edges.
    pub cycle_edges: usize,
    /// Components after replaying every in-range edge.
    pub components: usize,
}

impl ValidationReport {
    /// Edge count a spanning tree over `num_points` must have.
    pub fn expected_spanning_edges(&self) -> usize {
        self.num_points.saturating_sub(1)
    }

    /// Check the shape and ordering rules shared by both policies, plus the
    /// tree rules when the policy is `Spanning`.
    pub fn is_valid(&self) -> bool {
        let shared = self.misshapen_batches == 0
            && self.wrong_tags == 0
            && self.out_of_range == 0
            && self.unordered_endpoints == 0
            && self.duplicate_edges == 0
            && self.out_of_order == 0;

        match self.policy {
            EdgeTag::ClosestPair => shared,
            EdgeTag::Spanning => {
                shared
                    && self.cycle_edges == 0
                    && self.num_edges == self.expected_spanning_edges()
                    && self.components == self.num_points.min(1)
            }
        }
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        let mut issues = Vec::new();

        if self.misshapen_batches > 0 {
            issues.push(format!("{} misshapen batches", self.misshapen_batches));
        }
        if self.wrong_tags > 0 {
            issues.push(format!("{} edges with wrong tag", self.wrong_tags));
        }
        if self.out_of_range > 0 {
            issues.push(format!("{} out-of-range endpoints", self.out_of_range));
        }
        if self.unordered_endpoints > 0 {
            issues.push(format!("{} edges with a >= b", self.unordered_endpoints));
        }
        if self.duplicate_edges > 0 {
            issues.push(format!("{} duplicate edges", self.duplicate_edges));
        }
        if self.out_of_order > 0 {
            issues.push(format!("{} ranking inversions", self.out_of_order));
        }
        if self.policy == EdgeTag::Spanning {
            if self.cycle_edges > 0 {
                issues.push(format!("{} cycle edges", self.cycle_edges));
            }
            if self.num_edges != self.expected_spanning_edges() {
                issues.push(format!(
                    "E={} (expected {})",
                    self.num_edges,
                    self.expected_spanning_edges()
                ));
            }
            if self.components != self.num_points.min(1) {
                issues.push(format!("{} components (expected 1)", self.components));
            }
        }

        if issues.is_empty() {
            "Valid".to_string()
        } else {
            issues.join(", ")
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ValidationReport {{ policy={}, n={}, batches={}, E={}, components={}, {} }}",
            self.policy,
            self.num_points,
            self.num_batches,
            self.num_edges,
            self.components,
            self.summary()
        )
    }
}

/// Validate a batch sequence against `points` and the given policy.
///
/// Checks:
/// - Batch shape (full batches, non-empty partial tail)
/// - Tags, index range, `a < b`, no duplicate pairs
/// - Non-decreasing `(dist_sq, a, b)` in emission order
/// - Cycle-free replay and a single final component (spanning only)
pub fn validate<P: Point3Like>(
    points: &[P],
    batches: &[EdgeBatch],
    policy: EdgeTag,
    batch_size: usize,
) -> ValidationReport {
    let n = points.len();
    let pts: Vec<Point3> = points.iter().map(Point3::from_like).collect();

    let num_batches = batches.len();
    let mut misshapen_batches = 0usize;
    for (i, batch) in batches.iter().enumerate() {
        let last = i + 1 == num_batches;
        let ok = if last {
            !batch.is_empty() && batch.len() <= batch_size
        } else {
            batch.len() == batch_size
        };
        if !ok {
            misshapen_batches += 1;
        }
    }

    let mut uf = UnionFind::new(n);
    let mut seen = HashSet::new();
    let mut num_edges = 0usize;
    let mut wrong_tags = 0usize;
    let mut out_of_range = 0usize;
    let mut unordered_endpoints = 0usize;
    let mut duplicate_edges = 0usize;
    let mut out_of_order = 0usize;
    let mut cycle_edges = 0usize;
    let mut prev_key: Option<(u128, u32, u32)> = None;

    for edge in batches.iter().flatten() {
        num_edges += 1;
        if edge.tag != policy {
            wrong_tags += 1;
        }
        if edge.a >= edge.b {
            unordered_endpoints += 1;
        }
        if !seen.insert((edge.a.min(edge.b), edge.a.max(edge.b))) {
            duplicate_edges += 1;
        }
        if (edge.a as usize) >= n || (edge.b as usize) >= n {
            out_of_range += 1;
            continue;
        }

        let key = (
            pts[edge.a as usize].distance_squared(pts[edge.b as usize]),
            edge.a,
            edge.b,
        );
        if prev_key.is_some_and(|prev| key < prev) {
            out_of_order += 1;
        }
        prev_key = Some(key);

        if !uf.union(edge.a, edge.b) {
            cycle_edges += 1;
        }
    }

    ValidationReport {
        policy,
        num_points: n,
        num_batches,
        num_edges,
        batch_size,
        misshapen_batches,
        wrong_tags,
        out_of_range,
        unordered_endpoints,
        duplicate_edges,
        out_of_order,
        cycle_edges,
        components: uf.component_count(),
    }
}
