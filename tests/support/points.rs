#![allow(dead_code)]

use box_circuits::Point3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate random points uniformly distributed in the cube `[0, extent)^3`.
pub fn random_cube_points(n: usize, extent: i64, seed: u64) -> Vec<Point3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_cube_points_with_rng(n, extent, &mut rng)
}

pub fn random_cube_points_with_rng<R: Rng + ?Sized>(
    n: usize,
    extent: i64,
    rng: &mut R,
) -> Vec<Point3> {
    (0..n)
        .map(|_| {
            Point3::new(
                rng.gen_range(0..extent),
                rng.gen_range(0..extent),
                rng.gen_range(0..extent),
            )
        })
        .collect()
}

/// The 20-point sample layout from the junction box puzzle.
pub fn sample_boxes() -> Vec<Point3> {
    [
        [162, 817, 812],
        [57, 618, 57],
        [906, 360, 560],
        [592, 479, 940],
        [352, 342, 300],
        [466, 668, 158],
        [542, 29, 236],
        [431, 825, 988],
        [739, 650, 466],
        [52, 470, 668],
        [216, 146, 977],
        [819, 987, 18],
        [117, 168, 530],
        [805, 96, 715],
        [346, 949, 466],
        [970, 615, 88],
        [941, 993, 340],
        [862, 61, 35],
        [984, 92, 344],
        [425, 690, 689],
    ]
    .into_iter()
    .map(Point3::from)
    .collect()
}

// =============================================================================
// Adversarial Point Generators for Stress Testing
// =============================================================================

/// Generate an axis-aligned integer lattice of `side^3` points.
///
/// Every lattice neighbor sits at distance 1, so almost every rank decision
/// is a tie broken by `(a, b)`.
pub fn lattice_points(side: i64) -> Vec<Point3> {
    let mut points = Vec::with_capacity((side * side * side) as usize);
    for x in 0..side {
        for y in 0..side {
            for z in 0..side {
                points.push(Point3::new(x, y, z));
            }
        }
    }
    points
}

/// Generate tight clusters far apart from each other.
///
/// Intra-cluster edges all rank before any inter-cluster edge, so the
/// spanning walk evaluates (and rejects) many cycle edges before bridging.
pub fn clustered_points(clusters: usize, per_cluster: usize, seed: u64) -> Vec<Point3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(clusters * per_cluster);
    for c in 0..clusters {
        let cx = c as i64 * 1_000_000;
        for _ in 0..per_cluster {
            points.push(Point3::new(
                cx + rng.gen_range(0..100),
                rng.gen_range(0..100),
                rng.gen_range(0..100),
            ));
        }
    }
    points
}

/// Generate points drawn from a tiny coordinate range, forcing coincident
/// points (zero-length edges) and heavy ties.
pub fn duplicate_heavy_points(n: usize, seed: u64) -> Vec<Point3> {
    random_cube_points(n, 3, seed)
}
