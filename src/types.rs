//! Core point types for circuit construction.

use bytemuck::{Pod, Zeroable};

/// Largest supported coordinate magnitude. Every coordinate must lie in
/// `[-COORD_LIMIT, COORD_LIMIT]` for `distance_squared` to fit in `u128`.
pub const COORD_LIMIT: i64 = 1 << 62;

/// A point in 3D space with integer coordinates.
///
/// This type provides a small `#[repr(C)]` representation with a stable layout.
/// Points are identified downstream only by their index in the input slice.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Point3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point3 {
    /// Create a new point.
    ///
    /// Debug builds panic if a coordinate is outside `[-COORD_LIMIT, COORD_LIMIT]`.
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        let p = Self { x, y, z };
        debug_assert!(p.in_range(), "coordinate outside [-2^62, 2^62]");
        p
    }

    /// Returns true if every coordinate lies in `[-COORD_LIMIT, COORD_LIMIT]`.
    #[inline]
    pub const fn in_range(&self) -> bool {
        coord_in_range(self.x) && coord_in_range(self.y) && coord_in_range(self.z)
    }

    /// Create from any type implementing `Point3Like`.
    #[inline]
    pub fn from_like<P: Point3Like>(p: &P) -> Self {
        Self::new(p.x(), p.y(), p.z())
    }

    /// Convert to a glam::I64Vec3 (available when the `glam` feature is enabled).
    #[cfg(feature = "glam")]
    #[inline]
    pub fn to_glam(self) -> glam::I64Vec3 {
        glam::I64Vec3::new(self.x, self.y, self.z)
    }

    /// Create from a glam::I64Vec3 (available when the `glam` feature is enabled).
    #[cfg(feature = "glam")]
    #[inline]
    pub fn from_glam(v: glam::I64Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Exact squared Euclidean distance to `other`.
    ///
    /// Differences are taken in `i128`. The sum is exact while every per-axis
    /// difference stays within `2^63`, which holds whenever both points are
    /// `in_range`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> u128 {
        let dx = (self.x as i128 - other.x as i128).unsigned_abs();
        let dy = (self.y as i128 - other.y as i128).unsigned_abs();
        let dz = (self.z as i128 - other.z as i128).unsigned_abs();
        dx * dx + dy * dy + dz * dz
    }
}

/// Returns true if `v` lies in `[-COORD_LIMIT, COORD_LIMIT]`.
#[inline]
pub const fn coord_in_range(v: i64) -> bool {
    v >= -COORD_LIMIT && v <= COORD_LIMIT
}

impl From<[i64; 3]> for Point3 {
    #[inline]
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for [i64; 3] {
    #[inline]
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

impl From<(i64, i64, i64)> for Point3 {
    #[inline]
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(feature = "glam")]
impl From<glam::I64Vec3> for Point3 {
    #[inline]
    fn from(v: glam::I64Vec3) -> Self {
        Self::from_glam(v)
    }
}

#[cfg(feature = "glam")]
impl From<Point3> for glam::I64Vec3 {
    #[inline]
    fn from(p: Point3) -> glam::I64Vec3 {
        p.to_glam()
    }
}

/// Trait for types that can be used as input points.
///
/// This allows zero-copy input from various math libraries.
pub trait Point3Like {
    fn x(&self) -> i64;
    fn y(&self) -> i64;
    fn z(&self) -> i64;
}

impl Point3Like for Point3 {
    #[inline]
    fn x(&self) -> i64 {
        self.x
    }
    #[inline]
    fn y(&self) -> i64 {
        self.y
    }
    #[inline]
    fn z(&self) -> i64 {
        self.z
    }
}

impl Point3Like for [i64; 3] {
    #[inline]
    fn x(&self) -> i64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> i64 {
        self[1]
    }
    #[inline]
    fn z(&self) -> i64 {
        self[2]
    }
}

impl Point3Like for (i64, i64, i64) {
    #[inline]
    fn x(&self) -> i64 {
        self.0
    }
    #[inline]
    fn y(&self) -> i64 {
        self.1
    }
    #[inline]
    fn z(&self) -> i64 {
        self.2
    }
}

// Implement for glam::I64Vec3 when the feature is enabled.
#[cfg(feature = "glam")]
impl Point3Like for glam::I64Vec3 {
    #[inline]
    fn x(&self) -> i64 {
        self.x
    }
    #[inline]
    fn y(&self) -> i64 {
        self.y
    }
    #[inline]
    fn z(&self) -> i64 {
        self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared_basics() {
        let a = Point3::new(0, 0, 0);
        let b = Point3::new(1, 2, 2);
        assert_eq!(a.distance_squared(b), 9);
        assert_eq!(b.distance_squared(a), 9);
        assert_eq!(a.distance_squared(a), 0);
    }

    #[test]
    fn test_distance_squared_extreme_coordinates() {
        let m = 1i64 << 62;
        let a = Point3::new(-m, -m, -m);
        let b = Point3::new(m, m, m);
        let span = 1u128 << 63;
        assert_eq!(a.distance_squared(b), 3 * span * span);
    }

    #[test]
    fn test_coord_range_boundary() {
        assert!(coord_in_range(COORD_LIMIT));
        assert!(coord_in_range(-COORD_LIMIT));
        assert!(!coord_in_range(COORD_LIMIT + 1));
        assert!(!coord_in_range(-COORD_LIMIT - 1));
        assert!(!coord_in_range(i64::MIN));
        assert!(!coord_in_range(i64::MAX));

        let edge = Point3::new(COORD_LIMIT, -COORD_LIMIT, 0);
        assert!(edge.in_range());
        let raw = Point3 { x: i64::MAX, y: 0, z: 0 };
        assert!(!raw.in_range());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "coordinate outside")]
    fn test_new_rejects_out_of_range_in_debug() {
        let _ = Point3::new(i64::MIN, 0, 0);
    }

    #[test]
    fn test_from_array_and_tuple() {
        let p: Point3 = [162, 817, 812].into();
        let q: Point3 = (162, 817, 812).into();
        assert_eq!(p, q);
        assert_eq!(<[i64; 3]>::from(p), [162, 817, 812]);
    }

    #[test]
    fn test_point3_like_trait() {
        fn accepts_like<P: Point3Like>(p: &P) -> i64 {
            p.x() + p.y() + p.z()
        }

        let pt = Point3::new(1, 2, 3);
        let arr = [1i64, 2, 3];
        let tuple = (1i64, 2i64, 3i64);

        assert_eq!(accepts_like(&pt), 6);
        assert_eq!(accepts_like(&arr), 6);
        assert_eq!(accepts_like(&tuple), 6);
        assert_eq!(Point3::from_like(&arr), pt);
    }

    #[test]
    #[cfg(feature = "glam")]
    fn test_point3_like_trait_glam() {
        let v = glam::I64Vec3::new(4, -5, 6);
        assert_eq!(Point3::from_like(&v), Point3::new(4, -5, 6));
        assert_eq!(Point3::from(v).to_glam(), v);
    }
}
