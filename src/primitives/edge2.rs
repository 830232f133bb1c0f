//! Undirected 2D edge type.

use super::{Line2, Point2, Segment2, Vec2};
use crate::tolerance::tolerance;
use num_traits::Float;
use std::hash::{Hash, Hasher};

/// An unordered pair of endpoints.
///
/// `Edge2::new(a, b) == Edge2::new(b, a)`, and both hash identically: each
/// endpoint is hashed on its own and the two results are combined with a
/// commutative operation. Coordinates are snapped to a grid of
/// [`TOLERANCE`](crate::tolerance::TOLERANCE) before hashing so that edges
/// equal under the tolerance almost always land in the same bucket; a
/// coordinate sitting exactly on a grid boundary can still split
/// tolerance-equal edges.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use planekit::{Edge2, Point2};
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 2.0);
///
/// let mut set = HashSet::new();
/// set.insert(Edge2::new(a, b));
/// assert!(set.contains(&Edge2::new(b, a)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge2<F> {
    pub p1: Point2<F>,
    pub p2: Point2<F>,
}

impl<F: Float> Edge2<F> {
    /// Creates an edge between two points.
    #[inline]
    pub fn new(p1: Point2<F>, p2: Point2<F>) -> Self {
        Self { p1, p2 }
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(&self) -> F {
        self.p1.distance_squared(self.p2)
    }

    /// Length.
    #[inline]
    pub fn length(&self) -> F {
        self.p1.distance(self.p2)
    }

    /// Midpoint.
    #[inline]
    pub fn midpoint(&self) -> Point2<F> {
        self.p1.midpoint(self.p2)
    }

    /// Vector from `p1` to `p2`.
    #[inline]
    pub fn direction(&self) -> Vec2<F> {
        self.p2 - self.p1
    }

    /// The line of points equidistant from both endpoints.
    ///
    /// Its direction is the edge direction rotated counter-clockwise.
    #[inline]
    pub fn perpendicular_bisector(&self) -> Line2<F> {
        Line2::new(self.midpoint(), self.direction().perpendicular())
    }

    /// Returns `true` if `p` lies on the edge within tolerance.
    #[inline]
    pub fn contains(&self, p: Point2<F>) -> bool {
        self.to_segment().contains(p)
    }

    /// Returns the edge as a segment from `p1` to `p2`.
    #[inline]
    pub fn to_segment(&self) -> Segment2<F> {
        Segment2::new(self.p1, self.p2)
    }
}

impl<F: Float> PartialEq for Edge2<F> {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl<F: Float> Eq for Edge2<F> {}

impl<F: Float> Hash for Edge2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = point_key(self.p1).wrapping_add(point_key(self.p2));
        combined.hash(state);
    }
}

impl<F: Float> From<Segment2<F>> for Edge2<F> {
    fn from(segment: Segment2<F>) -> Self {
        Self::new(segment.start, segment.end)
    }
}

/// Hashes one endpoint's tolerance-grid cell into a `u64`.
fn point_key<F: Float>(p: Point2<F>) -> u64 {
    let cell = |v: F| -> i64 {
        (v / tolerance::<F>())
            .round()
            .to_i64()
            .unwrap_or(if v > F::zero() { i64::MAX } else { i64::MIN })
    };
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    (cell(p.x), cell(p.y)).hash(&mut hasher);
    hasher.finish()
}
