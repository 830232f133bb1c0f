//! 2D line segment type.

use super::{Point2, Vec2};
use crate::bounds::Aabb2;
use crate::tolerance::tolerance;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Segments are directed (`start` → `end`) for parametrisation, but every
/// predicate in [`crate::predicates`] treats them as closed point sets.
#[derive(Debug, Clone, Copy)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t` (`0` = start, `1` = end).
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the segment with start and end swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// Projects `p` onto the supporting line and clamps the parameter to
    /// `[0, 1]`. Returns `(closest_point, t)`.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        if len_sq <= tolerance() {
            return (self.start, F::zero());
        }

        let t = ((p - self.start).dot(v) / len_sq).max(F::zero()).min(F::one());
        (self.point_at(t), t)
    }

    /// Computes the squared distance from `p` to this segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        p.distance_squared(self.closest_point(p).0)
    }

    /// Computes the distance from `p` to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }

    /// Returns `true` if `p` lies on the segment within tolerance.
    #[inline]
    pub fn contains(self, p: Point2<F>) -> bool {
        self.distance_to_point(p) <= tolerance()
    }

    /// Returns `true` if both endpoints coincide within tolerance.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Returns the axis-aligned bounding box of the segment.
    #[inline]
    pub fn bounding_box(self) -> Aabb2<F> {
        Aabb2::from_corners(self.start, self.end)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

impl<F: Float> PartialEq for Segment2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}
