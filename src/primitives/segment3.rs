//! 3D line segment type.

use super::{Point3, Vec3};
use crate::tolerance::tolerance;
use num_traits::Float;

/// A 3D line segment defined by two endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Segment3<F> {
    pub start: Point3<F>,
    pub end: Point3<F>,
}

impl<F: Float> Segment3<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point3<F>, end: Point3<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec3<F> {
        self.end - self.start
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// Returns `(closest_point, t)` with `t` clamped to `[0, 1]`.
    pub fn closest_point(self, p: Point3<F>) -> (Point3<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();
        if len_sq <= tolerance() {
            return (self.start, F::zero());
        }

        let t = ((p - self.start).dot(v) / len_sq).max(F::zero()).min(F::one());
        (self.start.lerp(self.end, t), t)
    }
}

impl<F: Float> PartialEq for Segment3<F> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}
