//! 2D infinite line type.

use super::{Point2, Segment2, Vec2};
use crate::error::GeomError;
use crate::tolerance::tolerance;
use num_traits::Float;

/// A 2D infinite line defined by a point and direction.
///
/// # Example
///
/// ```
/// use planekit::{Line2, Point2, Vec2};
///
/// // Horizontal line through y=1
/// let line: Line2<f64> = Line2::new(Point2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
/// assert_eq!(line.signed_distance(Point2::new(5.0, 3.0)), 2.0);
/// assert_eq!(line.signed_distance(Point2::new(5.0, -1.0)), -2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Line2<F> {
    /// A point on the line
    pub origin: Point2<F>,
    /// Direction vector of the line (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a new line from a point and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a line passing through two points.
    ///
    /// Coincident points give a degenerate line; see [`Line2::try_from_points`].
    #[inline]
    pub fn from_points(p1: Point2<F>, p2: Point2<F>) -> Self {
        Self::new(p1, p2 - p1)
    }

    /// Creates a line through two points, rejecting coincident points.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DegenerateInput`] if the points are equal within tolerance.
    pub fn try_from_points(p1: Point2<F>, p2: Point2<F>) -> Result<Self, GeomError> {
        if p1 == p2 {
            return Err(GeomError::DegenerateInput);
        }
        Ok(Self::from_points(p1, p2))
    }

    /// Creates the line supporting a segment.
    #[inline]
    pub fn from_segment(segment: &Segment2<F>) -> Self {
        Self::new(segment.start, segment.direction())
    }

    /// Creates a vertical line at the given x-coordinate.
    #[inline]
    pub fn vertical(x: F) -> Self {
        Self::new(Point2::new(x, F::zero()), Vec2::unit_y())
    }

    /// Creates a horizontal line at the given y-coordinate.
    #[inline]
    pub fn horizontal(y: F) -> Self {
        Self::new(Point2::new(F::zero(), y), Vec2::unit_x())
    }

    /// Returns the point on the line at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Projects `point` onto the line, returning `(closest_point, t)`.
    pub fn project(&self, point: Point2<F>) -> (Point2<F>, F) {
        let len_sq = self.direction.magnitude_squared();
        if len_sq <= tolerance() {
            return (self.origin, F::zero());
        }

        let t = (point - self.origin).dot(self.direction) / len_sq;
        (self.point_at(t), t)
    }

    /// Returns the closest point on the line to `point`.
    #[inline]
    pub fn closest_point(&self, point: Point2<F>) -> Point2<F> {
        self.project(point).0
    }

    /// Cross product of the direction with `origin → point`.
    ///
    /// Positive when `point` is to the left of the line, negative to the
    /// right, zero on it. Not normalized.
    #[inline]
    pub fn side(&self, point: Point2<F>) -> F {
        self.direction.cross(point - self.origin)
    }

    /// Returns the signed Euclidean distance from `point` (positive on the left).
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        let len = self.direction.magnitude();
        if len <= tolerance() {
            return self.origin.distance(point);
        }
        self.side(point) / len
    }

    /// Returns `true` if `point` lies on the line within tolerance.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.signed_distance(point).abs() <= tolerance()
    }

    /// Returns `true` if the lines have parallel directions.
    #[inline]
    pub fn is_parallel(&self, other: &Line2<F>) -> bool {
        self.direction.is_parallel(other.direction)
    }

    /// Intersects this line with another line.
    ///
    /// Returns `Some((point, t_self, t_other))`, or `None` if parallel.
    pub fn intersect_line(&self, other: &Line2<F>) -> Option<(Point2<F>, F, F)> {
        if self.is_parallel(other) {
            return None;
        }
        let cross = self.direction.cross(other.direction);

        let delta = other.origin - self.origin;
        let t_self = delta.cross(other.direction) / cross;
        let t_other = delta.cross(self.direction) / cross;

        Some((self.point_at(t_self), t_self, t_other))
    }
}

impl<F: Float> PartialEq for Line2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.direction == other.direction
    }
}
