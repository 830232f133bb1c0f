//! 2D ray type.

use super::{Point2, Segment2, Vec2};
use crate::tolerance::tolerance;
use num_traits::Float;

/// A 2D ray defined by an origin point and direction.
///
/// The direction is stored as-is (not necessarily normalized). Unbounded
/// Voronoi edges are rays starting at a circumcenter.
///
/// # Example
///
/// ```
/// use planekit::{Point2, Ray2, Segment2, Vec2};
///
/// let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));
/// let wall = Segment2::new(Point2::new(5.0, -1.0), Point2::new(5.0, 1.0));
///
/// let (hit, t, _) = ray.intersect_segment(&wall).unwrap();
/// assert_eq!(hit, Point2::new(5.0, 0.0));
/// assert_eq!(t, 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ray2<F> {
    /// Origin point of the ray
    pub origin: Point2<F>,
    /// Direction vector (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray from `origin` passing through `through`.
    #[inline]
    pub fn from_points(origin: Point2<F>, through: Point2<F>) -> Self {
        Self::new(origin, through - origin)
    }

    /// Creates a ray with a unit direction, or `None` for a zero direction.
    pub fn normalized(origin: Point2<F>, direction: Vec2<F>) -> Option<Self> {
        direction.normalize().map(|d| Self::new(origin, d))
    }

    /// Returns the point at parameter `t` (`origin + t * direction`).
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Returns the ray parameter of the projection of `point` onto the supporting line.
    ///
    /// Returns zero for a degenerate direction.
    pub fn parameter_of(&self, point: Point2<F>) -> F {
        let len_sq = self.direction.magnitude_squared();
        if len_sq <= tolerance() {
            return F::zero();
        }
        (point - self.origin).dot(self.direction) / len_sq
    }

    /// Returns the closest point on the ray to `point` and its parameter (`>= 0`).
    pub fn closest_point(&self, point: Point2<F>) -> (Point2<F>, F) {
        let t = self.parameter_of(point).max(F::zero());
        (self.point_at(t), t)
    }

    /// Returns the squared distance from the ray to `point`.
    #[inline]
    pub fn distance_squared_to_point(&self, point: Point2<F>) -> F {
        point.distance_squared(self.closest_point(point).0)
    }

    /// Intersects this ray with a line segment.
    ///
    /// Returns `Some((point, t_ray, t_segment))` for a single crossing, or
    /// `None` when they miss or are parallel. Parameters are accepted within
    /// tolerance of their ranges.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Option<(Point2<F>, F, F)> {
        let seg_dir = segment.direction();
        if self.direction.is_parallel(seg_dir) {
            return None;
        }
        let cross = self.direction.cross(seg_dir);

        let delta = segment.start - self.origin;
        let t_ray = delta.cross(seg_dir) / cross;
        let t_seg = delta.cross(self.direction) / cross;

        let eps: F = tolerance();
        if t_ray >= -eps && t_seg >= -eps && t_seg <= F::one() + eps {
            Some((self.point_at(t_ray), t_ray, t_seg))
        } else {
            None
        }
    }

    /// Intersects this ray with another ray.
    ///
    /// Returns `Some((point, t_self, t_other))` for a single crossing in front
    /// of both origins; `None` if parallel or behind either origin.
    pub fn intersect_ray(&self, other: &Ray2<F>) -> Option<(Point2<F>, F, F)> {
        if self.direction.is_parallel(other.direction) {
            return None;
        }
        let cross = self.direction.cross(other.direction);

        let delta = other.origin - self.origin;
        let t_self = delta.cross(other.direction) / cross;
        let t_other = delta.cross(self.direction) / cross;

        let eps: F = tolerance();
        if t_self >= -eps && t_other >= -eps {
            Some((self.point_at(t_self), t_self, t_other))
        } else {
            None
        }
    }

    /// Returns a ray pointing in the opposite direction from the same origin.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.origin, -self.direction)
    }
}

impl<F: Float> PartialEq for Ray2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.direction == other.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_at() {
        let ray: Ray2<f64> = Ray2::new(Point2::new(1.0, 1.0), Vec2::new(2.0, 0.0));
        assert_eq!(ray.point_at(0.0), ray.origin);
        assert_eq!(ray.point_at(1.5), Point2::new(4.0, 1.0));
    }

    #[test]
    fn test_normalized() {
        let ray = Ray2::normalized(Point2::new(0.0_f64, 0.0), Vec2::new(0.0, 3.0)).unwrap();
        assert_relative_eq!(ray.direction.magnitude(), 1.0, epsilon = 1e-12);
        assert!(Ray2::normalized(Point2::new(0.0_f64, 0.0), Vec2::zero()).is_none());
    }

    #[test]
    fn test_closest_point_behind_origin() {
        let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));
        let (p, t) = ray.closest_point(Point2::new(-4.0, 3.0));
        assert_eq!(p, Point2::origin());
        assert_eq!(t, 0.0);
        assert_relative_eq!(ray.distance_squared_to_point(Point2::new(2.0, 3.0)), 9.0);
    }

    #[test]
    fn test_intersect_segment_miss_behind() {
        let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));
        let behind = Segment2::from_coords(-2.0, -1.0, -2.0, 1.0);
        assert!(ray.intersect_segment(&behind).is_none());
    }

    #[test]
    fn test_intersect_segment_parallel() {
        let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 0.0));
        let parallel = Segment2::from_coords(0.0, 1.0, 5.0, 1.0);
        assert!(ray.intersect_segment(&parallel).is_none());
    }

    #[test]
    fn test_intersect_segment_at_endpoint() {
        let ray: Ray2<f64> = Ray2::new(Point2::origin(), Vec2::new(1.0, 1.0));
        let seg = Segment2::from_coords(2.0, 2.0, 4.0, 0.0);
        let (p, _, t_seg) = ray.intersect_segment(&seg).unwrap();
        assert_eq!(p, Point2::new(2.0, 2.0));
        assert_relative_eq!(t_seg, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_ray() {
        let a: Ray2<f64> = Ray2::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Ray2::new(Point2::new(4.0, 0.0), Vec2::new(-1.0, 1.0));
        let (p, ta, tb) = a.intersect_ray(&b).unwrap();
        assert_eq!(p, Point2::new(2.0, 2.0));
        assert_relative_eq!(ta, 2.0, epsilon = 1e-12);
        assert_relative_eq!(tb, 2.0, epsilon = 1e-12);

        assert!(a.reversed().intersect_ray(&b).is_none());
    }
}
