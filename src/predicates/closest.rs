//! Closest-point queries.

use crate::primitives::{Point2, Point3, Segment2, Segment3, Triangle2};
use num_traits::Float;

/// Projects `p` onto the segment, clamping the parameter to `[0, 1]`.
#[inline]
pub fn closest_point_on_segment<F: Float>(p: Point2<F>, segment: &Segment2<F>) -> Point2<F> {
    segment.closest_point(p).0
}

/// Three-dimensional counterpart of [`closest_point_on_segment`].
#[inline]
pub fn closest_point_on_segment3<F: Float>(p: Point3<F>, segment: &Segment3<F>) -> Point3<F> {
    segment.closest_point(p).0
}

/// Closest point of a (filled) triangle to `p`.
///
/// Returns `p` itself when it lies inside or on the triangle, otherwise the
/// nearest of the three edge projections.
///
/// ```
/// use planekit::predicates::closest_point_on_triangle;
/// use planekit::{Point2, Triangle2};
///
/// let tri = Triangle2::new(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(0.0, 4.0),
/// );
/// assert_eq!(closest_point_on_triangle(Point2::new(2.0, -3.0), &tri), Point2::new(2.0, 0.0));
/// ```
pub fn closest_point_on_triangle<F: Float>(p: Point2<F>, triangle: &Triangle2<F>) -> Point2<F> {
    if triangle.contains(p) {
        return p;
    }

    (0..3)
        .map(|i| closest_point_on_segment(p, &triangle.edge(i)))
        .fold(None, |best: Option<(Point2<F>, F)>, q| {
            let d = p.distance_squared(q);
            match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((q, d)),
            }
        })
        .map_or(p, |(q, _)| q)
}
