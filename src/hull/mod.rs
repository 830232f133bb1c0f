//! Convex hull by Andrew's monotone chain.
//!
//! # Example
//!
//! ```
//! use planekit::hull::convex_hull;
//! use planekit::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // interior
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points);
//! assert_eq!(hull.len(), 4);
//! ```

use crate::primitives::{Point2, Segment2};
use crate::tolerance::tolerance;
use num_traits::Float;

/// Computes the convex hull of a set of points.
///
/// Returns the hull vertices in counter-clockwise order, starting from the
/// lexicographically smallest point, without repeating the first point at
/// the end. Points lying on a hull edge are not hull vertices. Collinear
/// input yields its two extreme points; a single point yields itself.
///
/// Runs in O(n log n).
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    convex_hull_indices(points)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Computes the convex hull and returns indices into `points`, CCW.
///
/// Duplicate points contribute a single index.
///
/// ```
/// use planekit::hull::convex_hull_indices;
/// use planekit::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 0.5),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// assert_eq!(convex_hull_indices(&points), vec![0, 1, 3, 4]);
/// ```
pub fn convex_hull_indices<F: Float>(points: &[Point2<F>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].lexicographic_cmp(&points[b]));
    order.dedup_by(|a, b| points[*a] == points[*b]);

    if order.len() < 3 {
        return order;
    }

    let eps: F = tolerance();
    let turns_left = |chain: &[usize], p: usize| {
        let o = points[chain[chain.len() - 2]];
        let a = points[chain[chain.len() - 1]];
        (a - o).cross(points[p] - o) > eps
    };

    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &i in &order {
        while lower.len() >= 2 && !turns_left(&lower, i) {
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order.iter().rev() {
        while upper.len() >= 2 && !turns_left(&upper, i) {
            upper.pop();
        }
        upper.push(i);
    }

    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Returns `true` if `point` lies inside or on a CCW convex hull.
pub fn point_in_convex_hull<F: Float>(hull: &[Point2<F>], point: Point2<F>) -> bool {
    match hull.len() {
        0 => false,
        1 => hull[0] == point,
        2 => Segment2::new(hull[0], hull[1]).contains(point),
        n => (0..n).all(|i| {
            let a = hull[i];
            let b = hull[(i + 1) % n];
            (b - a).cross(point - a) >= -tolerance::<F>()
        }),
    }
}

/// Returns `true` if `point` lies on the boundary of a CCW convex hull.
///
/// For a degenerate hull (a point or a segment) every point of the hull is on
/// its boundary.
pub fn point_on_hull_boundary<F: Float>(hull: &[Point2<F>], point: Point2<F>) -> bool {
    match hull.len() {
        0 => false,
        1 => hull[0] == point,
        n => (0..n).any(|i| Segment2::new(hull[i], hull[(i + 1) % n]).contains(point)),
    }
}
