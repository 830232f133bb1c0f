//! Polygon clipping against convex regions.
//!
//! Every routine here reduces to repeated half-plane clips: a polygon is cut
//! by a directed line and only the part on its left (inclusive, within
//! tolerance) survives. Clipping a polygon that already lies inside the region
//! returns the same vertex list, so clipping is idempotent.

use crate::bounds::Aabb2;
use crate::polygon::core::Polygon;
use crate::primitives::{Line2, Point2};
use crate::tolerance::tolerance;
use num_traits::Float;

/// Clips a polygon against a convex clipping polygon using Sutherland-Hodgman.
///
/// The clip polygon must be convex; either winding is accepted. The result is
/// a single polygon, empty if the subject lies entirely outside.
///
/// # Example
///
/// ```
/// use planekit::polygon::{Polygon, sutherland_hodgman};
/// use planekit::Point2;
///
/// let subject = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(3.0, 0.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(0.0, 3.0),
/// ]);
/// let clip = Polygon::new(vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(1.0, 2.0),
/// ]);
///
/// let result = sutherland_hodgman(&subject, &clip);
/// assert!((result.area() - 1.0_f64).abs() < 1e-9);
/// ```
pub fn sutherland_hodgman<F: Float>(subject: &Polygon<F>, clip: &Polygon<F>) -> Polygon<F> {
    if subject.is_empty() || clip.len() < 3 {
        return Polygon::empty();
    }

    let mut region = clip.clone();
    region.ensure_ccw();

    let mut output = subject.clone();
    for edge in region.edges() {
        if output.is_empty() {
            break;
        }
        output = clip_half_plane(&output, &Line2::from_segment(&edge));
    }

    output
}

/// Clips a polygon to an axis-aligned box (four half-plane clips).
pub fn clip_to_aabb<F: Float>(subject: &Polygon<F>, bbox: &Aabb2<F>) -> Polygon<F> {
    sutherland_hodgman(subject, &bbox.to_polygon())
}

/// Keeps the part of `subject` on the left of `line` (boundary inclusive).
///
/// Crossing points are interpolated from the signed side values of the edge
/// endpoints. Consecutive vertices that coincide within tolerance are merged.
pub fn clip_half_plane<F: Float>(subject: &Polygon<F>, line: &Line2<F>) -> Polygon<F> {
    let input = &subject.vertices;
    let n = input.len();
    if n == 0 {
        return Polygon::empty();
    }

    let len = line.direction.magnitude();
    if len <= tolerance() {
        return subject.clone();
    }
    let eps: F = tolerance();
    let side = |p: Point2<F>| line.side(p) / len;

    let mut output: Vec<Point2<F>> = Vec::with_capacity(n + 1);
    for j in 0..n {
        let current = input[j];
        let next = input[(j + 1) % n];
        let d_current = side(current);
        let d_next = side(next);
        let current_inside = d_current >= -eps;
        let next_inside = d_next >= -eps;

        if current_inside {
            push_distinct(&mut output, current);
            if !next_inside && d_current > eps {
                push_distinct(&mut output, crossing(current, next, d_current, d_next));
            }
        } else if next_inside && d_next > eps {
            push_distinct(&mut output, crossing(current, next, d_current, d_next));
        }
    }

    if output.len() > 1 && output[0] == output[output.len() - 1] {
        output.pop();
    }

    Polygon::new(output)
}

/// Point where the edge `a → b` crosses the line, given their signed distances.
#[inline]
fn crossing<F: Float>(a: Point2<F>, b: Point2<F>, da: F, db: F) -> Point2<F> {
    a.lerp(b, da / (da - db))
}

#[inline]
fn push_distinct<F: Float>(out: &mut Vec<Point2<F>>, p: Point2<F>) {
    if out.last() != Some(&p) {
        out.push(p);
    }
}
