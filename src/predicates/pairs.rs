//! Closed-form intersection tests for every pair of shapes.
//!
//! All shapes are closed point sets: touching counts as intersecting. Every
//! test is total; degenerate inputs (zero-length segments, zero directions,
//! empty polygons) fall back to the point or collinear case and never panic.

use super::orientation::{orient2d, point_on_segment, Orientation};
use super::sweep::polygon_polygon_sweep;
use crate::bounds::Aabb2;
use crate::polygon::Polygon;
use crate::primitives::{Line2, Ray2, Segment2, Vec2};
use crate::tolerance::tolerance;
use num_traits::Float;

/// A borrowed view of any shape accepted by [`intersect`].
#[derive(Debug, Clone, Copy)]
pub enum Shape2<'a, F> {
    Segment(Segment2<F>),
    Ray(Ray2<F>),
    Line(Line2<F>),
    Aabb(Aabb2<F>),
    Polygon(&'a Polygon<F>),
}

/// Tests whether two shapes share at least one point.
///
/// # Example
///
/// ```
/// use planekit::predicates::{intersect, Shape2};
/// use planekit::{Line2, Point2, Segment2, Vec2};
///
/// let seg = Segment2::new(Point2::new(0.0_f64, -1.0), Point2::new(0.0, 1.0));
/// let line = Line2::new(Point2::new(-5.0, 0.0), Vec2::new(1.0, 0.0));
/// assert!(intersect(&Shape2::Segment(seg), &Shape2::Line(line)));
/// ```
pub fn intersect<F: Float>(a: &Shape2<'_, F>, b: &Shape2<'_, F>) -> bool {
    use Shape2::*;
    match (a, b) {
        (Segment(s1), Segment(s2)) => segment_segment(s1, s2),
        (Segment(s), Ray(r)) | (Ray(r), Segment(s)) => segment_ray(s, r),
        (Segment(s), Line(l)) | (Line(l), Segment(s)) => segment_line(s, l),
        (Segment(s), Aabb(b)) | (Aabb(b), Segment(s)) => aabb_segment(b, s),
        (Segment(s), Polygon(p)) | (Polygon(p), Segment(s)) => polygon_segment(p, s),
        (Ray(r1), Ray(r2)) => ray_ray(r1, r2),
        (Ray(r), Line(l)) | (Line(l), Ray(r)) => ray_line(r, l),
        (Ray(r), Aabb(b)) | (Aabb(b), Ray(r)) => aabb_ray(b, r),
        (Ray(r), Polygon(p)) | (Polygon(p), Ray(r)) => polygon_ray(p, r),
        (Line(l1), Line(l2)) => line_line(l1, l2),
        (Line(l), Aabb(b)) | (Aabb(b), Line(l)) => aabb_line(b, l),
        (Line(l), Polygon(p)) | (Polygon(p), Line(l)) => polygon_line(p, l),
        (Aabb(b1), Aabb(b2)) => aabb_aabb(b1, b2),
        (Aabb(b), Polygon(p)) | (Polygon(p), Aabb(b)) => aabb_polygon(b, p),
        (Polygon(p1), Polygon(p2)) => polygon_polygon(p1, p2),
    }
}

/// Segment against segment, by the four orientation tests.
pub fn segment_segment<F: Float>(s1: &Segment2<F>, s2: &Segment2<F>) -> bool {
    let eps: F = tolerance();
    let o1 = orient2d(s1.start, s1.end, s2.start, eps);
    let o2 = orient2d(s1.start, s1.end, s2.end, eps);
    let o3 = orient2d(s2.start, s2.end, s1.start, eps);
    let o4 = orient2d(s2.start, s2.end, s1.end, eps);

    let proper = o1 != o2
        && o3 != o4
        && o1 != Orientation::Collinear
        && o2 != Orientation::Collinear
        && o3 != Orientation::Collinear
        && o4 != Orientation::Collinear;
    if proper {
        return true;
    }

    // Touching or collinear: some endpoint lies on the other segment.
    point_on_segment(s2.start, *s1, eps)
        || point_on_segment(s2.end, *s1, eps)
        || point_on_segment(s1.start, *s2, eps)
        || point_on_segment(s1.end, *s2, eps)
}

/// Segment against ray.
pub fn segment_ray<F: Float>(s: &Segment2<F>, r: &Ray2<F>) -> bool {
    let eps: F = tolerance();
    if is_zero(r.direction) {
        return s.contains(r.origin);
    }
    if s.is_degenerate() {
        return r.distance_squared_to_point(s.start) <= eps * eps;
    }

    if r.direction.is_parallel(s.direction()) {
        // Parallel: must be collinear, then compare projections on the ray.
        let line = Line2::new(r.origin, r.direction);
        if !line.contains(s.start) {
            return false;
        }
        return r.parameter_of(s.start).max(r.parameter_of(s.end)) >= -eps;
    }

    r.intersect_segment(s).is_some()
}

/// Segment against infinite line: the endpoints are not strictly on the same side.
pub fn segment_line<F: Float>(s: &Segment2<F>, l: &Line2<F>) -> bool {
    if is_zero(l.direction) {
        return s.contains(l.origin);
    }
    let eps: F = tolerance();
    let d1 = l.signed_distance(s.start);
    let d2 = l.signed_distance(s.end);
    d1.min(d2) <= eps && d1.max(d2) >= -eps
}

/// Ray against ray.
pub fn ray_ray<F: Float>(r1: &Ray2<F>, r2: &Ray2<F>) -> bool {
    let eps: F = tolerance();
    if is_zero(r1.direction) {
        return r2.distance_squared_to_point(r1.origin) <= eps * eps;
    }
    if is_zero(r2.direction) {
        return r1.distance_squared_to_point(r2.origin) <= eps * eps;
    }

    if r1.direction.is_parallel(r2.direction) {
        if !Line2::new(r1.origin, r1.direction).contains(r2.origin) {
            return false;
        }
        // Same heading always overlaps far out; opposite headings overlap
        // only when they face each other.
        return r1.direction.dot(r2.direction) > F::zero() || r1.parameter_of(r2.origin) >= -eps;
    }

    r1.intersect_ray(r2).is_some()
}

/// Ray against infinite line.
pub fn ray_line<F: Float>(r: &Ray2<F>, l: &Line2<F>) -> bool {
    if is_zero(l.direction) {
        return r.distance_squared_to_point(l.origin) <= tolerance::<F>() * tolerance::<F>();
    }
    let side = l.signed_distance(r.origin);
    if side.abs() <= tolerance() {
        return true;
    }
    // Rate at which the side value changes along the ray.
    let approach = l.direction.cross(r.direction);
    side * approach < F::zero()
}

/// Line against line: only distinct parallel lines miss.
pub fn line_line<F: Float>(l1: &Line2<F>, l2: &Line2<F>) -> bool {
    if is_zero(l1.direction) {
        return segment_line(&Segment2::new(l1.origin, l1.origin), l2);
    }
    if is_zero(l2.direction) {
        return segment_line(&Segment2::new(l2.origin, l2.origin), l1);
    }
    !l1.is_parallel(l2) || l1.contains(l2.origin)
}

/// Box against box.
#[inline]
pub fn aabb_aabb<F: Float>(a: &Aabb2<F>, b: &Aabb2<F>) -> bool {
    a.intersects(*b)
}

/// Box against segment, by the slab test restricted to `[0, 1]`.
pub fn aabb_segment<F: Float>(b: &Aabb2<F>, s: &Segment2<F>) -> bool {
    match b.line_parameter_range(s.start, s.direction()) {
        Some((t0, t1)) => t0 <= F::one() && t1 >= F::zero(),
        None => false,
    }
}

/// Box against ray.
pub fn aabb_ray<F: Float>(b: &Aabb2<F>, r: &Ray2<F>) -> bool {
    match b.line_parameter_range(r.origin, r.direction) {
        Some((_, t1)) => t1 >= F::zero(),
        None => false,
    }
}

/// Box against infinite line.
pub fn aabb_line<F: Float>(b: &Aabb2<F>, l: &Line2<F>) -> bool {
    b.line_parameter_range(l.origin, l.direction).is_some()
}

/// Box against polygon: an edge reaches the box or the polygon covers it.
pub fn aabb_polygon<F: Float>(b: &Aabb2<F>, p: &Polygon<F>) -> bool {
    match p.bounding_box() {
        Some(pb) if pb.intersects(*b) => {}
        _ => return false,
    }
    outline(p).iter().any(|e| aabb_segment(b, e)) || p.contains(b.center())
}

/// Polygon against segment.
pub fn polygon_segment<F: Float>(p: &Polygon<F>, s: &Segment2<F>) -> bool {
    outline(p).iter().any(|e| segment_segment(e, s)) || p.contains(s.start)
}

/// Polygon against ray.
pub fn polygon_ray<F: Float>(p: &Polygon<F>, r: &Ray2<F>) -> bool {
    outline(p).iter().any(|e| segment_ray(e, r)) || p.contains(r.origin)
}

/// Polygon against infinite line. A line cannot fit inside a polygon, so only
/// the boundary is tested.
pub fn polygon_line<F: Float>(p: &Polygon<F>, l: &Line2<F>) -> bool {
    outline(p).iter().any(|e| segment_line(e, l))
}

/// Polygon against polygon.
///
/// Rejects on disjoint bounding boxes. Two convex polygons are compared edge
/// against edge; anything else goes through a sweep line. Containment of one
/// polygon in the other is checked last.
pub fn polygon_polygon<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    let (ba, bb) = match (a.bounding_box(), b.bounding_box()) {
        (Some(ba), Some(bb)) => (ba, bb),
        _ => return false,
    };
    if !ba.intersects(bb) {
        return false;
    }

    if a.is_convex() && b.is_convex() {
        let ea = outline(a);
        let eb = outline(b);
        if ea.iter().any(|e| eb.iter().any(|f| segment_segment(e, f))) {
            return true;
        }
        return a.contains(b.vertices[0]) || b.contains(a.vertices[0]);
    }

    polygon_polygon_sweep(a, b)
}

/// The polygon's boundary as segments; a single vertex becomes a point segment.
pub(crate) fn outline<F: Float>(p: &Polygon<F>) -> Vec<Segment2<F>> {
    match p.vertices.as_slice() {
        [] => Vec::new(),
        [v] => vec![Segment2::new(*v, *v)],
        _ => p.edges().collect(),
    }
}

#[inline]
fn is_zero<F: Float>(v: Vec2<F>) -> bool {
    v.magnitude_squared() <= tolerance::<F>() * tolerance::<F>()
}
