//! Orientation and segment predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Twice the signed area of the triangle `abc`.
///
/// Positive when `c` is left of `a → b` (counter-clockwise), negative when
/// right, zero when collinear.
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Classifies the orientation of three points.
///
/// `eps` is compared against the absolute value of [`orientation`] (twice
/// the signed area); anything within it is `Collinear`.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = orientation(a, b, c);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `p` is within distance `eps` of the segment.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// Result of a segment intersection query.
#[derive(Debug, Clone, Copy)]
pub enum SegmentIntersection<F> {
    /// Segments do not intersect.
    None,
    /// Segments meet at a single point.
    Point {
        point: Point2<F>,
        /// Parameter along the first segment (0 = start, 1 = end).
        t1: F,
        /// Parameter along the second segment.
        t2: F,
    },
    /// Segments are collinear and share a stretch.
    Overlapping { start: Point2<F>, end: Point2<F> },
}

impl<F: Float> PartialEq for SegmentIntersection<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (
                Self::Point { point, t1, t2 },
                Self::Point {
                    point: p,
                    t1: u1,
                    t2: u2,
                },
            ) => point == p && t1 == u1 && t2 == u2,
            (
                Self::Overlapping { start, end },
                Self::Overlapping { start: s, end: e },
            ) => start == s && end == e,
            _ => false,
        }
    }
}

/// Computes where two segments meet, with tolerance.
///
/// Unlike [`segment_segment`](super::segment_segment) this reports the
/// location of the contact, at the cost of a few more divisions.
pub fn segments_intersect<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> SegmentIntersection<F> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let cross = d1.cross(d2);
    let d = s2.start - s1.start;
    let eps_sq = eps * eps;

    if cross.abs() <= eps {
        if s1.distance_squared_to_point(s2.start) > eps_sq
            && s1.distance_squared_to_point(s2.end) > eps_sq
        {
            return SegmentIntersection::None;
        }

        let len_sq = d1.magnitude_squared();
        if len_sq <= eps_sq {
            return if point_on_segment(s1.start, s2, eps) {
                SegmentIntersection::Point {
                    point: s1.start,
                    t1: F::zero(),
                    t2: s2.closest_point(s1.start).1,
                }
            } else {
                SegmentIntersection::None
            };
        }

        // Project s2 onto s1's parametrisation and intersect with [0, 1].
        let t_start = d.dot(d1) / len_sq;
        let t_end = (s2.end - s1.start).dot(d1) / len_sq;
        let (t_min, t_max) = if t_start <= t_end {
            (t_start, t_end)
        } else {
            (t_end, t_start)
        };

        let lo = t_min.max(F::zero());
        let hi = t_max.min(F::one());

        if lo > hi + eps {
            return SegmentIntersection::None;
        }
        if (hi - lo).abs() <= eps {
            let point = s1.point_at(lo);
            return SegmentIntersection::Point {
                point,
                t1: lo,
                t2: s2.closest_point(point).1,
            };
        }
        return SegmentIntersection::Overlapping {
            start: s1.point_at(lo),
            end: s1.point_at(hi),
        };
    }

    let t1 = d.cross(d2) / cross;
    let t2 = d.cross(d1) / cross;

    let lo = -eps;
    let hi = F::one() + eps;
    if t1 >= lo && t1 <= hi && t2 >= lo && t2 <= hi {
        let t1 = t1.max(F::zero()).min(F::one());
        SegmentIntersection::Point {
            point: s1.point_at(t1),
            t1,
            t2: t2.max(F::zero()).min(F::one()),
        }
    } else {
        SegmentIntersection::None
    }
}
