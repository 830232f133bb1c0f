//! 2D triangle type.

use super::{Point2, Segment2};
use crate::tolerance::{lit, tolerance};
use num_traits::Float;

/// A triangle given by three vertices.
///
/// The vertices need not be counter-clockwise; [`Triangle2::area`] is signed
/// and [`Triangle2::contains`] works for either winding. Two triangles are equal
/// when one's vertex sequence is a cyclic rotation of the other's.
///
/// # Example
///
/// ```
/// use planekit::{Point2, Triangle2};
///
/// let tri = Triangle2::new(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// );
/// assert_eq!(tri.circumcenter(), Point2::new(1.0, 1.0));
/// assert!(tri.circumcircle_contains(Point2::new(2.0, 2.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Triangle2<F> {
    pub vertices: [Point2<F>; 3],
}

impl<F: Float> Triangle2<F> {
    /// Creates a triangle from three vertices.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Signed area: positive for counter-clockwise vertices.
    #[inline]
    pub fn area(&self) -> F {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a) / lit(2.0)
    }

    /// Absolute area.
    #[inline]
    pub fn area_abs(&self) -> F {
        self.area().abs()
    }

    /// Returns `true` for counter-clockwise winding.
    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.area() > F::zero()
    }

    /// Returns `true` when the vertices are collinear within tolerance.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a).abs() <= tolerance()
    }

    /// Returns the center of mass.
    pub fn centroid(&self) -> Point2<F> {
        let [a, b, c] = self.vertices;
        let three = lit::<F>(3.0);
        Point2::new((a.x + b.x + c.x) / three, (a.y + b.y + c.y) / three)
    }

    /// Returns the sum of the edge lengths.
    pub fn perimeter(&self) -> F {
        let [a, b, c] = self.vertices;
        a.distance(b) + b.distance(c) + c.distance(a)
    }

    /// Returns the center of the circle through all three vertices.
    ///
    /// Computed relative to the first vertex to limit cancellation. A
    /// degenerate triangle has no circumcircle; its centroid is returned.
    pub fn circumcenter(&self) -> Point2<F> {
        let [a, b, c] = self.vertices;
        let ab = b - a;
        let ac = c - a;
        let d = lit::<F>(2.0) * ab.cross(ac);

        if d.abs() <= tolerance() {
            return self.centroid();
        }

        let ab_sq = ab.magnitude_squared();
        let ac_sq = ac.magnitude_squared();
        let ux = (ac.y * ab_sq - ab.y * ac_sq) / d;
        let uy = (ab.x * ac_sq - ac.x * ab_sq) / d;

        Point2::new(a.x + ux, a.y + uy)
    }

    /// Returns the squared circumradius.
    #[inline]
    pub fn circumradius_squared(&self) -> F {
        self.circumcenter().distance_squared(self.vertices[0])
    }

    /// Returns the circumradius.
    #[inline]
    pub fn circumradius(&self) -> F {
        self.circumradius_squared().sqrt()
    }

    /// Tests whether `p` lies inside or on the circumcircle.
    ///
    /// Inclusive by [`TOLERANCE`](crate::tolerance::TOLERANCE)
    /// (`dist² < r² + TOLERANCE`), so cocircular points are treated
    /// consistently. Degenerate triangles contain nothing.
    pub fn circumcircle_contains(&self, p: Point2<F>) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let center = self.circumcenter();
        center.distance_squared(p) < center.distance_squared(self.vertices[0]) + tolerance()
    }

    /// Tests whether `p` lies strictly inside the circumcircle
    /// (`dist² < r² - TOLERANCE`).
    pub fn circumcircle_strictly_contains(&self, p: Point2<F>) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let center = self.circumcenter();
        center.distance_squared(p) < center.distance_squared(self.vertices[0]) - tolerance()
    }

    /// Returns the center of the inscribed circle.
    pub fn incenter(&self) -> Point2<F> {
        let [a, b, c] = self.vertices;
        let la = b.distance(c);
        let lb = c.distance(a);
        let lc = a.distance(b);
        let sum = la + lb + lc;

        if sum <= tolerance() {
            return a;
        }

        Point2::new(
            (la * a.x + lb * b.x + lc * c.x) / sum,
            (la * a.y + lb * b.y + lc * c.y) / sum,
        )
    }

    /// Returns the radius of the inscribed circle.
    pub fn inradius(&self) -> F {
        let perimeter = self.perimeter();
        if perimeter <= tolerance() {
            return F::zero();
        }
        lit::<F>(2.0) * self.area_abs() / perimeter
    }

    /// Tests whether `p` lies inside or on the boundary, for either winding.
    pub fn contains(&self, p: Point2<F>) -> bool {
        let [a, b, c] = self.vertices;
        let eps: F = tolerance();
        let d1 = (b - a).cross(p - a);
        let d2 = (c - b).cross(p - b);
        let d3 = (a - c).cross(p - c);

        let has_neg = d1 < -eps || d2 < -eps || d3 < -eps;
        let has_pos = d1 > eps || d2 > eps || d3 > eps;
        !(has_neg && has_pos)
    }

    /// Returns edge `i`, running from vertex `i` to vertex `i + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    pub fn edge(&self, i: usize) -> Segment2<F> {
        assert!(i < 3, "triangle edge index {i} out of range");
        Segment2::new(self.vertices[i], self.vertices[(i + 1) % 3])
    }

    /// Returns the vertex not on edge `edge_idx`.
    ///
    /// # Panics
    ///
    /// Panics if `edge_idx >= 3`.
    pub fn opposite_vertex(&self, edge_idx: usize) -> Point2<F> {
        assert!(edge_idx < 3, "triangle edge index {edge_idx} out of range");
        self.vertices[(edge_idx + 2) % 3]
    }

    /// Returns the edge shared with `other`, if any (endpoints in `self`'s order).
    pub fn shared_edge(&self, other: &Triangle2<F>) -> Option<Segment2<F>> {
        for i in 0..3 {
            let e = self.edge(i);
            for j in 0..3 {
                let o = other.edge(j);
                let same = e.start == o.start && e.end == o.end;
                let reversed = e.start == o.end && e.end == o.start;
                if same || reversed {
                    return Some(e);
                }
            }
        }
        None
    }

    /// Returns `true` if the triangles share an edge.
    #[inline]
    pub fn shares_edge(&self, other: &Triangle2<F>) -> bool {
        self.shared_edge(other).is_some()
    }
}

impl<F: Float> PartialEq for Triangle2<F> {
    fn eq(&self, other: &Self) -> bool {
        (0..3).any(|shift| (0..3).all(|i| self.vertices[i] == other.vertices[(i + shift) % 3]))
    }
}
