//! Core polygon type and basic measurements.

use crate::bounds::Aabb2;
use crate::predicates::segment_segment;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{lit, tolerance};
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Voronoi cells and clipped boxes are always produced counter-clockwise.
#[derive(Debug, Clone)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    ///
    /// Counter-clockwise input gives a positive signed area.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Signed area by the shoelace formula; positive for CCW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the area centroid, or `None` for a degenerate polygon.
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(&self.vertices)
    }

    /// Tests if a point is inside the polygon (ray casting).
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    pub fn is_convex(&self) -> bool {
        polygon_is_convex(&self.vertices)
    }

    /// Returns `true` for clockwise winding (negative signed area).
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < F::zero()
    }

    /// Returns `true` if no two non-adjacent edges touch or cross.
    ///
    /// Brute force over edge pairs, O(n²).
    pub fn is_simple(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let edges: Vec<Segment2<F>> = self.edges().collect();
        for i in 0..n {
            if edges[i].is_degenerate() {
                return false;
            }
            for j in (i + 1)..n {
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                if adjacent {
                    continue;
                }
                if segment_segment(&edges[i], &edges[j]) {
                    return false;
                }
            }
        }
        true
    }

    /// Iterates over the closed polygon's edges, last edge wrapping to the start.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the bounding box, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// Reverses the vertex order if the polygon is clockwise.
    pub fn ensure_ccw(&mut self) {
        if self.is_clockwise() {
            self.vertices.reverse();
        }
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    pub fn perimeter(&self) -> F {
        self.edges().fold(F::zero(), |acc, e| acc + e.length())
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let twice = (0..n).fold(F::zero(), |acc, i| {
        let j = (i + 1) % n;
        acc + vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y
    });

    twice / lit(2.0)
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Computes the centroid of a polygon.
///
/// Returns `None` for fewer than 3 vertices or zero area.
pub fn polygon_centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    if vertices.len() < 3 {
        return None;
    }

    let area = polygon_signed_area(vertices);
    if area.abs() <= tolerance() {
        return None;
    }

    let mut cx = F::zero();
    let mut cy = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        let cross = vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
        cx = cx + (vertices[i].x + vertices[j].x) * cross;
        cy = cy + (vertices[i].y + vertices[j].y) * cross;
    }

    let six_area = lit::<F>(6.0) * area;
    Some(Point2::new(cx / six_area, cy / six_area))
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests if a polygon is convex.
///
/// True if all non-negligible turns have the same sign. Fewer than three
/// vertices count as convex.
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    if vertices.len() < 3 {
        return true;
    }

    let n = vertices.len();
    let mut sign: Option<bool> = None;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let cross = (b - a).cross(c - b);

        if cross.abs() > tolerance() {
            let is_positive = cross > F::zero();
            match sign {
                None => sign = Some(is_positive),
                Some(s) if s != is_positive => return false,
                _ => {}
            }
        }
    }

    true
}

/// Vertex-by-vertex equality within tolerance; the starting vertex matters.
impl<F: Float> PartialEq for Polygon<F> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(size: f64) -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ])
    }

    #[test]
    fn test_polygon_empty() {
        let poly: Polygon<f64> = Polygon::empty();
        assert!(poly.is_empty());
        assert_eq!(poly.len(), 0);
        assert_eq!(poly.edges().count(), 0);
        assert!(poly.bounding_box().is_none());
    }

    #[test]
    fn test_polygon_area_and_perimeter() {
        let poly = square(2.0);
        assert_relative_eq!(poly.area(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(poly.perimeter(), 8.0, epsilon = 1e-12);

        let tri = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 2.0),
        ]);
        assert_relative_eq!(tri.area(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polygon_winding() {
        let mut poly = square(1.0).reversed();
        assert!(poly.is_clockwise());
        assert!(poly.signed_area() < 0.0);

        poly.ensure_ccw();
        assert!(!poly.is_clockwise());
        assert!(poly.signed_area() > 0.0);
    }

    #[test]
    fn test_polygon_centroid() {
        let centroid = square(2.0).centroid().unwrap();
        assert_eq!(centroid, Point2::new(1.0, 1.0));

        let flat = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert!(flat.centroid().is_none());
    }

    #[test]
    fn test_polygon_contains() {
        let poly = square(2.0);
        assert!(poly.contains(Point2::new(1.0, 1.0)));
        assert!(poly.contains(Point2::new(0.5, 0.5)));
        assert!(!poly.contains(Point2::new(3.0, 3.0)));
        assert!(!poly.contains(Point2::new(-1.0, 1.0)));
    }

    #[test]
    fn test_polygon_is_convex() {
        assert!(square(1.0).is_convex());

        let l_shape = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        assert!(!l_shape.is_convex());
        assert!(l_shape.is_simple());
    }

    #[test]
    fn test_polygon_is_simple_bowtie() {
        let bowtie = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ]);
        assert!(!bowtie.is_simple());
        assert!(square(1.0).is_simple());
    }

    #[test]
    fn test_polygon_edges_wrap() {
        let poly = square(1.0);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].start, Point2::new(0.0, 1.0));
        assert_eq!(edges[3].end, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_polygon_bounding_box() {
        let poly = Polygon::new(vec![
            Point2::new(1.0_f64, 2.0),
            Point2::new(3.0, 1.0),
            Point2::new(4.0, 3.0),
            Point2::new(2.0, 4.0),
        ]);
        let bb = poly.bounding_box().unwrap();
        assert_eq!(bb.min, Point2::new(1.0, 1.0));
        assert_eq!(bb.max, Point2::new(4.0, 4.0));
    }

    #[test]
    fn test_polygon_f32() {
        let poly: Polygon<f32> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        assert!((poly.area() - 1.0).abs() < 0.001);
    }
}
