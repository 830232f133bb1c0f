//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with a super-triangle containing all points
//! 2. Insert points one at a time: remove every triangle whose circumcircle
//!    contains the point and fan the resulting cavity from the new point
//! 3. Remove triangles connected to the super-triangle vertices
//! 4. Close the pockets this leaves along the convex hull, then flip edges
//!    until every one is locally Delaunay
//!
//! # Complexity
//!
//! - Time: O(n²) worst case (each insertion scans every triangle)
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use planekit::triangulation::Delaunay;
//! use planekit::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.5),
//! ];
//!
//! let mesh = Delaunay::from_points(&points);
//! assert_eq!(mesh.triangle_count(), 4);
//! assert!(mesh.is_valid());
//! ```

use crate::bounds::Aabb2;
use crate::error::GeomError;
use crate::hull;
use crate::predicates::orientation;
use crate::primitives::{Edge2, Point2, Triangle2};
use crate::tolerance::{lit, tolerance};
use num_traits::Float;
use std::collections::{HashMap, HashSet};

/// Size of the bootstrap triangle relative to the bounding-box diagonal of
/// the input.
pub const SUPER_TRIANGLE_SCALE: f64 = 20.0;

/// A triangle represented by indices into a point array.
///
/// Vertices are stored in counter-clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// The vertex indices in stored order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three edges of this triangle as pairs of indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Number of vertex indices shared with `other`.
    #[inline]
    pub fn shared_vertices(&self, other: &Triangle) -> usize {
        self.vertices()
            .iter()
            .filter(|&&v| other.contains_vertex(v))
            .count()
    }

    /// The vertex that is neither `u` nor `v`.
    #[inline]
    fn opposite(&self, u: usize, v: usize) -> Option<usize> {
        self.vertices().into_iter().find(|&w| w != u && w != v)
    }
}

/// An edge represented by two vertex indices, normalized so smaller index comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeKey(pub(crate) usize, pub(crate) usize);

impl EdgeKey {
    pub(crate) fn new(a: usize, b: usize) -> Self {
        if a < b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }
}

/// The bootstrap triangle exists only while a construction is in progress.
#[derive(Debug, Clone, Copy)]
enum SuperTriangle<F> {
    Absent,
    /// Vertices addressed as indices `n`, `n + 1`, `n + 2` past the real points.
    Present([Point2<F>; 3]),
}

/// An incrementally built Delaunay triangulation.
///
/// Owns its points and stores triangles as index triples into them. The
/// mesh is read-only to callers apart from [`Delaunay::insert`] and
/// [`Delaunay::clear`].
#[derive(Debug, Clone)]
pub struct Delaunay<F> {
    points: Vec<Point2<F>>,
    triangles: Vec<Triangle>,
    super_triangle: SuperTriangle<F>,
}

impl<F: Float> Default for Delaunay<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Delaunay<F> {
    /// Creates an empty triangulation.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            triangles: Vec::new(),
            super_triangle: SuperTriangle::Absent,
        }
    }

    /// Triangulates `points`.
    pub fn from_points(points: &[Point2<F>]) -> Self {
        let mut mesh = Self::new();
        mesh.triangulate(points);
        mesh
    }

    /// Replaces the current mesh with the triangulation of `points`.
    ///
    /// Fewer than three points, or collinear points, are stored without
    /// producing triangles. Points equal (within tolerance) to an earlier
    /// point keep their index but are not meshed.
    pub fn triangulate(&mut self, points: &[Point2<F>]) {
        self.clear();
        self.points = points.to_vec();

        if points.len() < 3 {
            tracing::debug!(points = points.len(), "too few points to triangulate");
            return;
        }

        let Some(bbox) = Aabb2::from_points(points.iter().copied()) else {
            return;
        };
        self.super_triangle = SuperTriangle::Present(super_triangle(bbox));

        let n = points.len();
        self.triangles.push(Triangle::new(n, n + 1, n + 2));

        let duplicates = duplicate_indices(points);
        for i in 0..n {
            if duplicates.contains(&i) {
                tracing::debug!(index = i, "skipping duplicate point");
                continue;
            }
            self.insert_vertex(i);
        }

        self.triangles.retain(|tri| tri.a < n && tri.b < n && tri.c < n);
        self.super_triangle = SuperTriangle::Absent;

        let meshed: Vec<usize> = (0..n).filter(|i| !duplicates.contains(i)).collect();
        self.fill_hull_pockets(&meshed);
        self.legalize();

        if self.triangles.is_empty() {
            tracing::debug!(points = n, "degenerate input produced no triangles");
        }
        tracing::trace!(
            points = n,
            triangles = self.triangles.len(),
            "triangulation complete"
        );
    }

    /// Adds a point to the mesh and returns its index.
    ///
    /// A point inside the current triangulation is inserted with a single
    /// Bowyer-Watson step. A point outside it (or any point while the mesh
    /// has no triangles) triggers a full re-triangulation, since the hull
    /// changes. Duplicates are stored but not meshed.
    pub fn insert(&mut self, p: Point2<F>) -> usize {
        let index = self.points.len();

        if self.points.iter().any(|&q| q == p) {
            tracing::debug!(index, "skipping duplicate point");
            self.points.push(p);
            return index;
        }

        if self.locate(p).is_some() {
            self.points.push(p);
            self.insert_vertex(index);
        } else {
            tracing::debug!(
                index,
                triangles = self.triangles.len(),
                "point outside the mesh, rebuilding"
            );
            let mut points = std::mem::take(&mut self.points);
            points.push(p);
            self.triangulate(&points);
        }
        index
    }

    /// Inserts every point in order.
    pub fn insert_all(&mut self, points: &[Point2<F>]) {
        for &p in points {
            self.insert(p);
        }
    }

    /// The index triangles, counter-clockwise.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The stored points, including any that were not meshed.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The geometric triangle at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn triangle(&self, i: usize) -> Triangle2<F> {
        assert!(
            i < self.triangles.len(),
            "triangle index {i} out of range for {} triangles",
            self.triangles.len()
        );
        self.shape(&self.triangles[i])
    }

    /// Checked variant of [`Delaunay::triangle`].
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::IndexOutOfRange`] if `i` is out of range.
    pub fn try_triangle(&self, i: usize) -> Result<Triangle2<F>, GeomError> {
        self.triangles
            .get(i)
            .map(|tri| self.shape(tri))
            .ok_or(GeomError::IndexOutOfRange {
                index: i,
                len: self.triangles.len(),
            })
    }

    /// Every triangle as a geometric [`Triangle2`].
    pub fn triangle_shapes(&self) -> Vec<Triangle2<F>> {
        self.triangles.iter().map(|tri| self.shape(tri)).collect()
    }

    /// The unique edges of the mesh.
    pub fn edges(&self) -> Vec<Edge2<F>> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for tri in &self.triangles {
            for (a, b) in tri.edges() {
                if seen.insert(EdgeKey::new(a, b)) {
                    edges.push(Edge2::new(self.points[a], self.points[b]));
                }
            }
        }
        edges
    }

    /// Edges used by a single triangle: the boundary of the mesh, which
    /// covers the convex hull of the meshed points.
    pub fn hull_edges(&self) -> Vec<Edge2<F>> {
        self.boundary_edges()
            .into_iter()
            .map(|(a, b)| Edge2::new(self.points[a], self.points[b]))
            .collect()
    }

    /// Convex hull of the stored points, counter-clockwise.
    pub fn convex_hull(&self) -> Vec<Point2<F>> {
        hull::convex_hull(&self.points)
    }

    /// Index of the first triangle containing `p` (boundary inclusive).
    ///
    /// Linear scan over the triangles.
    pub fn locate(&self, p: Point2<F>) -> Option<usize> {
        self.triangles
            .iter()
            .position(|tri| self.shape(tri).contains(p))
    }

    /// Triangles sharing an edge with triangle `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        assert!(
            i < self.triangles.len(),
            "triangle index {i} out of range for {} triangles",
            self.triangles.len()
        );
        let tri = self.triangles[i];
        self.triangles
            .iter()
            .enumerate()
            .filter(|&(j, other)| j != i && tri.shared_vertices(other) == 2)
            .map(|(j, _)| j)
            .collect()
    }

    /// Checks the Delaunay property: no stored point lies strictly inside
    /// the circumcircle of a triangle it is not a vertex of.
    pub fn is_valid(&self) -> bool {
        self.triangles.iter().all(|tri| {
            let shape = self.shape(tri);
            self.points
                .iter()
                .enumerate()
                .filter(|&(i, _)| !tri.contains_vertex(i))
                .all(|(_, &p)| !shape.circumcircle_strictly_contains(p))
        })
    }

    /// Removes all points and triangles.
    pub fn clear(&mut self) {
        self.points.clear();
        self.triangles.clear();
        self.super_triangle = SuperTriangle::Absent;
    }

    /// Maps each mesh edge to the triangles using it, sorted by edge.
    pub(crate) fn edge_triangles(&self) -> Vec<(EdgeKey, Vec<usize>)> {
        let mut map: HashMap<EdgeKey, Vec<usize>> = HashMap::new();
        for (ti, tri) in self.triangles.iter().enumerate() {
            for (a, b) in tri.edges() {
                map.entry(EdgeKey::new(a, b)).or_default().push(ti);
            }
        }
        let mut entries: Vec<_> = map.into_iter().collect();
        entries.sort_by_key(|(key, _)| (key.0, key.1));
        entries
    }

    /// Boundary edges directed so the mesh lies on their left.
    fn boundary_edges(&self) -> Vec<(usize, usize)> {
        let mut count: HashMap<EdgeKey, usize> = HashMap::new();
        for tri in &self.triangles {
            for (a, b) in tri.edges() {
                *count.entry(EdgeKey::new(a, b)).or_insert(0) += 1;
            }
        }
        self.triangles
            .iter()
            .flat_map(|tri| tri.edges())
            .filter(|&(a, b)| count[&EdgeKey::new(a, b)] == 1)
            .collect()
    }

    /// Closes the pockets left between the mesh boundary and the convex hull
    /// once the bootstrap triangle is stripped.
    ///
    /// Triangles whose circumcircle reached a bootstrap vertex are lost with
    /// it. Every boundary edge with a meshed point strictly on its outer side
    /// gets the triangle gift-wrapped across it, until only hull edges remain.
    fn fill_hull_pockets(&mut self, meshed: &[usize]) {
        if self.triangles.is_empty() {
            let hull = hull::convex_hull_indices(&self.points);
            if hull.len() < 3 {
                return;
            }
            let (u, v) = (hull[0], hull[1]);
            match self.closing_vertex(u, v, meshed, &[]) {
                Some(c) => self.triangles.push(Triangle::new(u, v, c)),
                None => return,
            }
        }

        let eps: F = tolerance();
        let mut added = 0;
        while added <= 2 * meshed.len() {
            let boundary = self.boundary_edges();
            let closed = boundary.iter().find_map(|&(a, b)| {
                let (pa, pb) = (self.points[a], self.points[b]);
                let outside = meshed
                    .iter()
                    .any(|&q| orientation(pa, pb, self.points[q]) < -eps);
                if !outside {
                    return None;
                }
                self.closing_vertex(b, a, meshed, &boundary)
                    .map(|c| Triangle::new(b, a, c))
            });
            match closed {
                Some(tri) => {
                    self.triangles.push(tri);
                    added += 1;
                }
                None => break,
            }
        }

        if added > 0 {
            tracing::debug!(added, "filled pockets between mesh and hull");
        }
    }

    /// The meshed vertex `c` left of `u -> v` whose triangle `(u, v, c)` has
    /// the emptiest circumcircle among those that fit beside the mesh.
    fn closing_vertex(
        &self,
        u: usize,
        v: usize,
        meshed: &[usize],
        boundary: &[(usize, usize)],
    ) -> Option<usize> {
        let eps: F = tolerance();
        let (pu, pv) = (self.points[u], self.points[v]);
        let mut best: Option<usize> = None;
        for &c in meshed {
            let pc = self.points[c];
            if orientation(pu, pv, pc) <= eps {
                continue;
            }
            let improves = match best {
                None => true,
                Some(b) => {
                    Triangle2::new(pu, pv, self.points[b]).circumcircle_strictly_contains(pc)
                }
            };
            if improves && self.fits_beside_mesh(u, v, c, meshed, boundary) {
                best = Some(c);
            }
        }
        best
    }

    /// Whether triangle `(u, v, c)` covers no other meshed point and its new
    /// edges cross no boundary edge.
    fn fits_beside_mesh(
        &self,
        u: usize,
        v: usize,
        c: usize,
        meshed: &[usize],
        boundary: &[(usize, usize)],
    ) -> bool {
        let shape = Triangle2::new(self.points[u], self.points[v], self.points[c]);
        let covers_point = meshed
            .iter()
            .filter(|&&q| q != u && q != v && q != c)
            .any(|&q| shape.contains(self.points[q]));
        if covers_point {
            return false;
        }
        [(v, c), (c, u)].into_iter().all(|(s, t)| {
            boundary
                .iter()
                .all(|&(x, y)| !self.edges_cross(s, t, x, y))
        })
    }

    /// Proper crossing of segments `s-t` and `x-y`; touching does not count.
    fn edges_cross(&self, s: usize, t: usize, x: usize, y: usize) -> bool {
        let eps: F = tolerance();
        let straddles = |d1: F, d2: F| (d1 > eps && d2 < -eps) || (d1 < -eps && d2 > eps);
        let (ps, pt, px, py) = (self.points[s], self.points[t], self.points[x], self.points[y]);
        straddles(orientation(px, py, ps), orientation(px, py, pt))
            && straddles(orientation(ps, pt, px), orientation(ps, pt, py))
    }

    /// Lawson flips until every interior edge is locally Delaunay.
    fn legalize(&mut self) {
        let limit = self.triangles.len() * self.triangles.len() + 1;
        let mut flips = 0;
        loop {
            let mut touched = vec![false; self.triangles.len()];
            let mut flipped = false;
            for (EdgeKey(a, b), tris) in self.edge_triangles() {
                let &[t0, t1] = tris.as_slice() else {
                    continue;
                };
                if touched[t0] || touched[t1] {
                    continue;
                }
                if self.flip_if_illegal(a, b, t0, t1) {
                    touched[t0] = true;
                    touched[t1] = true;
                    flipped = true;
                    flips += 1;
                }
            }
            if !flipped || flips > limit {
                break;
            }
        }

        if flips > 0 {
            tracing::debug!(flips, "legalized mesh edges");
        }
    }

    /// Replaces the diagonal `a-b` of the quad formed by `t0` and `t1` when
    /// the far vertex of `t1` lies strictly inside the circumcircle of `t0`.
    fn flip_if_illegal(&mut self, a: usize, b: usize, t0: usize, t1: usize) -> bool {
        let (Some(c), Some(d)) = (
            self.triangles[t0].opposite(a, b),
            self.triangles[t1].opposite(a, b),
        ) else {
            return false;
        };
        if !self.shape(&self.triangles[t0]).circumcircle_strictly_contains(self.points[d]) {
            return false;
        }

        // Orient the quad as a, d, b, c counter-clockwise.
        let eps: F = tolerance();
        let (a, b) = if orientation(self.points[a], self.points[b], self.points[c]) > F::zero() {
            (a, b)
        } else {
            (b, a)
        };
        let (pa, pb, pc, pd) = (self.points[a], self.points[b], self.points[c], self.points[d]);
        if orientation(pa, pd, pc) <= eps || orientation(pd, pb, pc) <= eps {
            return false;
        }

        self.triangles[t0] = Triangle::new(a, d, c);
        self.triangles[t1] = Triangle::new(d, b, c);
        true
    }

    /// Resolves a vertex index, including the super-triangle's while it exists.
    fn vertex(&self, i: usize) -> Point2<F> {
        let n = self.points.len();
        match self.super_triangle {
            SuperTriangle::Present(ref corners) if i >= n => corners[i - n],
            _ => self.points[i],
        }
    }

    fn shape(&self, tri: &Triangle) -> Triangle2<F> {
        Triangle2::new(self.vertex(tri.a), self.vertex(tri.b), self.vertex(tri.c))
    }

    /// One Bowyer-Watson step for the stored point `i`.
    fn insert_vertex(&mut self, i: usize) {
        let p = self.vertex(i);

        let mut bad: Vec<usize> = self
            .triangles
            .iter()
            .enumerate()
            .filter(|(_, tri)| self.shape(tri).circumcircle_contains(p))
            .map(|(ti, _)| ti)
            .collect();

        if bad.is_empty() {
            tracing::debug!(index = i, "no circumcircle contains the point");
            return;
        }

        // Boundary of the cavity: edges used by exactly one bad triangle.
        let mut edge_count: HashMap<EdgeKey, usize> = HashMap::new();
        for &ti in &bad {
            for (ea, eb) in self.triangles[ti].edges() {
                *edge_count.entry(EdgeKey::new(ea, eb)).or_insert(0) += 1;
            }
        }
        let boundary: Vec<(usize, usize)> = bad
            .iter()
            .flat_map(|&ti| self.triangles[ti].edges())
            .filter(|&(ea, eb)| edge_count[&EdgeKey::new(ea, eb)] == 1)
            .collect();

        bad.sort_unstable();
        for &ti in bad.iter().rev() {
            self.triangles.swap_remove(ti);
        }

        let eps: F = tolerance();
        for (ea, eb) in boundary {
            let o = orientation(self.vertex(ea), self.vertex(eb), p);
            if o > eps {
                self.triangles.push(Triangle::new(ea, eb, i));
            } else if o < -eps {
                self.triangles.push(Triangle::new(eb, ea, i));
            } else {
                tracing::debug!(index = i, edge = ?(ea, eb), "dropping sliver in cavity fan");
            }
        }
    }
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Returns triangles as indices into `points`, counter-clockwise. Returns an
/// empty vector for fewer than 3 points or collinear input.
///
/// # Example
///
/// ```
/// use planekit::triangulation::delaunay_triangulation;
/// use planekit::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// assert_eq!(delaunay_triangulation(&points).len(), 2);
/// ```
pub fn delaunay_triangulation<F: Float>(points: &[Point2<F>]) -> Vec<Triangle> {
    Delaunay::from_points(points).triangles
}

/// A counter-clockwise triangle around `bbox`, [`SUPER_TRIANGLE_SCALE`] times
/// its diagonal in size.
fn super_triangle<F: Float>(bbox: Aabb2<F>) -> [Point2<F>; 3] {
    let diagonal = bbox.size().magnitude();
    let span = if diagonal > tolerance() {
        diagonal
    } else {
        F::one()
    };
    let s = lit::<F>(SUPER_TRIANGLE_SCALE) * span;
    let c = bbox.center();
    [
        Point2::new(c.x - s, c.y - s),
        Point2::new(c.x + s, c.y - s),
        Point2::new(c.x, c.y + s),
    ]
}

/// Indices of points equal (within tolerance) to a point with a smaller index.
fn duplicate_indices<F: Float>(points: &[Point2<F>]) -> HashSet<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].lexicographic_cmp(&points[b]));

    let mut duplicates = HashSet::new();
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && points[order[end]] == points[order[start]] {
            end += 1;
        }
        let run = &order[start..end];
        if let Some(&keep) = run.iter().min() {
            duplicates.extend(run.iter().copied().filter(|&i| i != keep));
        }
        start = end;
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    fn scattered() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
            Point2::new(0.3, 0.3),
            Point2::new(0.7, 0.6),
            Point2::new(0.4, 0.8),
        ]
    }

    #[test]
    fn test_triangle_index_helpers() {
        let tri = Triangle::new(0, 1, 2);
        assert_eq!(tri.edges(), [(0, 1), (1, 2), (2, 0)]);
        assert!(tri.contains_vertex(2));
        assert!(!tri.contains_vertex(3));
        assert_eq!(tri.shared_vertices(&Triangle::new(2, 1, 5)), 2);
    }

    #[test]
    fn test_edge_key_normalization() {
        assert_eq!(EdgeKey::new(1, 2), EdgeKey::new(2, 1));
        assert_eq!(EdgeKey::new(2, 1).0, 1);
    }

    #[test]
    fn test_too_few_points() {
        for n in 0..3 {
            let points: Vec<Point2<f64>> = unit_square().into_iter().take(n).collect();
            let mesh = Delaunay::from_points(&points);
            assert!(mesh.is_empty());
            assert_eq!(mesh.point_count(), n);
        }
    }

    #[test]
    fn test_single_triangle_is_ccw() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(0.5, 1.0),
            Point2::new(1.0, 0.0),
        ];
        let mesh = Delaunay::from_points(&points);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.triangle(0).is_ccw());

        let mut indices = mesh.triangles()[0].vertices();
        indices.sort_unstable();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_unit_square_shares_diagonal() {
        let mesh = Delaunay::from_points(&unit_square());
        assert_eq!(mesh.triangle_count(), 2);

        let shapes = mesh.triangle_shapes();
        let diagonal = shapes[0].shared_edge(&shapes[1]).unwrap();
        assert_relative_eq!(diagonal.length(), 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(mesh.edges().len(), 5);
        assert_eq!(mesh.hull_edges().len(), 4);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_grid() {
        let points: Vec<Point2<f64>> = (0..4)
            .flat_map(|i| (0..4).map(move |j| Point2::new(i as f64, j as f64)))
            .collect();
        let mesh = Delaunay::from_points(&points);
        assert_eq!(mesh.triangle_count(), 18);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_scattered_points_are_valid_and_covered() {
        let points = scattered();
        let mesh = Delaunay::from_points(&points);
        assert!(mesh.is_valid());

        let used: HashSet<usize> = mesh.triangles().iter().flat_map(|t| t.vertices()).collect();
        assert_eq!(used.len(), points.len());

        let area: f64 = mesh.triangle_shapes().iter().map(|t| t.area()).sum();
        let hull_area = crate::polygon::polygon_area(&mesh.convex_hull());
        assert_relative_eq!(area, hull_area, epsilon = 1e-9);
    }

    #[test]
    fn test_mesh_reaches_the_whole_hull() {
        // (3, 4) sits just inside the hull edge from (10, 2) to (0, 5), so the
        // triangle on that edge has a circumcircle wider than the bootstrap.
        let points = vec![
            Point2::new(1.0_f64, 2.0),
            Point2::new(3.0, 4.0),
            Point2::new(4.0, 2.0),
            Point2::new(0.0, 5.0),
            Point2::new(10.0, 2.0),
        ];
        let mesh = Delaunay::from_points(&points);
        assert_eq!(mesh.triangle_count(), 4);
        assert!(mesh.is_valid());

        let area: f64 = mesh.triangle_shapes().iter().map(|t| t.area()).sum();
        assert_relative_eq!(area, 13.5, epsilon = 1e-9);
        assert_eq!(mesh.hull_edges().len(), 4);
        assert!(mesh
            .hull_edges()
            .iter()
            .all(|e| points.iter().all(|&q| orientation(e.p1, e.p2, q) >= -1e-9)));
    }

    #[test]
    fn test_thin_triangle_is_kept() {
        let points = vec![
            Point2::new(4.0_f64, 11.0),
            Point2::new(12.0, 14.0),
            Point2::new(26.0, 20.0),
        ];
        let mesh = Delaunay::from_points(&points);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.triangle(0).is_ccw());
    }

    #[test]
    fn test_grid_covers_its_square() {
        let points: Vec<Point2<f64>> = (0..8)
            .flat_map(|i| (0..8).map(move |j| Point2::new(i as f64, j as f64)))
            .collect();
        let mesh = Delaunay::from_points(&points);
        assert_eq!(mesh.triangle_count(), 98);
        let area: f64 = mesh.triangle_shapes().iter().map(|t| t.area()).sum();
        assert_relative_eq!(area, 49.0, epsilon = 1e-9);
    }

    #[test]
    fn test_collinear_points_give_no_triangles() {
        let points: Vec<Point2<f64>> =
            (0..5).map(|i| Point2::new(i as f64, 2.0 * i as f64)).collect();
        let mesh = Delaunay::from_points(&points);
        assert!(mesh.is_empty());
        assert_eq!(mesh.point_count(), 5);
    }

    #[test]
    fn test_duplicates_are_skipped() {
        let mut points = unit_square();
        points.push(Point2::new(1.0, 1.0));
        points.push(Point2::new(0.0, 0.0));
        let mesh = Delaunay::from_points(&points);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.point_count(), 6);
        assert!(mesh.triangles().iter().all(|t| t.vertices().iter().all(|&v| v < 4)));
    }

    #[test]
    fn test_duplicate_indices_keeps_first() {
        let points = vec![
            Point2::new(1.0_f64, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 1.0),
        ];
        let dups = duplicate_indices(&points);
        assert_eq!(dups, [2, 3].into_iter().collect());
    }

    #[test]
    fn test_insert_inside_uses_existing_mesh() {
        let mut mesh = Delaunay::from_points(&unit_square());
        let index = mesh.insert(Point2::new(0.5, 0.5));
        assert_eq!(index, 4);
        assert_eq!(mesh.triangle_count(), 4);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_insert_outside_rebuilds() {
        let mut mesh = Delaunay::from_points(&unit_square());
        mesh.insert(Point2::new(3.0, 0.5));
        assert_eq!(mesh.point_count(), 5);
        assert_eq!(mesh.convex_hull().len(), 5);
        assert!(mesh.is_valid());
        assert!(mesh.locate(Point2::new(2.0, 0.5)).is_some());
    }

    #[test]
    fn test_insert_all_matches_batch() {
        let points = scattered();
        let mut incremental = Delaunay::new();
        incremental.insert_all(&points);

        let batch = Delaunay::from_points(&points);
        assert_eq!(incremental.triangle_count(), batch.triangle_count());
        assert!(incremental.is_valid());
    }

    #[test]
    fn test_locate_and_neighbors() {
        let mesh = Delaunay::from_points(&unit_square());
        let t = mesh.locate(Point2::new(0.9, 0.1)).unwrap();
        assert!(mesh.triangle(t).contains(Point2::new(0.9, 0.1)));
        assert!(mesh.locate(Point2::new(2.0, 2.0)).is_none());

        assert_eq!(mesh.neighbors(0), vec![1]);
        assert_eq!(mesh.neighbors(1), vec![0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_neighbors_out_of_range_panics() {
        let mesh = Delaunay::from_points(&unit_square());
        mesh.neighbors(7);
    }

    #[test]
    fn test_try_triangle() {
        let mesh = Delaunay::from_points(&unit_square());
        assert!(mesh.try_triangle(1).is_ok());
        assert_eq!(
            mesh.try_triangle(2),
            Err(GeomError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_clear() {
        let mut mesh = Delaunay::from_points(&unit_square());
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.point_count(), 0);
        assert!(mesh.edges().is_empty());
    }

    #[test]
    fn test_delaunay_triangulation_fn_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        assert_eq!(delaunay_triangulation(&points).len(), 1);
    }
}
