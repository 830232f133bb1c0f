//! Voronoi diagram computation from Delaunay triangulation.
//!
//! A Voronoi diagram partitions the plane into cells, where each cell contains
//! all points closer to its generating site than to any other site.
//!
//! # How It Works
//!
//! The Voronoi diagram is the dual of the Delaunay triangulation:
//! - Each Delaunay triangle's circumcenter becomes a Voronoi vertex
//! - Each Delaunay edge shared by two triangles becomes a finite Voronoi edge
//! - Edges on the convex hull create unbounded Voronoi rays
//!
//! Sites on the convex hull have unbounded cells. [`Voronoi::clip_to_bounds`]
//! turns every cell into a closed polygon inside a box.
//!
//! # Example
//!
//! ```
//! use planekit::triangulation::Voronoi;
//! use planekit::{Aabb2, Point2};
//!
//! let sites: Vec<Point2<f64>> = vec![
//!     Point2::new(2.0, 2.0),
//!     Point2::new(8.0, 2.0),
//!     Point2::new(5.0, 8.0),
//! ];
//!
//! let mut voronoi = Voronoi::from_sites(&sites);
//!
//! // One triangle means one Voronoi vertex (the circumcenter)
//! assert_eq!(voronoi.vertices().len(), 1);
//! assert_eq!(voronoi.cell_count(), 3);
//!
//! voronoi.clip_to_bounds(Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0)));
//! let total: f64 = voronoi.cell_polygons().iter().map(|p| p.area()).sum();
//! assert!((total - 100.0).abs() < 1e-6);
//! ```

use crate::bounds::Aabb2;
use crate::error::GeomError;
use crate::hull::{convex_hull, point_on_hull_boundary};
use crate::polygon::{clip_half_plane, clip_to_aabb, Polygon};
use crate::primitives::{Edge2, Line2, Point2, Ray2, Vec2};
use crate::tolerance::{lit, tolerance};
use crate::triangulation::delaunay::EdgeKey;
use crate::triangulation::Delaunay;
use num_traits::Float;
use std::cmp::Ordering;

/// How far an infinite edge may reach when clipped, in multiples of the
/// largest dimension of the clip box.
pub const RAY_CLIP_CAP: f64 = 10.0;

/// A Voronoi edge.
#[derive(Debug, Clone, Copy)]
pub enum VoronoiEdge<F> {
    /// A finite edge between two Voronoi vertices.
    Finite(Edge2<F>),
    /// A ray from a Voronoi vertex, dual to a convex hull edge.
    Ray(Ray2<F>),
    /// A full bisector line; only produced when all sites are collinear.
    Line(Line2<F>),
}

impl<F: Float> VoronoiEdge<F> {
    /// Returns `true` for rays and lines.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        !matches!(self, VoronoiEdge::Finite(_))
    }
}

impl<F: Float> PartialEq for VoronoiEdge<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a == b,
            (Self::Ray(a), Self::Ray(b)) => a == b,
            (Self::Line(a), Self::Line(b)) => a == b,
            _ => false,
        }
    }
}

/// The region of the plane closest to one site.
#[derive(Debug, Clone)]
pub struct VoronoiCell<F> {
    /// The generating site.
    pub site: Point2<F>,
    /// Index of the site in the input.
    pub site_index: usize,
    /// Cell boundary in counter-clockwise order.
    ///
    /// Before clipping, an unbounded cell only lists its finite vertices.
    pub vertices: Vec<Point2<F>>,
    /// `false` when the cell extends to infinity (its site is on the hull).
    pub is_bounded: bool,
    /// Indices of sites whose cells share an edge with this one.
    pub neighbors: Vec<usize>,
}

impl<F: Float> VoronoiCell<F> {
    fn new(site: Point2<F>, site_index: usize) -> Self {
        Self {
            site,
            site_index,
            vertices: Vec::new(),
            is_bounded: true,
            neighbors: Vec::new(),
        }
    }

    /// The cell boundary as a polygon.
    #[inline]
    pub fn polygon(&self) -> Polygon<F> {
        Polygon::new(self.vertices.clone())
    }
}

impl<F: Float> PartialEq for VoronoiCell<F> {
    fn eq(&self, other: &Self) -> bool {
        self.site_index == other.site_index
            && self.site == other.site
            && self.is_bounded == other.is_bounded
            && self.vertices == other.vertices
            && self.neighbors == other.neighbors
    }
}

/// A Voronoi diagram built as the dual of a [`Delaunay`] mesh it owns.
#[derive(Debug, Clone)]
pub struct Voronoi<F> {
    delaunay: Delaunay<F>,
    cells: Vec<VoronoiCell<F>>,
    edges: Vec<VoronoiEdge<F>>,
    /// One circumcenter per Delaunay triangle, index-aligned.
    vertices: Vec<Point2<F>>,
    bounds: Option<Aabb2<F>>,
}

impl<F: Float> Default for Voronoi<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Voronoi<F> {
    /// Creates an empty diagram.
    pub fn new() -> Self {
        Self {
            delaunay: Delaunay::new(),
            cells: Vec::new(),
            edges: Vec::new(),
            vertices: Vec::new(),
            bounds: None,
        }
    }

    /// Builds the diagram of `sites`.
    pub fn from_sites(sites: &[Point2<F>]) -> Self {
        let mut voronoi = Self::new();
        voronoi.compute(sites);
        voronoi
    }

    /// Builds the diagram dual to an existing triangulation (copied).
    pub fn from_delaunay(delaunay: &Delaunay<F>) -> Self {
        let mut voronoi = Self::new();
        voronoi.compute_from(delaunay);
        voronoi
    }

    /// Replaces the diagram with the one for `sites`.
    pub fn compute(&mut self, sites: &[Point2<F>]) {
        self.delaunay = Delaunay::from_points(sites);
        self.build_from_delaunay();
    }

    /// Replaces the diagram with the dual of `delaunay`.
    pub fn compute_from(&mut self, delaunay: &Delaunay<F>) {
        self.delaunay = delaunay.clone();
        self.build_from_delaunay();
    }

    fn build_from_delaunay(&mut self) {
        let sites = self.delaunay.points();
        self.bounds = None;
        self.edges.clear();
        self.cells = sites
            .iter()
            .enumerate()
            .map(|(i, &site)| VoronoiCell::new(site, i))
            .collect();

        if self.delaunay.is_empty() {
            self.vertices.clear();
            self.build_collinear();
            return;
        }

        self.vertices = self
            .delaunay
            .triangle_shapes()
            .iter()
            .map(|tri| tri.circumcenter())
            .collect();

        for (ti, tri) in self.delaunay.triangles().iter().enumerate() {
            for v in tri.vertices() {
                self.cells[v].vertices.push(self.vertices[ti]);
            }
        }

        let triangles = self.delaunay.triangles();
        for (EdgeKey(a, b), tris) in self.delaunay.edge_triangles() {
            self.cells[a].neighbors.push(b);
            self.cells[b].neighbors.push(a);

            match tris.as_slice() {
                &[t0, t1] => {
                    let edge = Edge2::new(self.vertices[t0], self.vertices[t1]);
                    if edge.p1 == edge.p2 {
                        tracing::trace!(a, b, "skipping zero-length edge between cocircular sites");
                        continue;
                    }
                    self.edges.push(VoronoiEdge::Finite(edge));
                }
                &[t] => {
                    let tri = triangles[t];
                    let third = tri
                        .vertices()
                        .into_iter()
                        .find(|&v| v != a && v != b)
                        .unwrap_or(tri.a);
                    let direction = outward_normal(sites[a], sites[b], sites[third]);
                    self.edges
                        .push(VoronoiEdge::Ray(Ray2::new(self.vertices[t], direction)));
                }
                _ => {}
            }
        }

        let hull = convex_hull(sites);
        for cell in &mut self.cells {
            cell.is_bounded = !point_on_hull_boundary(&hull, cell.site);
            order_ccw(&mut cell.vertices);
        }

        tracing::trace!(
            sites = self.cells.len(),
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            "voronoi diagram built"
        );
    }

    /// Cells of a mesh without triangles: zero or one site, or every site
    /// on one line. Consecutive sites along the line are separated by their
    /// bisector.
    fn build_collinear(&mut self) {
        let sites = self.delaunay.points();
        for cell in &mut self.cells {
            cell.is_bounded = false;
        }
        if sites.len() < 2 {
            return;
        }

        let mut order: Vec<usize> = (0..sites.len()).collect();
        order.sort_by(|&a, &b| sites[a].lexicographic_cmp(&sites[b]).then(a.cmp(&b)));

        let mut previous: Option<usize> = None;
        for i in order {
            if let Some(p) = previous {
                if sites[p] == sites[i] {
                    continue;
                }
                let bisector = Edge2::new(sites[p], sites[i]).perpendicular_bisector();
                self.edges.push(VoronoiEdge::Line(bisector));
                self.cells[p].neighbors.push(i);
                self.cells[i].neighbors.push(p);
            }
            previous = Some(i);
        }
        tracing::debug!(
            sites = sites.len(),
            edges = self.edges.len(),
            "collinear sites, diagram has only bisector lines"
        );
    }

    /// Clips every cell and edge to `bbox`.
    ///
    /// Bounded cells are clipped against the box. Unbounded cells are
    /// rebuilt as the box cut by the bisector of each neighbouring site.
    /// Infinite edges end where they leave the box, and edges entirely
    /// outside it are dropped. Cells may end up empty; sites are kept.
    pub fn clip_to_bounds(&mut self, bbox: Aabb2<F>) {
        let polygons: Vec<Polygon<F>> = (0..self.cells.len())
            .map(|i| {
                let cell = &self.cells[i];
                if cell.is_bounded {
                    clip_to_aabb(&cell.polygon(), &bbox)
                } else {
                    self.unbounded_cell_polygon(i, bbox)
                }
            })
            .collect();
        for (cell, polygon) in self.cells.iter_mut().zip(polygons) {
            cell.vertices = polygon.vertices;
        }

        let reach = lit::<F>(RAY_CLIP_CAP) * bbox.max_extent();
        let before = self.edges.len();
        self.edges = self
            .edges
            .iter()
            .filter_map(|edge| clip_edge(edge, bbox, reach))
            .collect();
        if self.edges.len() < before {
            tracing::debug!(
                dropped = before - self.edges.len(),
                "edges outside the clip box dropped"
            );
        }

        self.bounds = Some(bbox);
    }

    /// Clips to the bounding box of the sites grown by
    /// `margin * max_extent + 1` on every side.
    pub fn clip_to_margin(&mut self, margin: F) {
        let Some(sites_box) = Aabb2::from_points(self.delaunay.points().iter().copied()) else {
            return;
        };
        let amount = margin * sites_box.max_extent() + F::one();
        self.clip_to_bounds(sites_box.expanded(amount));
    }

    fn unbounded_cell_polygon(&self, i: usize, bbox: Aabb2<F>) -> Polygon<F> {
        let sites = self.delaunay.points();
        let cell = &self.cells[i];
        if cell.neighbors.is_empty() && sites[..i].contains(&cell.site) {
            // A repeated site; its cell belongs to the first occurrence.
            return Polygon::empty();
        }

        cell.neighbors
            .iter()
            .fold(bbox.to_polygon(), |polygon, &j| {
                // Left of the bisector is the side of `cell.site`.
                let bisector = Edge2::new(cell.site, sites[j]).perpendicular_bisector();
                clip_half_plane(&polygon, &bisector)
            })
    }

    /// Index of the site nearest to `p` (ties go to the lower index).
    ///
    /// Linear scan over the sites.
    pub fn locate(&self, p: Point2<F>) -> Option<usize> {
        self.delaunay
            .points()
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.distance_squared(p)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .map(|(i, _)| i)
    }

    /// The cell generated by `site`, if it is one of the sites.
    pub fn cell_for_site(&self, site: Point2<F>) -> Option<&VoronoiCell<F>> {
        self.cells.iter().find(|cell| cell.site == site)
    }

    /// The `k` sites nearest to `p`, nearest first.
    pub fn nearest_neighbors(&self, p: Point2<F>, k: usize) -> Vec<Point2<F>> {
        let mut sites = self.delaunay.points().to_vec();
        sites.sort_by(|a, b| {
            a.distance_squared(p)
                .partial_cmp(&b.distance_squared(p))
                .unwrap_or(Ordering::Equal)
        });
        sites.truncate(k);
        sites
    }

    /// The cell of site `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn cell(&self, i: usize) -> &VoronoiCell<F> {
        assert!(
            i < self.cells.len(),
            "cell index {i} out of range for {} cells",
            self.cells.len()
        );
        &self.cells[i]
    }

    /// Checked variant of [`Voronoi::cell`].
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::IndexOutOfRange`] if `i` is out of range.
    pub fn try_cell(&self, i: usize) -> Result<&VoronoiCell<F>, GeomError> {
        self.cells.get(i).ok_or(GeomError::IndexOutOfRange {
            index: i,
            len: self.cells.len(),
        })
    }

    #[inline]
    pub fn cells(&self) -> &[VoronoiCell<F>] {
        &self.cells
    }

    #[inline]
    pub fn edges(&self) -> &[VoronoiEdge<F>] {
        &self.edges
    }

    /// Circumcenters of the Delaunay triangles, in triangle order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Every cell boundary as a polygon, in site order.
    pub fn cell_polygons(&self) -> Vec<Polygon<F>> {
        self.cells.iter().map(VoronoiCell::polygon).collect()
    }

    /// The underlying triangulation.
    #[inline]
    pub fn delaunay(&self) -> &Delaunay<F> {
        &self.delaunay
    }

    /// The box of the last clip, if any.
    #[inline]
    pub fn bounds(&self) -> Option<Aabb2<F>> {
        self.bounds
    }

    #[inline]
    pub fn is_clipped(&self) -> bool {
        self.bounds.is_some()
    }

    /// Removes all sites, cells, and edges.
    pub fn clear(&mut self) {
        self.delaunay.clear();
        self.cells.clear();
        self.edges.clear();
        self.vertices.clear();
        self.bounds = None;
    }
}

/// Computes the Voronoi diagram of a set of sites.
///
/// # Example
///
/// ```
/// use planekit::triangulation::voronoi_diagram;
/// use planekit::Point2;
///
/// // Square of points
/// let sites: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let voronoi = voronoi_diagram(&sites);
///
/// // Both triangles of a square share the circumcenter (0.5, 0.5)
/// assert_eq!(voronoi.vertices()[0], Point2::new(0.5, 0.5));
/// assert_eq!(voronoi.cell_count(), 4);
/// ```
pub fn voronoi_diagram<F: Float>(sites: &[Point2<F>]) -> Voronoi<F> {
    Voronoi::from_sites(sites)
}

/// Normal of the edge `a → b` pointing away from `third`.
fn outward_normal<F: Float>(a: Point2<F>, b: Point2<F>, third: Point2<F>) -> Vec2<F> {
    let normal = (b - a).perpendicular();
    if normal.dot(third - a.midpoint(b)) > F::zero() {
        -normal
    } else {
        normal
    }
}

/// Sorts points counter-clockwise around their centroid and drops
/// consecutive duplicates.
fn order_ccw<F: Float>(points: &mut Vec<Point2<F>>) {
    if points.len() < 2 {
        return;
    }
    let n = lit::<F>(points.len() as f64);
    let sum = points
        .iter()
        .fold(Vec2::zero(), |acc, p| acc + p.to_vec());
    let center = Point2::new(sum.x / n, sum.y / n);

    points.sort_by(|&a, &b| angular_cmp(a - center, b - center));
    points.dedup();
    if points.len() > 1 && points[0] == points[points.len() - 1] {
        points.pop();
    }
}

/// Compares two directions by polar angle in `[0, 2π)` without trigonometry.
fn angular_cmp<F: Float>(a: Vec2<F>, b: Vec2<F>) -> Ordering {
    let half = |v: Vec2<F>| -> u8 {
        if v.y > F::zero() || (v.y == F::zero() && v.x > F::zero()) {
            0
        } else {
            1
        }
    };
    half(a).cmp(&half(b)).then_with(|| {
        let cross = a.cross(b);
        if cross > F::zero() {
            Ordering::Less
        } else if cross < F::zero() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

/// Clips an edge to `bbox`, turning infinite edges into segments that reach
/// at most `reach` from their origin. `None` if nothing is left.
fn clip_edge<F: Float>(edge: &VoronoiEdge<F>, bbox: Aabb2<F>, reach: F) -> Option<VoronoiEdge<F>> {
    let (origin, direction, lo, hi) = match *edge {
        VoronoiEdge::Finite(e) => (e.p1, e.direction(), F::zero(), F::one()),
        VoronoiEdge::Ray(r) => {
            let len = r.direction.magnitude();
            if len <= tolerance() {
                return None;
            }
            (r.origin, r.direction, F::zero(), reach / len)
        }
        VoronoiEdge::Line(l) => {
            let len = l.direction.magnitude();
            if len <= tolerance() {
                return None;
            }
            (l.origin, l.direction, -reach / len, reach / len)
        }
    };

    let (t_enter, t_exit) = bbox.line_parameter_range(origin, direction)?;
    let t0 = t_enter.max(lo);
    let t1 = t_exit.min(hi);
    if t0 > t1 {
        return None;
    }

    let clamp = |p: Point2<F>| {
        Point2::new(
            p.x.max(bbox.min.x).min(bbox.max.x),
            p.y.max(bbox.min.y).min(bbox.max.y),
        )
    };
    let start = clamp(origin + direction * t0);
    let end = clamp(origin + direction * t1);
    if start == end {
        return None;
    }
    Some(VoronoiEdge::Finite(Edge2::new(start, end)))
}
