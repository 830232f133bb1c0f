//! Triangulation of point sets and its dual.
//!
//! [`Delaunay`] builds a Delaunay triangulation with Bowyer-Watson
//! insertion; [`Voronoi`] derives the Voronoi diagram from it and can clip
//! the result to a box.

mod delaunay;
mod voronoi;

pub use delaunay::{delaunay_triangulation, Delaunay, Triangle, SUPER_TRIANGLE_SCALE};
pub use voronoi::{voronoi_diagram, Voronoi, VoronoiCell, VoronoiEdge, RAY_CLIP_CAP};
