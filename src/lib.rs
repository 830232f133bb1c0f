//! planekit - Planar computational geometry
//!
//! Tolerance-based predicates, Delaunay triangulation, Voronoi diagrams and
//! polygon clipping over any `num_traits::Float`. Coordinates are compared
//! with the fixed [`TOLERANCE`] rather than exactly.

pub mod bounds;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod tolerance;
pub mod triangulation;

pub use bounds::Aabb2;
pub use error::GeomError;
pub use polygon::Polygon;
pub use predicates::{
    orient2d, point_on_segment, segments_intersect, Orientation, SegmentIntersection, Shape2,
};
pub use primitives::{
    Edge2, Line2, Point2, Point3, Ray2, Segment2, Segment3, Triangle2, Vec2, Vec3,
};
pub use tolerance::TOLERANCE;
pub use triangulation::{Delaunay, Voronoi};
