//! Geometric predicates: orientation, pairwise intersection and closest points.
//!
//! Every predicate is built from orientation, dot and cross products; none
//! uses trigonometry. Decisions are made against the crate-wide
//! [`TOLERANCE`](crate::tolerance::TOLERANCE), and shapes are treated as
//! closed sets, so touching counts as intersecting.

mod closest;
mod orientation;
mod pairs;
mod sweep;

pub use closest::{closest_point_on_segment, closest_point_on_segment3, closest_point_on_triangle};
pub use orientation::{
    orient2d, orientation, point_on_segment, segments_intersect, Orientation, SegmentIntersection,
};
pub use pairs::{
    aabb_aabb, aabb_line, aabb_polygon, aabb_ray, aabb_segment, intersect, line_line,
    polygon_line, polygon_polygon, polygon_ray, polygon_segment, ray_line, ray_ray, segment_line,
    segment_ray, segment_segment, Shape2,
};
pub use sweep::polygon_polygon_sweep;
