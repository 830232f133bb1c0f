//! Simple polygons and convex clipping.
//!
//! # Example
//!
//! ```
//! use planekit::polygon::{clip_to_aabb, Polygon};
//! use planekit::{Aabb2, Point2};
//!
//! let triangle = Polygon::new(vec![
//!     Point2::new(-1.0, -1.0),
//!     Point2::new(3.0, -1.0),
//!     Point2::new(-1.0, 3.0),
//! ]);
//! let bbox = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
//!
//! let clipped = clip_to_aabb(&triangle, &bbox);
//! assert!((clipped.area() - 2.0_f64).abs() < 1e-9);
//! ```

mod clip;
mod core;

pub use clip::{clip_half_plane, clip_to_aabb, sutherland_hodgman};
pub use core::{
    polygon_area, polygon_centroid, polygon_contains, polygon_is_convex, polygon_signed_area,
    Polygon,
};
