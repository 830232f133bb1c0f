//! Floating-point geometric primitives.
//!
//! All types are small `Copy` values generic over `F: Float`. Points and
//! vectors compare equal within [`TOLERANCE`](crate::tolerance::TOLERANCE).

mod edge2;
mod line2;
mod point2;
mod point3;
mod ray2;
mod segment2;
mod segment3;
mod triangle2;
mod vec2;
mod vec3;

pub use edge2::Edge2;
pub use line2::Line2;
pub use point2::Point2;
pub use point3::Point3;
pub use ray2::Ray2;
pub use segment2::Segment2;
pub use segment3::Segment3;
pub use triangle2::Triangle2;
pub use vec2::Vec2;
pub use vec3::Vec3;
