//! Axis-aligned bounding boxes.

mod aabb;

pub use aabb::Aabb2;
