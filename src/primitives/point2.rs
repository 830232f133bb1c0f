//! 2D point type.

use super::Vec2;
use crate::tolerance::approx_eq;
use num_traits::Float;
use std::cmp::Ordering;
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). Two points are equal
/// when both coordinates differ by less than
/// [`TOLERANCE`](crate::tolerance::TOLERANCE), so `==` is safe to use on
/// computed coordinates. The relation is not transitive; use
/// [`Point2::lexicographic_cmp`] when a total order is needed.
///
/// # Example
///
/// ```
/// use planekit::Point2;
///
/// let a: Point2<f64> = Point2::new(0.1 + 0.2, 1.0);
/// assert_eq!(a, Point2::new(0.3, 1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Orders points by x, then by y, treating tolerance-equal coordinates as equal.
    ///
    /// NaN coordinates compare as equal rather than panicking.
    pub fn lexicographic_cmp(&self, other: &Self) -> Ordering {
        cmp_coord(self.x, other.x).then_with(|| cmp_coord(self.y, other.y))
    }
}

#[inline]
fn cmp_coord<F: Float>(a: F, b: F) -> Ordering {
    if approx_eq(a, b) {
        Ordering::Equal
    } else {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

impl<F: Float> PartialEq for Point2<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

// Point - Vec2 = Point
impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<Vec2<F>> for Point2<F> {
    fn from(v: Vec2<F>) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_midpoint_and_lerp() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 2.0);
        assert_eq!(a.midpoint(b), Point2::new(2.0, 1.0));
        assert_eq!(a.lerp(b, 0.25), Point2::new(1.0, 0.5));
    }

    #[test]
    fn test_equality_within_tolerance() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        assert_eq!(a, Point2::new(1.0 + 5e-10, 1.0 - 5e-10));
        assert_ne!(a, Point2::new(1.0 + 2e-9, 1.0));
    }

    #[test]
    fn test_point_vector_arithmetic() {
        let p: Point2<f64> = Point2::new(1.0, 2.0);
        let v = Vec2::new(3.0, -1.0);
        assert_eq!(p + v, Point2::new(4.0, 1.0));
        assert_eq!(p - v, Point2::new(-2.0, 3.0));
        assert_eq!((p + v) - p, v);
    }

    #[test]
    fn test_lexicographic_cmp() {
        let a: Point2<f64> = Point2::new(0.0, 5.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 6.0);
        assert_eq!(a.lexicographic_cmp(&b), Ordering::Less);
        assert_eq!(a.lexicographic_cmp(&c), Ordering::Less);
        assert_eq!(b.lexicographic_cmp(&a), Ordering::Greater);
        assert_eq!(a.lexicographic_cmp(&Point2::new(1e-12, 5.0)), Ordering::Equal);
    }

    #[test]
    fn test_from_tuple() {
        let p: Point2<f32> = (1.5, -2.0).into();
        assert_eq!(p.x, 1.5);
        assert_eq!(p.y, -2.0);
    }
}
