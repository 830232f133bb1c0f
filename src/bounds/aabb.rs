//! Axis-aligned bounding box.

use crate::error::GeomError;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Vec2};
use crate::tolerance::tolerance;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. Voronoi clipping and the
/// intersection predicates treat it as a closed region.
///
/// # Example
///
/// ```
/// use planekit::{Aabb2, Point2};
///
/// let bbox: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 4.0));
/// assert_eq!(bbox.max_extent(), 10.0);
/// assert!(bbox.contains_point(Point2::new(10.0, 4.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max; see [`Aabb2::try_new`].
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB, rejecting a `min` corner that exceeds `max`.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::InvalidBounds`] if `min.x > max.x` or `min.y > max.y`.
    pub fn try_new(min: Point2<F>, max: Point2<F>) -> Result<Self, GeomError> {
        if min.x > max.x || min.y > max.y {
            let f = |v: F| v.to_f64().unwrap_or(f64::NAN);
            return Err(GeomError::InvalidBounds {
                min_x: f(min.x),
                min_y: f(min.y),
                max_x: f(max.x),
                max_y: f(max.y),
            });
        }
        Ok(Self::new(min, max))
    }

    /// Creates an AABB from two arbitrary corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the size as a vector (width, height).
    #[inline]
    pub fn size(self) -> Vec2<F> {
        Vec2::new(self.width(), self.height())
    }

    /// The larger of width and height.
    #[inline]
    pub fn max_extent(self) -> F {
        self.width().max(self.height())
    }

    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    #[inline]
    pub fn area(self) -> F {
        self.width() * self.height()
    }

    /// Returns `true` if the box has zero width or height.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= tolerance() || self.height() <= tolerance()
    }

    /// Returns the box grown by `amount` on every side.
    #[inline]
    pub fn expanded(self, amount: F) -> Self {
        let d = Vec2::new(amount, amount);
        Self {
            min: self.min - d,
            max: self.max + d,
        }
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the smallest AABB containing both boxes.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        self.expand_to_include(other.min).expand_to_include(other.max)
    }

    /// Returns the intersection of two AABBs, if they overlap.
    pub fn intersection(self, other: Self) -> Option<Self> {
        let min = Point2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));

        if min.x <= max.x && min.y <= max.y {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Returns `true` if the point lies inside or on the boundary, within tolerance.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        let eps: F = tolerance();
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }

    /// Returns `true` if the boxes overlap or touch.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        let eps: F = tolerance();
        self.min.x <= other.max.x + eps
            && self.max.x >= other.min.x - eps
            && self.min.y <= other.max.y + eps
            && self.max.y >= other.min.y - eps
    }

    /// Returns the squared distance from a point to this AABB (0 inside).
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let dx = (self.min.x - p.x).max(p.x - self.max.x).max(F::zero());
        let dy = (self.min.y - p.y).max(p.y - self.max.y).max(F::zero());
        dx * dx + dy * dy
    }

    /// Slab test for the parametric line `origin + t * direction`.
    ///
    /// Returns the interval `(t_enter, t_exit)` over which the line lies in
    /// the box (grown by the tolerance), or `None` if it misses. A zero
    /// direction yields an unbounded interval when `origin` is inside.
    pub fn line_parameter_range(self, origin: Point2<F>, direction: Vec2<F>) -> Option<(F, F)> {
        let eps: F = tolerance();
        let mut t_enter = F::neg_infinity();
        let mut t_exit = F::infinity();

        let axes = [
            (origin.x, direction.x, self.min.x, self.max.x),
            (origin.y, direction.y, self.min.y, self.max.y),
        ];
        for (o, d, lo, hi) in axes {
            if d == F::zero() {
                if o < lo - eps || o > hi + eps {
                    return None;
                }
                continue;
            }
            let t1 = (lo - eps - o) / d;
            let t2 = (hi + eps - o) / d;
            t_enter = t_enter.max(t1.min(t2));
            t_exit = t_exit.min(t1.max(t2));
        }

        if t_enter > t_exit {
            None
        } else {
            Some((t_enter, t_exit))
        }
    }

    /// The four corners in counter-clockwise order, starting at `min`.
    #[inline]
    pub fn corners(self) -> [Point2<F>; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Returns the box as a counter-clockwise polygon.
    #[inline]
    pub fn to_polygon(self) -> Polygon<F> {
        Polygon::new(self.corners().to_vec())
    }
}

impl<F: Float> PartialEq for Aabb2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners() {
        let aabb: Aabb2<f64> = Aabb2::from_corners(Point2::new(10.0, 10.0), Point2::new(0.0, 0.0));
        assert_eq!(aabb.min, Point2::new(0.0, 0.0));
        assert_eq!(aabb.max, Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_try_new_rejects_inverted_bounds() {
        assert!(Aabb2::try_new(Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0)).is_ok());

        let err = Aabb2::try_new(Point2::new(5.0_f64, 0.0), Point2::new(1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            GeomError::InvalidBounds {
                min_x: 5.0,
                min_y: 0.0,
                max_x: 1.0,
                max_y: 1.0
            }
        );
    }

    #[test]
    fn test_equality_within_tolerance() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 3.0));
        assert_eq!(a, Aabb2::new(Point2::new(1e-12, 0.0), Point2::new(2.0, 3.0 - 1e-12)));
        assert_ne!(a, Aabb2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 3.5)));
    }

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min, Point2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));

        assert!(Aabb2::<f64>::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_dimensions() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 5.0);
        assert_eq!(aabb.area(), 50.0);
        assert_eq!(aabb.max_extent(), 10.0);
        assert_eq!(aabb.center(), Point2::new(5.0, 2.5));
        assert!(!aabb.is_empty());
        assert!(Aabb2::from_point(Point2::new(1.0_f64, 1.0)).is_empty());
    }

    #[test]
    fn test_expanded() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let grown = aabb.expanded(1.5);
        assert_eq!(grown.min, Point2::new(-1.5, -1.5));
        assert_eq!(grown.max, Point2::new(3.5, 3.5));
    }

    #[test]
    fn test_contains_point() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));

        assert!(aabb.contains_point(Point2::new(5.0, 5.0)));
        assert!(aabb.contains_point(Point2::new(0.0, 0.0)));
        assert!(aabb.contains_point(Point2::new(10.0 + 1e-12, 10.0)));
        assert!(!aabb.contains_point(Point2::new(-1.0, 5.0)));
        assert!(!aabb.contains_point(Point2::new(5.0, 11.0)));
    }

    #[test]
    fn test_intersects_and_union() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let b = Aabb2::new(Point2::new(5.0, 5.0), Point2::new(15.0, 15.0));
        let c = Aabb2::new(Point2::new(20.0, 20.0), Point2::new(30.0, 30.0));

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));

        let u = a.union(c);
        assert_eq!(u.min, Point2::new(0.0, 0.0));
        assert_eq!(u.max, Point2::new(30.0, 30.0));

        let i = a.intersection(b).unwrap();
        assert_eq!(i.min, Point2::new(5.0, 5.0));
        assert!(a.intersection(c).is_none());
    }

    #[test]
    fn test_distance_squared_to_point() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        assert_eq!(aabb.distance_squared_to_point(Point2::new(5.0, 5.0)), 0.0);
        assert_eq!(aabb.distance_squared_to_point(Point2::new(15.0, 5.0)), 25.0);
        assert_eq!(aabb.distance_squared_to_point(Point2::new(13.0, 14.0)), 25.0);
    }

    #[test]
    fn test_line_parameter_range() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));

        let (t0, t1) = aabb
            .line_parameter_range(Point2::new(-5.0, 5.0), Vec2::new(1.0, 0.0))
            .unwrap();
        assert!((t0 - 5.0).abs() < 1e-6);
        assert!((t1 - 15.0).abs() < 1e-6);

        assert!(aabb
            .line_parameter_range(Point2::new(-5.0, 20.0), Vec2::new(1.0, 0.0))
            .is_none());
        assert!(aabb
            .line_parameter_range(Point2::new(-5.0, 0.0), Vec2::new(1.0, -1.0))
            .is_none());
    }

    #[test]
    fn test_corners_and_polygon_are_ccw() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 3.0));
        let corners = aabb.corners();
        assert_eq!(corners[1], Point2::new(2.0, 0.0));
        assert_eq!(corners[3], Point2::new(0.0, 3.0));

        let poly = aabb.to_polygon();
        assert_eq!(poly.signed_area(), 6.0);
    }
}
