//! Property-based tests for the geometric predicates.
//!
//! - Orientation flips sign when two arguments are swapped
//! - Pairwise intersection tests are symmetric
//! - Undirected edges are equal and hash equally in both directions
//! - The polygon sweep agrees with an all-pairs check

use planekit::polygon::Polygon;
use planekit::predicates::{
    orient2d, orientation, polygon_polygon, polygon_polygon_sweep, segment_segment, Orientation,
};
use planekit::{Edge2, Point2, Segment2};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// =============================================================================
// TEST CONFIGURATION
// =============================================================================

fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point() -> impl Strategy<Value = Point2<f64>> {
    (finite_coordinate(), finite_coordinate()).prop_map(|(x, y)| Point2::new(x, y))
}

fn segment() -> impl Strategy<Value = Segment2<f64>> {
    (point(), point()).prop_map(|(a, b)| Segment2::new(a, b))
}

/// A star-shaped (hence simple) polygon around a random center.
fn star_polygon() -> impl Strategy<Value = Polygon<f64>> {
    (
        (0.0..20.0, 0.0..20.0),
        prop::collection::vec((0.1..0.9, 1.0..8.0), 3..12),
    )
        .prop_map(|((cx, cy), spokes): ((f64, f64), Vec<(f64, f64)>)| {
            let n = spokes.len() as f64;
            let vertices = spokes
                .iter()
                .enumerate()
                .map(|(i, &(jitter, radius))| {
                    let angle = (i as f64 + jitter) / n * std::f64::consts::TAU;
                    Point2::new(cx + radius * angle.cos(), cy + radius * angle.sin())
                })
                .collect();
            Polygon::new(vertices)
        })
}

fn hash_of(edge: &Edge2<f64>) -> u64 {
    let mut hasher = DefaultHasher::new();
    edge.hash(&mut hasher);
    hasher.finish()
}

fn brute_force_overlap(a: &Polygon<f64>, b: &Polygon<f64>) -> bool {
    let crossing = a
        .edges()
        .any(|ea| b.edges().any(|eb| segment_segment(&ea, &eb)));
    crossing || a.contains(b.vertices[0]) || b.contains(a.vertices[0])
}

// =============================================================================
// PREDICATE PROPERTIES
// =============================================================================

proptest! {
    /// Property: swapping two arguments negates the orientation.
    #[test]
    fn prop_orientation_antisymmetric(a in point(), b in point(), c in point()) {
        let abc = orientation(a, b, c);
        let bac = orientation(b, a, c);
        prop_assert!((abc + bac).abs() <= 1e-9 * (1.0 + abc.abs()));

        let swapped = orient2d(b, a, c, 1e-9);
        match orient2d(a, b, c, 1e-9) {
            Orientation::CounterClockwise => prop_assert_eq!(swapped, Orientation::Clockwise),
            Orientation::Clockwise => prop_assert_eq!(swapped, Orientation::CounterClockwise),
            Orientation::Collinear => prop_assert_eq!(swapped, Orientation::Collinear),
        }
    }

    /// Property: segment intersection does not depend on argument order or
    /// segment direction.
    #[test]
    fn prop_segment_segment_symmetric(s1 in segment(), s2 in segment()) {
        let expected = segment_segment(&s1, &s2);
        prop_assert_eq!(segment_segment(&s2, &s1), expected);
        prop_assert_eq!(segment_segment(&s1.reversed(), &s2), expected);
    }

    /// Property: an edge equals its reverse and hashes the same.
    #[test]
    fn prop_edge_symmetry(a in point(), b in point()) {
        let forward = Edge2::new(a, b);
        let backward = Edge2::new(b, a);
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    /// Property: the sweep finds an overlap exactly when some edge pair meets
    /// or one polygon contains the other.
    #[test]
    fn prop_sweep_matches_brute_force(a in star_polygon(), b in star_polygon()) {
        let expected = brute_force_overlap(&a, &b);
        prop_assert_eq!(polygon_polygon_sweep(&a, &b), expected);
        prop_assert_eq!(polygon_polygon_sweep(&b, &a), expected);
        prop_assert_eq!(polygon_polygon(&a, &b), expected);
    }
}
