//! Property-based tests for the Voronoi builder.
//!
//! - Unbounded cells are exactly the cells of convex hull sites
//! - Bounded cells are ordered counter-clockwise
//! - Clipping stays inside the box and is idempotent
//! - Clipped cells partition the box

use planekit::hull::{convex_hull, point_on_hull_boundary};
use planekit::triangulation::{Voronoi, VoronoiEdge};
use planekit::{Aabb2, Point2};
use proptest::prelude::*;

// =============================================================================
// TEST CONFIGURATION
// =============================================================================

fn site() -> impl Strategy<Value = Point2<f64>> {
    (0.0..100.0, 0.0..100.0).prop_map(|(x, y): (f64, f64)| Point2::new(x, y))
}

fn sites(min: usize, max: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(site(), min..=max).prop_map(|points| {
        let mut unique: Vec<Point2<f64>> = Vec::with_capacity(points.len());
        for p in points {
            if !unique.contains(&p) {
                unique.push(p);
            }
        }
        unique
    })
}

fn clip_box() -> Aabb2<f64> {
    Aabb2::new(Point2::new(-10.0, -10.0), Point2::new(110.0, 110.0))
}

// =============================================================================
// VORONOI PROPERTIES
// =============================================================================

proptest! {
    /// Property: a cell is unbounded iff its site is on the convex hull.
    #[test]
    fn prop_unbounded_iff_on_hull(sites in sites(3, 30)) {
        let voronoi = Voronoi::from_sites(&sites);
        prop_assume!(!voronoi.delaunay().is_empty());

        let hull = convex_hull(&sites);
        for cell in voronoi.cells() {
            prop_assert_eq!(!cell.is_bounded, point_on_hull_boundary(&hull, cell.site));
        }
    }

    /// Property: bounded cells have non-negative signed area.
    #[test]
    fn prop_bounded_cells_ccw(sites in sites(3, 30)) {
        let voronoi = Voronoi::from_sites(&sites);
        for cell in voronoi.cells().iter().filter(|c| c.is_bounded) {
            prop_assert!(cell.polygon().signed_area() >= -1e-9);
        }
    }

    /// Property: one cell per site, and site indices follow the input.
    #[test]
    fn prop_cell_per_site(sites in sites(0, 30)) {
        let voronoi = Voronoi::from_sites(&sites);
        prop_assert_eq!(voronoi.cell_count(), sites.len());
        for (i, cell) in voronoi.cells().iter().enumerate() {
            prop_assert_eq!(cell.site_index, i);
            prop_assert_eq!(cell.site, sites[i]);
        }
    }

    /// Property: after clipping, every cell vertex and edge lies in the box.
    #[test]
    fn prop_clip_stays_in_box(sites in sites(2, 30)) {
        let mut voronoi = Voronoi::from_sites(&sites);
        let bbox = clip_box();
        voronoi.clip_to_bounds(bbox);

        for cell in voronoi.cells() {
            for &v in &cell.vertices {
                prop_assert!(bbox.contains_point(v));
            }
        }
        for edge in voronoi.edges() {
            match edge {
                VoronoiEdge::Finite(e) => {
                    prop_assert!(bbox.contains_point(e.p1));
                    prop_assert!(bbox.contains_point(e.p2));
                }
                other => prop_assert!(false, "infinite edge survived clipping: {:?}", other),
            }
        }
    }

    /// Property: an unbounded cell, once clipped, still contains its site.
    #[test]
    fn prop_clipped_unbounded_cell_contains_site(sites in sites(2, 30)) {
        let mut voronoi = Voronoi::from_sites(&sites);
        voronoi.clip_to_bounds(clip_box());
        for cell in voronoi.cells().iter().filter(|c| !c.is_bounded) {
            prop_assert!(cell.polygon().contains(cell.site));
        }
    }

    /// Property: clipping twice with the same box changes nothing.
    #[test]
    fn prop_clip_idempotent(sites in sites(2, 30)) {
        let mut voronoi = Voronoi::from_sites(&sites);
        let bbox = Aabb2::new(Point2::new(20.0, 20.0), Point2::new(80.0, 80.0));
        voronoi.clip_to_bounds(bbox);
        let cells = voronoi.cells().to_vec();
        let edges = voronoi.edges().to_vec();

        voronoi.clip_to_bounds(bbox);
        prop_assert_eq!(voronoi.cells(), cells.as_slice());
        prop_assert_eq!(voronoi.edges(), edges.as_slice());
    }

    /// Property: clipped cells tile the box, so their areas add up to its area.
    #[test]
    fn prop_clipped_cells_partition_box(sites in sites(2, 40)) {
        let mut voronoi = Voronoi::from_sites(&sites);
        let bbox = clip_box();
        voronoi.clip_to_bounds(bbox);

        let total: f64 = voronoi.cell_polygons().iter().map(|p| p.area()).sum();
        let expected = bbox.area();
        prop_assert!(
            (total - expected).abs() <= 1e-6 * expected,
            "cells cover {} of {}", total, expected
        );
    }
}
