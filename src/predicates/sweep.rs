//! Sweep-line crossing test between two polygons (Shamos–Hoey).
//!
//! Edges of both polygons are swept from left to right. Non-vertical edges
//! live in an active list ordered by their y at the sweep position; a new
//! edge is tested only against its neighbours in that list, and a removal
//! tests the two edges it separated. Vertical edges never enter the list and
//! are tested against every active edge spanning their y-range. Edges of the
//! same polygon are never tested against each other, so each input polygon is
//! assumed simple.

use super::pairs::{outline, segment_segment};
use crate::polygon::Polygon;
use crate::primitives::Segment2;
use crate::tolerance::tolerance;
use num_traits::Float;
use std::cmp::Ordering;
use tracing::trace;

/// Tests whether two simple polygons share a point, via a sweep over their edges.
///
/// Works for concave polygons in O((n + m) · k) where k is the size of the
/// active list. Containment without boundary contact is checked after the
/// sweep.
///
/// # Example
///
/// ```
/// use planekit::polygon::Polygon;
/// use planekit::predicates::polygon_polygon_sweep;
/// use planekit::Point2;
///
/// let notch = Polygon::new(vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(0.0, 4.0),
/// ]);
/// let inside_notch = Polygon::new(vec![
///     Point2::new(1.8, 3.0),
///     Point2::new(2.2, 3.0),
///     Point2::new(2.0, 3.5),
/// ]);
/// assert!(!polygon_polygon_sweep(&notch, &inside_notch));
/// ```
pub fn polygon_polygon_sweep<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if edges_cross(a, b) {
        return true;
    }
    a.contains(b.vertices[0]) || b.contains(a.vertices[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Insert,
    Vertical,
    Remove,
}

#[derive(Debug, Clone, Copy)]
struct Event<F> {
    key: F,
    kind: EventKind,
    edge: usize,
}

#[derive(Debug, Clone, Copy)]
struct SweepEdge<F> {
    /// Oriented so that `start` is the lexicographically smaller endpoint.
    seg: Segment2<F>,
    owner: usize,
}

impl<F: Float> SweepEdge<F> {
    fn is_vertical(&self) -> bool {
        (self.seg.end.x - self.seg.start.x).abs() <= tolerance()
    }

    fn slope(&self) -> F {
        let d = self.seg.direction();
        d.y / d.x
    }

    fn y_at(&self, x: F) -> F {
        if self.is_vertical() {
            return self.seg.start.y;
        }
        let x = x.max(self.seg.start.x).min(self.seg.end.x);
        self.seg.start.y + (x - self.seg.start.x) * self.slope()
    }
}

fn edges_cross<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    let eps = tolerance::<F>();
    let half = eps / (F::one() + F::one());

    let mut edges: Vec<SweepEdge<F>> = Vec::with_capacity(a.len() + b.len());
    for (owner, poly) in [a, b].into_iter().enumerate() {
        for seg in outline(poly) {
            if seg.is_degenerate() && poly.len() > 1 {
                continue;
            }
            let seg = match seg.start.lexicographic_cmp(&seg.end) {
                Ordering::Greater => seg.reversed(),
                _ => seg,
            };
            edges.push(SweepEdge { seg, owner });
        }
    }

    // Keys are nudged so that, at a shared x, inserts precede vertical checks
    // and both precede removals.
    let mut events: Vec<Event<F>> = Vec::with_capacity(edges.len() * 2);
    for (i, e) in edges.iter().enumerate() {
        if e.is_vertical() {
            events.push(Event {
                key: e.seg.start.x + half,
                kind: EventKind::Vertical,
                edge: i,
            });
        } else {
            events.push(Event {
                key: e.seg.start.x,
                kind: EventKind::Insert,
                edge: i,
            });
            events.push(Event {
                key: e.seg.end.x + eps,
                kind: EventKind::Remove,
                edge: i,
            });
        }
    }
    events.sort_by(|p, q| {
        p.key
            .partial_cmp(&q.key)
            .unwrap_or(Ordering::Equal)
            .then(p.kind.cmp(&q.kind))
    });
    trace!(edges = edges.len(), events = events.len(), "polygon sweep");

    let crosses = |i: usize, j: usize| {
        edges[i].owner != edges[j].owner && segment_segment(&edges[i].seg, &edges[j].seg)
    };

    let mut active: Vec<usize> = Vec::new();
    let mut verticals: Vec<usize> = Vec::new();

    for event in &events {
        let i = event.edge;
        let edge = edges[i];
        match event.kind {
            EventKind::Insert => {
                let x = edge.seg.start.x;
                let y = edge.seg.start.y;
                let slope = edge.slope();
                let pos = active
                    .iter()
                    .position(|&j| {
                        let yj = edges[j].y_at(x);
                        yj > y + eps || ((yj - y).abs() <= eps && edges[j].slope() > slope)
                    })
                    .unwrap_or(active.len());
                active.insert(pos, i);

                // Neighbours below and above, plus every edge tied at this y.
                let mut k = pos;
                while k > 0 {
                    k -= 1;
                    let j = active[k];
                    if crosses(i, j) {
                        return true;
                    }
                    if (edges[j].y_at(x) - y).abs() > eps {
                        break;
                    }
                }
                for &j in &active[pos + 1..] {
                    if crosses(i, j) {
                        return true;
                    }
                    if (edges[j].y_at(x) - y).abs() > eps {
                        break;
                    }
                }
            }
            EventKind::Vertical => {
                let x = edge.seg.start.x;
                let (lo, hi) = (edge.seg.start.y, edge.seg.end.y);
                for &j in &active {
                    let yj = edges[j].y_at(x);
                    if yj >= lo - eps && yj <= hi + eps && crosses(i, j) {
                        return true;
                    }
                }
                verticals.retain(|&j| (edges[j].seg.start.x - x).abs() <= eps);
                if verticals.iter().any(|&j| crosses(i, j)) {
                    return true;
                }
                verticals.push(i);
            }
            EventKind::Remove => {
                if let Some(pos) = active.iter().position(|&j| j == i) {
                    active.remove(pos);
                    if pos > 0 && pos < active.len() && crosses(active[pos - 1], active[pos]) {
                        return true;
                    }
                }
            }
        }
    }

    false
}
