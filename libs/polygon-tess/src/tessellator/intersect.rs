//! Self-intersection test over the projected rings.
//!
//! Any contact between two edges other than the shared endpoint of
//! neighbouring edges in the same ring counts: proper crossings, T-junctions,
//! collinear overlaps, and coincident vertices. Orientation signs come from
//! `robust::orient2d`, so the answer does not depend on rounding.

use glam::DVec2;
use robust::{orient2d, Coord};

#[derive(Debug, Clone, Copy)]
struct Segment {
    ring: usize,
    index: usize,
    ring_len: usize,
    a: DVec2,
    b: DVec2,
    min_x: f64,
    max_x: f64,
}

impl Segment {
    fn is_neighbour(&self, other: &Segment) -> bool {
        self.ring == other.ring
            && ((self.index + 1) % self.ring_len == other.index
                || (other.index + 1) % other.ring_len == self.index)
    }
}

/// Returns true if any two edges of `rings` touch or cross.
pub(crate) fn has_self_intersection(rings: &[Vec<DVec2>]) -> bool {
    let mut segments: Vec<Segment> = Vec::new();
    for (ring, points) in rings.iter().enumerate() {
        let n = points.len();
        for index in 0..n {
            let a = points[index];
            let b = points[(index + 1) % n];
            segments.push(Segment {
                ring,
                index,
                ring_len: n,
                a,
                b,
                min_x: a.x.min(b.x),
                max_x: a.x.max(b.x),
            });
        }
    }

    segments.sort_by(|s, t| s.min_x.total_cmp(&t.min_x));

    for (i, s) in segments.iter().enumerate() {
        for t in &segments[i + 1..] {
            if t.min_x > s.max_x {
                break;
            }
            let hit = if s.is_neighbour(t) {
                neighbours_fold(s, t)
            } else {
                segments_touch(s.a, s.b, t.a, t.b)
            };
            if hit {
                return true;
            }
        }
    }
    false
}

/// Neighbouring edges intersect only if they fold back over each other.
fn neighbours_fold(s: &Segment, t: &Segment) -> bool {
    // in a two-edge ring both ends are shared
    let (shared, p, q) = if s.b == t.a {
        (s.b, s.a, t.b)
    } else {
        (s.a, s.b, t.a)
    };
    orient(shared, p, q) == 0.0 && (p - shared).dot(q - shared) > 0.0
}

fn segments_touch(p1: DVec2, p2: DVec2, q1: DVec2, q2: DVec2) -> bool {
    let o1 = orient(p1, p2, q1);
    let o2 = orient(p1, p2, q2);
    let o3 = orient(q1, q2, p1);
    let o4 = orient(q1, q2, p2);

    if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
        return true;
    }

    (o1 == 0.0 && on_segment(p1, p2, q1))
        || (o2 == 0.0 && on_segment(p1, p2, q2))
        || (o3 == 0.0 && on_segment(q1, q2, p1))
        || (o4 == 0.0 && on_segment(q1, q2, p2))
}

/// For a point already known to be collinear with `a..b`.
fn on_segment(a: DVec2, b: DVec2, p: DVec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[inline]
fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}
