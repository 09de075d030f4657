//! Shape morph construction.
//!
//! A morph is a fixed point-to-point correspondence between source ring(s)
//! and a target circle ring, established once at construction and sampled
//! cheaply per frame. Sampling never recomputes the correspondence, so
//! repeated sampling at the same `t` is bit-identical.
//!
//! Vertex counts are equalized by inserting midpoints on the longest edges;
//! existing vertices are never moved, so a sample at `t = 0` traces exactly
//! the source boundary and a sample at `t = 1` traces exactly the target.

use geo::Validation;
use geo_types::{Coord, LineString, Polygon};

use crate::foundation::core::{Point, Ring};
use crate::foundation::math;

/// Deterministic interpolator from `t` to one or more closed rings.
#[derive(Clone, Debug)]
pub struct MorphInterpolator {
    tracks: Vec<RingTrack>,
}

/// One source-to-target correspondence. `from` and `to` have equal length
/// and are stored open (no duplicate closing point).
#[derive(Clone, Debug)]
struct RingTrack {
    from: Vec<Point>,
    to: Vec<Point>,
}

/// Result of morph construction. Construction never fails: when a combined
/// multi-ring build is geometrically infeasible it degrades to the dominant
/// ring alone and reports the drop through `rings_dropped`.
#[derive(Clone, Debug)]
pub struct MorphBuild {
    pub interpolator: MorphInterpolator,
    pub rings_dropped: bool,
}

impl MorphInterpolator {
    /// Samples the morph at `t`, producing one closed ring per track.
    /// `t` is not clamped; callers pass values in `[0, 1]`.
    pub fn sample(&self, t: f64) -> Vec<Ring> {
        self.tracks
            .iter()
            .map(|track| {
                let mut points: Vec<Point> = track
                    .from
                    .iter()
                    .zip(&track.to)
                    .map(|(a, b)| math::lerp_point(*a, *b, t))
                    .collect();
                if let Some(first) = points.first().copied() {
                    points.push(first);
                }
                Ring::new(points)
            })
            .collect()
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}

/// Builds the interpolator for a county's morph-source rings and its target
/// circle. `dominant` indexes the dominant ring within `sources` and is the
/// fallback when a combined multi-ring construction is infeasible.
pub fn build_morph(sources: &[Ring], dominant: usize, target: &Ring) -> MorphBuild {
    if sources.len() <= 1 {
        let track = match sources.first() {
            Some(source) => build_track(source.open_points(), target.open_points()),
            // Nothing to morph from: hold the target in place.
            None => build_track(target.open_points(), target.open_points()),
        };
        return MorphBuild {
            interpolator: MorphInterpolator {
                tracks: vec![track],
            },
            rings_dropped: false,
        };
    }

    match try_combined(sources, target) {
        Some(tracks) => MorphBuild {
            interpolator: MorphInterpolator { tracks },
            rings_dropped: false,
        },
        None => {
            let dom = sources.get(dominant).unwrap_or(&sources[0]);
            MorphBuild {
                interpolator: MorphInterpolator {
                    tracks: vec![build_track(dom.open_points(), target.open_points())],
                },
                rings_dropped: true,
            }
        }
    }
}

/// Joint construction of all source rings into the single target circle.
/// The circle is sliced into per-ring wedges (contiguous arc spans closed
/// through the center) so the wedge union at `t = 1` tiles the circle.
/// Returns `None` when the ring set cannot support the construction.
fn try_combined(sources: &[Ring], target: &Ring) -> Option<Vec<RingTrack>> {
    let target_open = target.open_points();
    let segments = target_open.len();
    if segments < 3 || segments < sources.len() {
        return None;
    }

    let mut areas = Vec::with_capacity(sources.len());
    for ring in sources {
        let open = ring.open_points();
        if distinct_points(&open) < 3 || ring.area() <= f64::EPSILON || !is_planar_valid(&open) {
            return None;
        }
        areas.push(ring.area());
    }

    let center = math::polygon_centroid(&target_open);

    // Assign arcs in angular order of the source centroids so each ring
    // travels toward the nearest span of the circle.
    let angles: Vec<f64> = sources
        .iter()
        .map(|ring| {
            let c = ring.centroid();
            (c.y - center.y).atan2(c.x - center.x)
        })
        .collect();
    let mut order: Vec<usize> = (0..sources.len()).collect();
    order.sort_by(|&a, &b| {
        angles[a]
            .partial_cmp(&angles[b])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let anchor = nearest_vertex_by_angle(&target_open, center, angles[order[0]]);
    let counts = allocate_segments(&areas, &order, segments);

    let mut built: Vec<(usize, RingTrack)> = Vec::with_capacity(sources.len());
    let mut start = anchor;
    for (w, &ring_idx) in order.iter().enumerate() {
        let span = counts[w];
        let mut wedge = Vec::with_capacity(span + 2);
        wedge.push(center);
        for s in 0..=span {
            wedge.push(target_open[(start + s) % segments]);
        }
        start = (start + span) % segments;
        built.push((ring_idx, build_track(sources[ring_idx].open_points(), wedge)));
    }
    built.sort_by_key(|(idx, _)| *idx);
    Some(built.into_iter().map(|(_, track)| track).collect())
}

/// Fixed correspondence between two open vertex lists: winding normalized,
/// counts equalized by midpoint insertion, then the source rotated to the
/// cyclic offset minimizing summed squared distance.
fn build_track(mut from: Vec<Point>, mut to: Vec<Point>) -> RingTrack {
    if from.is_empty() {
        from = to.clone();
    }
    if to.is_empty() {
        to = from.clone();
    }
    if from.is_empty() {
        return RingTrack {
            from: vec![Point::ZERO],
            to: vec![Point::ZERO],
        };
    }

    let from_area = math::signed_area(&from);
    let to_area = math::signed_area(&to);
    if from_area * to_area < 0.0 {
        from.reverse();
    }

    while from.len() < to.len() {
        split_longest_edge(&mut from);
    }
    while to.len() < from.len() {
        split_longest_edge(&mut to);
    }

    let offset = best_rotation(&from, &to);
    from.rotate_left(offset);
    RingTrack { from, to }
}

/// Inserts the midpoint of the longest edge (ties break to the lowest
/// index), growing the list by one without moving any existing vertex.
fn split_longest_edge(points: &mut Vec<Point>) {
    match points.len() {
        0 => return,
        1 => {
            let p = points[0];
            points.push(p);
            return;
        }
        _ => {}
    }
    let mut best = 0;
    let mut best_len = f64::NEG_INFINITY;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        let len = (points[j] - points[i]).hypot2();
        if len > best_len {
            best_len = len;
            best = i;
        }
    }
    let j = (best + 1) % points.len();
    let mid = math::lerp_point(points[best], points[j], 0.5);
    points.insert(best + 1, mid);
}

/// Cyclic offset of `from` minimizing summed squared distance to `to`.
fn best_rotation(from: &[Point], to: &[Point]) -> usize {
    let n = from.len();
    let mut best = 0;
    let mut best_cost = f64::INFINITY;
    for k in 0..n {
        let mut cost = 0.0;
        for i in 0..n {
            cost += (from[(i + k) % n] - to[i]).hypot2();
        }
        if cost < best_cost {
            best_cost = cost;
            best = k;
        }
    }
    best
}

/// Splits `total` circle segments across wedges proportionally to ring area
/// (largest-remainder rounding, every wedge at least one segment). `order`
/// carries ring indices in wedge order.
fn allocate_segments(areas: &[f64], order: &[usize], total: usize) -> Vec<usize> {
    let n = order.len();
    let sum: f64 = areas.iter().sum();
    let extra = total - n;
    let mut counts = vec![1usize; n];
    if extra == 0 || sum <= 0.0 {
        return counts;
    }

    let mut remainders: Vec<(usize, f64)> = Vec::with_capacity(n);
    let mut assigned = 0usize;
    for (w, &ring_idx) in order.iter().enumerate() {
        let ideal = extra as f64 * areas[ring_idx] / sum;
        let floor = ideal.floor() as usize;
        counts[w] += floor;
        assigned += floor;
        remainders.push((w, ideal - floor as f64));
    }
    remainders.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    for &(w, _) in remainders.iter().take(extra - assigned) {
        counts[w] += 1;
    }
    counts
}

/// Index of the target vertex whose angle around `center` is closest to
/// `angle` (ties break to the lowest index).
fn nearest_vertex_by_angle(points: &[Point], center: Point, angle: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, p) in points.iter().enumerate() {
        let a = (p.y - center.y).atan2(p.x - center.x);
        let mut d = (a - angle).abs() % std::f64::consts::TAU;
        if d > std::f64::consts::PI {
            d = std::f64::consts::TAU - d;
        }
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

fn distinct_points(points: &[Point]) -> usize {
    let mut distinct: Vec<Point> = Vec::new();
    for p in points {
        if !distinct.iter().any(|q| (*p - *q).hypot() < 1e-9) {
            distinct.push(*p);
        }
        if distinct.len() >= 3 {
            break;
        }
    }
    distinct.len()
}

/// Planar validity (no self-intersection, well-formed closed boundary) via
/// the geo validation algorithms.
fn is_planar_valid(points: &[Point]) -> bool {
    let coords: Vec<Coord<f64>> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    Polygon::new(LineString::from(coords), vec![]).is_valid()
}

#[cfg(test)]
#[path = "../../tests/unit/morph/builder.rs"]
mod tests;
