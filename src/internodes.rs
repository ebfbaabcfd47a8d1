//! Internode interpolator (spec §4.4): emits midpoints between consecutive
//! contour points, labels each outgoing segment with one of 8 compass
//! directions, and optionally preserves axis-aligned right-angle corners.
//!
//! Ground truth: `examples/original_source/ImageTracer.cpp`, `_InterNodes`,
//! `_TestRightAngle`, `_GetDirection`.

use crate::config::Options;
use crate::geometry::Point;
use crate::path::Path;

/// `DIRECTION_LOOKUP[sign(dx)+1][sign(dy)+1]`, dx = p1.x - p2.x, dy = p1.y - p2.y.
const DIRECTION_LOOKUP: [[i32; 3]; 3] = [
    [1, 0, 7], // dx=-1: dy=-1 -> SE, dy=0 -> E, dy=+1 -> NE
    [2, 8, 6], // dx= 0: dy=-1 -> S,  dy=0 -> C, dy=+1 -> N
    [3, 4, 5], // dx=+1: dy=-1 -> SW, dy=0 -> W, dy=+1 -> NW
];

fn sign(a: f64, b: f64) -> i32 {
    if a < b {
        -1
    } else if a > b {
        1
    } else {
        0
    }
}

fn direction(p1: Point, p2: Point) -> i32 {
    let sx = (sign(p1.x, p2.x) + 1) as usize;
    let sy = (sign(p1.y, p2.y) + 1) as usize;
    DIRECTION_LOOKUP[sx][sy]
}

/// Test whether the five cyclic points `{idx1..idx5}` form an axis-aligned
/// "T": the first three share one coordinate, the last three share the
/// perpendicular one.
fn is_right_angle(path: &Path, idx1: usize, idx2: usize, idx3: usize, idx4: usize, idx5: usize) -> bool {
    let p = &path.points;
    (p[idx3].x == p[idx1].x && p[idx3].x == p[idx2].x && p[idx3].y == p[idx4].y && p[idx3].y == p[idx5].y)
        || (p[idx3].y == p[idx1].y
            && p[idx3].y == p[idx2].y
            && p[idx3].x == p[idx4].x
            && p[idx3].x == p[idx5].x)
}

/// Interpolate every path into midpoint-based 8-direction polylines.
pub fn inter_nodes(paths: &[Path], options: &Options) -> Vec<Path> {
    paths.iter().map(|pa| inter_nodes_one(pa, options)).collect()
}

fn inter_nodes_one(pa: &Path, options: &Options) -> Path {
    let mut n = Path::new();
    n.boundingbox = pa.boundingbox;
    n.is_hole = pa.is_hole;
    n.parent = pa.parent;
    n.hole_children = pa.hole_children.clone();

    let palen = pa.points.len();
    if palen == 0 {
        return n;
    }

    for pcnt in 0..palen {
        let nextidx = (pcnt + 1) % palen;
        let nextidx2 = (pcnt + 2) % palen;
        let previdx = (pcnt + palen - 1) % palen;
        let previdx2 = (pcnt + palen - 2) % palen;

        let pt = (pa.points[pcnt] + pa.points[nextidx]) / 2.0;

        if options.rightangleenhance && is_right_angle(pa, previdx2, previdx, pcnt, nextidx, nextidx2)
        {
            if let Some(last) = n.linesegments.last_mut() {
                if let Some(&prev_point) = n.points.last() {
                    *last = direction(prev_point, pa.points[pcnt]);
                }
            }

            n.points.push(pa.points[pcnt]);
            n.linesegments.push(direction(pa.points[pcnt], pt));
        }

        n.points.push(pt);
        n.linesegments.push(direction(pt, (pa.points[nextidx] + pa.points[nextidx2]) / 2.0));
    }

    n
}
