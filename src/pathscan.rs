//! Contour walker (spec §4.3): scans the edge grid in row-major order and
//! follows closed contours with a 16x4 state-transition table, assigning
//! hole/outer polarity, bounding boxes, and hole→parent links.
//!
//! Ground truth: `examples/original_source/ImageTracer.cpp`, `_PathScan`,
//! and the `_pathscan_combined_lookup` table in `ImageTracer.h`.

use crate::error::{Result, TraceError};
use crate::geometry::{BBox, Point};
use crate::path::Path;

/// `PATHSCAN_COMBINED_LOOKUP[code][dir] = [next_code, next_dir, dx, dy]`.
/// Entries of `[-1, -1, -1, -1]` are invalid: a valid walk must never land on
/// one (codes 0 and 15 are interior, never contour cells).
const PATHSCAN_COMBINED_LOOKUP: [[[i32; 4]; 4]; 16] = [
    [[-1, -1, -1, -1], [-1, -1, -1, -1], [-1, -1, -1, -1], [-1, -1, -1, -1]], // 0 invalid
    [[0, 1, 0, -1], [-1, -1, -1, -1], [-1, -1, -1, -1], [0, 2, -1, 0]],
    [[-1, -1, -1, -1], [-1, -1, -1, -1], [0, 1, 0, -1], [0, 0, 1, 0]],
    [[0, 0, 1, 0], [-1, -1, -1, -1], [0, 2, -1, 0], [-1, -1, -1, -1]],
    [[-1, -1, -1, -1], [0, 0, 1, 0], [0, 3, 0, 1], [-1, -1, -1, -1]],
    [[13, 3, 0, 1], [13, 2, -1, 0], [7, 1, 0, -1], [7, 0, 1, 0]],
    [[-1, -1, -1, -1], [0, 1, 0, -1], [-1, -1, -1, -1], [0, 3, 0, 1]],
    [[0, 3, 0, 1], [0, 2, -1, 0], [-1, -1, -1, -1], [-1, -1, -1, -1]],
    [[0, 3, 0, 1], [0, 2, -1, 0], [-1, -1, -1, -1], [-1, -1, -1, -1]],
    [[-1, -1, -1, -1], [0, 1, 0, -1], [-1, -1, -1, -1], [0, 3, 0, 1]],
    [[11, 1, 0, -1], [14, 0, 1, 0], [14, 3, 0, 1], [11, 2, -1, 0]],
    [[-1, -1, -1, -1], [0, 0, 1, 0], [0, 3, 0, 1], [-1, -1, -1, -1]],
    [[0, 0, 1, 0], [-1, -1, -1, -1], [0, 2, -1, 0], [-1, -1, -1, -1]],
    [[-1, -1, -1, -1], [-1, -1, -1, -1], [0, 1, 0, -1], [0, 0, 1, 0]],
    [[0, 1, 0, -1], [-1, -1, -1, -1], [-1, -1, -1, -1], [0, 2, -1, 0]],
    [[-1, -1, -1, -1], [-1, -1, -1, -1], [-1, -1, -1, -1], [-1, -1, -1, -1]], // 15 invalid
];

/// Walk `layer` (mutated in place, as the original algorithm self-erases
/// visited edges) and extract every closed contour of at least `pathomit`
/// points.
pub fn path_scan(layer: &mut [i32], width: usize, height: usize, pathomit: usize) -> Result<Vec<Path>> {
    let mut paths = Vec::new();

    for j in 0..height {
        for i in 0..width {
            let code = layer[j * width + i];
            if code != 4 && code != 11 {
                continue;
            }

            let mut px = i as i32;
            let mut py = j as i32;
            let start_x = px;
            let start_y = py;
            let is_hole = code == 11;
            let mut dir = 1;

            let mut path = Path::new();
            path.boundingbox = BBox::point(px - 1, py - 1);
            path.is_hole = is_hole;

            loop {
                path.points.push(Point::new((px - 1) as f64, (py - 1) as f64));
                path.linesegments.push(-1);
                path.boundingbox.extend(px - 1, py - 1);

                let cell = layer[(py as usize) * width + (px as usize)];
                let lookup = PATHSCAN_COMBINED_LOOKUP[cell as usize][dir as usize];
                if lookup == [-1, -1, -1, -1] {
                    return Err(TraceError::CorruptWalk { code: cell, dir });
                }
                layer[(py as usize) * width + (px as usize)] = lookup[0];
                dir = lookup[1];
                px += lookup[2];
                py += lookup[3];

                if px == start_x && py == start_y {
                    break;
                }
            }

            if path.points.len() < pathomit {
                continue;
            }

            if is_hole {
                find_and_link_parent(&mut paths, path, width, height);
            } else {
                paths.push(path);
            }
        }
    }

    Ok(paths)
}

/// Find the smallest-bbox non-hole path that strictly contains `hole`'s
/// bbox, record the parent link on the hole, and push the hole. Runs after
/// the hole has fully closed, scanning only paths already accepted in this
/// same color layer (spec §4.3, §9 "hole parent scope").
fn find_and_link_parent(paths: &mut Vec<Path>, mut hole: Path, width: usize, height: usize) {
    let mut best_bbox = BBox::new(-1, -1, width as i32 + 1, height as i32 + 1);
    let mut best_idx: Option<usize> = None;

    for (idx, candidate) in paths.iter().enumerate() {
        if !candidate.is_hole
            && candidate.boundingbox.includes(&hole.boundingbox)
            && best_bbox.includes(&candidate.boundingbox)
        {
            best_idx = Some(idx);
            best_bbox = candidate.boundingbox;
        }
    }

    hole.parent = best_idx;
    let hole_idx = paths.len();
    if let Some(parent_idx) = best_idx {
        paths[parent_idx].hole_children.push(hole_idx);
    }
    paths.push(hole);
}
