//! The `Path` record threaded through path-scan → internode → fit (spec §3).

use crate::geometry::{BBox, Point, Segment};

/// A closed cyclic sequence of boundary points, plus whatever metadata each
/// pipeline stage has attached so far.
#[derive(Debug, Clone, Default)]
pub struct Path {
    pub points: Vec<Point>,
    /// One entry per point: the 8-direction label of its outgoing edge.
    /// `-1` until the internode stage assigns it.
    pub linesegments: Vec<i32>,
    pub boundingbox: BBox,
    pub is_hole: bool,
    /// Indices (into the same color layer's path list) of holes parented to
    /// this path. Only ever populated on non-hole paths.
    pub hole_children: Vec<usize>,
    /// Index (into the same color layer's path list) of this path's parent,
    /// if it is a hole with a qualifying parent.
    pub parent: Option<usize>,
    /// The fitted line/quad approximation of this path's boundary. Empty
    /// until the fit stage runs.
    pub segments: Vec<Segment>,
}

impl Path {
    pub fn new() -> Self {
        Self {
            boundingbox: BBox::new(0, 0, 0, 0),
            ..Default::default()
        }
    }
}

/// A polygon is simply the fitted approximation of one path.
pub type Polygon = Vec<Segment>;

/// The polygons obtained from one color index.
#[derive(Debug, Clone)]
pub struct Layer {
    pub color_index: i32,
    pub polygons: Vec<Polygon>,
}
