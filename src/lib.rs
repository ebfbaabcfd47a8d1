//! vectrace - raster-to-vector tracer core
//!
//! Turns a color-indexed 2D pixel buffer into, per color index, a set of
//! closed polygons approximated by line and quadratic-Bézier segments.
//!
//! The pipeline runs in four stages per color layer:
//!
//! 1. [`layering`] — classify the 2x2 pixel neighborhood around every grid
//!    node into one of 16 edge-node codes.
//! 2. [`pathscan`] — walk the edge-node grid with a 16x4 transition table
//!    into closed contours, assigning hole/outer polarity and hole→parent
//!    links.
//! 3. [`internodes`] — interpolate each contour into midpoints labeled with
//!    one of 8 compass directions, optionally preserving right-angle
//!    corners.
//! 4. [`fit`] — recursively fit a line or quadratic spline to each maximal
//!    run of at most two direction labels.
//!
//! [`pipeline::trace`] drives all four stages across every color index
//! present in the input, in parallel, and returns one [`path::Layer`] per
//! color index in ascending order.
//!
//! ```rust
//! use vectrace::{trace, Options};
//!
//! let width = 4;
//! let height = 4;
//! // color 1 fills the interior 2x2, color 0 is the surrounding background
//! let pixels = vec![
//!     0, 0, 0, 0,
//!     0, 1, 1, 0,
//!     0, 1, 1, 0,
//!     0, 0, 0, 0,
//! ];
//! let layers = trace(&pixels, width, height, &Options::default())?;
//! assert_eq!(layers.len(), 2);
//! # Ok::<(), vectrace::TraceError>(())
//! ```

pub mod config;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod internodes;
pub mod layering;
pub mod path;
pub mod pathscan;
pub mod pipeline;

pub use config::Options;
pub use error::{Result, TraceError};
pub use geometry::{BBox, Point, Segment};
pub use path::{Layer, Path, Polygon};
pub use pipeline::trace;
