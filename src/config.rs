//! Tracer options (spec §6).

use serde::{Deserialize, Serialize};

/// Options controlling the fitting stage and noise rejection.
///
/// `ltres`/`qtres` are compared against **squared** distances directly —
/// counterintuitive, but load-bearing for bit-compatible behavior with the
/// reference algorithm (see spec §4.5 "Edge policy").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Squared-distance error threshold for line fitting.
    pub ltres: f64,
    /// Squared-distance error threshold for quadratic-spline fitting.
    pub qtres: f64,
    /// Contours shorter than this many points are discarded as noise.
    pub pathomit: usize,
    /// Preserve axis-aligned right-angle corners that midpointing would
    /// otherwise round off.
    pub rightangleenhance: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ltres: 1.0,
            qtres: 1.0,
            pathomit: 8,
            rightangleenhance: true,
        }
    }
}
