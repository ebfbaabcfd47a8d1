//! Edge classifier (spec §4.2): turns a per-color binary mask into a
//! 16-valued edge-node grid via a 2×2 neighborhood code.
//!
//! Ground truth: `examples/original_source/ImageTracer.cpp`, `_LayeringStep`.
//!
//! ```text
//! Edge node types ( #: this layer or 1; .: not this layer or 0 )
//!
//! 12  ..  #.  .#  ##  ..  #.  .#  ##  ..  #.  .#  ##  ..  #.  .#  ##
//!
//! 48  ..  ..  ..  ..  .#  .#  .#  .#  #.  #.  #.  #.  ##  ##  ##  ##
//!     0   1   2   3   4   5   6   7   8   9   10  11  12  13  14  15
//! ```

/// Build the edge-node grid for `color_index` over a bordered pixel buffer
/// of `width x height`. The top row and left column are zero-filled; every
/// other cell `(row, col)` encodes the 2x2 neighborhood whose lower-right
/// corner is `(row, col)`.
pub fn layering_step(pixels: &[u8], width: usize, height: usize, color_index: u8) -> Vec<i32> {
    let mut layer = vec![0i32; width * height];

    for row in 1..height {
        for col in 1..width {
            let nw = pixels[(row - 1) * width + (col - 1)] == color_index;
            let ne = pixels[(row - 1) * width + col] == color_index;
            let sw = pixels[row * width + (col - 1)] == color_index;
            let se = pixels[row * width + col] == color_index;

            let code =
                (nw as i32) | ((ne as i32) << 1) | ((se as i32) << 2) | ((sw as i32) << 3);
            layer[row * width + col] = code;
        }
    }

    layer
}
