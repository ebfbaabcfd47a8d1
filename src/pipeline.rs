//! The `trace` driver (spec §4.1, §4.6, §5): borders the pixel buffer, fans
//! out the four-stage pipeline across every color index present, and
//! assembles the per-color `Layer` list in ascending color-index order.
//!
//! Ground truth: `examples/original_source/ImageTracer.cpp`'s `_Trace`
//! driver. The OpenMP `#pragma omp parallel for` + `#pragma omp critical`
//! push-to-shared-vector idiom is replaced with the data-parallel,
//! pre-sized-output idiom the teacher uses in `enhanced_vectorizer.rs`
//! (`par_iter().flat_map().collect()`), which gets deterministic output
//! ordering for free instead of needing a critical section or a sort.

use rayon::prelude::*;

use crate::config::Options;
use crate::error::{Result, TraceError};
use crate::fit::batch_trace_paths;
use crate::internodes::inter_nodes;
use crate::layering::layering_step;
use crate::path::{Layer, Polygon};
use crate::pathscan::path_scan;

/// Index reserved for "outside the image" by the 1-pixel border this
/// pipeline adds; an input buffer that already uses it cannot be traced
/// unambiguously (spec §4.1, §7).
const BORDER_COLOR_INDEX: u8 = 255;

/// Trace every color index present in `pixels` into layered polygon lists.
///
/// `pixels` is a flat, `width * height` row-major buffer of color indices,
/// untouched by this call (a bordered copy is made internally). Returns one
/// `Layer` per color index that actually produced at least one surviving
/// contour, sorted ascending by index.
pub fn trace(pixels: &[u8], width: usize, height: usize, options: &Options) -> Result<Vec<Layer>> {
    if pixels.is_empty() || width == 0 || height == 0 {
        return Err(TraceError::EmptyImage);
    }

    let min = *pixels.iter().min().unwrap();
    let max = *pixels.iter().max().unwrap();

    // A single uniform color has nothing to layer: the reference tracer
    // treats this the same as an empty image rather than emitting one
    // all-covering layer.
    if min >= max {
        return Err(TraceError::EmptyImage);
    }
    if max == BORDER_COLOR_INDEX {
        return Err(TraceError::ReservedColorIndex);
    }

    let bw = width + 2;
    let bh = height + 2;
    let mut bordered = vec![BORDER_COLOR_INDEX; bw * bh];
    for row in 0..height {
        let src = row * width;
        let dst = (row + 1) * bw + 1;
        bordered[dst..dst + width].copy_from_slice(&pixels[src..src + width]);
    }

    let span = (max - min) as usize + 1;

    let layers: Vec<Layer> = (0..span)
        .into_par_iter()
        .map(|offset| {
            let color = min + offset as u8;
            let polygons = trace_one_color(&bordered, bw, bh, color, options)?;
            Ok(if polygons.is_empty() {
                None
            } else {
                Some(Layer {
                    color_index: color as i32,
                    polygons,
                })
            })
        })
        .collect::<Result<Vec<Option<Layer>>>>()?
        .into_iter()
        .flatten()
        .collect();

    Ok(layers)
}

fn trace_one_color(bordered: &[u8], bw: usize, bh: usize, color: u8, options: &Options) -> Result<Vec<Polygon>> {
    let mut layer = layering_step(bordered, bw, bh, color);

    let paths = path_scan(&mut layer, bw, bh, options.pathomit)?;
    if paths.is_empty() {
        return Ok(Vec::new());
    }

    let interpolated = inter_nodes(&paths, options);
    let traced = batch_trace_paths(&interpolated, options);

    Ok(traced.into_iter().map(|p| p.segments).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Segment;

    fn filled(width: usize, height: usize, color: u8) -> Vec<u8> {
        vec![color; width * height]
    }

    #[test]
    fn empty_image_is_rejected() {
        let opts = Options::default();
        assert!(matches!(trace(&[], 0, 0, &opts), Err(TraceError::EmptyImage)));
    }

    #[test]
    fn zero_dimensions_are_rejected_even_with_pixels() {
        let opts = Options::default();
        assert!(matches!(trace(&[1, 2], 0, 2, &opts), Err(TraceError::EmptyImage)));
    }

    #[test]
    fn reserved_border_color_in_input_is_rejected() {
        // needs at least two distinct colors so min < max and the
        // "uniform color" EmptyImage check doesn't fire first.
        let opts = Options::default();
        let mut px = filled(3, 3, 255);
        px[0] = 1;
        assert!(matches!(
            trace(&px, 3, 3, &opts),
            Err(TraceError::ReservedColorIndex)
        ));
    }

    #[test]
    fn a_uniform_single_color_image_is_rejected_as_empty() {
        // matches the reference tracer: min == max has nothing to layer.
        let opts = Options::default();
        let px = filled(4, 4, 1);
        assert!(matches!(trace(&px, 4, 4, &opts), Err(TraceError::EmptyImage)));
    }

    #[test]
    fn layers_come_back_sorted_ascending_by_color_index() {
        let opts = Options::default();
        let mut px = vec![0u8; 6 * 6];
        for y in 0..6 {
            for x in 0..6 {
                px[y * 6 + x] = if x < 3 { 2 } else { 5 };
            }
        }
        let layers = trace(&px, 6, 6, &opts).unwrap();
        let indices: Vec<i32> = layers.iter().map(|l| l.color_index).collect();
        let mut sorted = indices.clone();
        sorted.sort();
        assert_eq!(indices, sorted);
        // colors 3 and 4 never appear in the buffer and produce no contours
        assert_eq!(indices, vec![2, 5]);
    }

    #[test]
    fn interior_square_polygon_is_made_of_line_segments() {
        let opts = Options::default();
        let mut px = vec![0u8; 6 * 6];
        for y in 1..5 {
            for x in 1..5 {
                px[y * 6 + x] = 1;
            }
        }
        let layers = trace(&px, 6, 6, &opts).unwrap();
        let layer = layers.iter().find(|l| l.color_index == 1).unwrap();
        assert_eq!(layer.polygons.len(), 1);
        for seg in &layer.polygons[0] {
            assert!(matches!(seg, Segment::Line { .. }));
        }
    }

    #[test]
    fn short_noise_speck_is_dropped_by_pathomit() {
        let mut opts = Options::default();
        opts.pathomit = 8;
        let mut px = vec![0u8; 10 * 10];
        px[5 * 10 + 5] = 3;
        let layers = trace(&px, 10, 10, &opts).unwrap();
        // a color that produced no surviving contours gets no layer at all
        assert!(layers.iter().all(|l| l.color_index != 3));
    }
}
