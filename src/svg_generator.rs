//! SVG path-string rendering for the demo binary (spec §2, §6). Turns the
//! tracer's own [`vectrace::Segment`] polygons into an SVG `d` attribute,
//! instead of the flat point lists the teacher's vectorizer produced.

pub use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use vectrace::{Layer, Segment};

/// Write one `<path>` per polygon, grouped by color, to a standalone SVG
/// document.
pub fn generate_svg(
    width: u32,
    height: u32,
    layers: &[Layer],
    palette: &[(u8, u8, u8)],
    output_path: &Path,
) -> Result<()> {
    let mut file = File::create(output_path)?;

    writeln!(
        file,
        r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        width, height, width, height
    )?;

    for layer in layers {
        let color = palette
            .get(layer.color_index as usize)
            .copied()
            .unwrap_or((0, 0, 0));
        let color_str = format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2);

        for polygon in &layer.polygons {
            let path_str = polygon_path_string(polygon);
            if path_str.is_empty() {
                continue;
            }
            writeln!(
                file,
                r#"  <path d="{}" fill="{}" stroke="none"/>"#,
                path_str, color_str
            )?;
        }
    }

    writeln!(file, "</svg>")?;
    Ok(())
}

/// Format a coordinate compactly: integer if whole, one decimal otherwise.
fn fmt_coord(v: f64) -> String {
    if (v - v.round()).abs() < 0.01 {
        format!("{}", v.round() as i32)
    } else {
        format!("{:.1}", v)
    }
}

fn fmt_point(p: vectrace::Point) -> String {
    format!("{} {}", fmt_coord(p.x), fmt_coord(p.y))
}

/// Render one polygon (a cyclic run of fitted segments) as a closed SVG
/// subpath: `M` to the first start point, `L`/`Q` for each segment, `Z`.
pub fn polygon_path_string(polygon: &[Segment]) -> String {
    if polygon.is_empty() {
        return String::new();
    }

    let mut path = format!("M{}", fmt_point(polygon[0].start()));
    for seg in polygon {
        match seg {
            Segment::Line { p2, .. } => {
                path.push_str(&format!("L{}", fmt_point(*p2)));
            }
            Segment::Quad { p2, p3, .. } => {
                path.push_str(&format!("Q{} {}", fmt_point(*p2), fmt_point(*p3)));
            }
        }
    }
    path.push('Z');
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectrace::Point;

    #[test]
    fn empty_polygon_renders_to_empty_string() {
        assert_eq!(polygon_path_string(&[]), "");
    }

    #[test]
    fn line_only_polygon_uses_m_l_z() {
        let square = vec![
            Segment::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            Segment::line(Point::new(10.0, 0.0), Point::new(10.0, 10.0)),
            Segment::line(Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
            Segment::line(Point::new(0.0, 10.0), Point::new(0.0, 0.0)),
        ];
        let s = polygon_path_string(&square);
        assert!(s.starts_with("M0 0"));
        assert!(s.contains("L10 0"));
        assert!(s.ends_with('Z'));
        assert!(!s.contains('Q'));
    }

    #[test]
    fn quad_segment_uses_q_with_control_point() {
        let polygon = vec![Segment::quad(
            Point::new(0.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 0.0),
        )];
        let s = polygon_path_string(&polygon);
        assert!(s.starts_with("M0 0"));
        assert!(s.contains("Q5 10 10 0"));
        assert!(s.ends_with('Z'));
    }

    #[test]
    fn fmt_coord_snaps_near_integers() {
        assert_eq!(fmt_coord(5.0), "5");
        assert_eq!(fmt_coord(5.004), "5");
        assert_eq!(fmt_coord(5.5), "5.5");
        assert_eq!(fmt_coord(-5.0), "-5");
    }

    #[test]
    fn generate_svg_writes_a_path_per_polygon() {
        use std::fs;
        let layers = vec![Layer {
            color_index: 0,
            polygons: vec![vec![
                Segment::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
                Segment::line(Point::new(10.0, 0.0), Point::new(10.0, 10.0)),
                Segment::line(Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
                Segment::line(Point::new(0.0, 10.0), Point::new(0.0, 0.0)),
            ]],
        }];
        let palette = vec![(255u8, 0u8, 0u8)];
        let out = std::path::PathBuf::from("/tmp/vectrace_test_output.svg");
        generate_svg(20, 20, &layers, &palette, &out).unwrap();
        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("<path"));
        assert!(content.contains("#ff0000"));
        let _ = fs::remove_file(&out);
    }
}
