use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "img2vec")]
#[command(about = "Turns a raster image into a layered SVG of line/quadratic-spline polygons")]
#[command(version)]
pub struct Cli {
    /// Input image file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output SVG file (defaults to the input path with a .svg extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum image dimension (auto-resize larger images to prevent OOM)
    #[arg(long, default_value = "4096")]
    pub max_size: u32,

    /// Number of colors to quantize to before tracing (capped at 254)
    #[arg(short, long, default_value = "16")]
    pub colors: usize,

    /// Squared-distance error threshold for line fitting
    #[arg(long, default_value = "1.0")]
    pub ltres: f64,

    /// Squared-distance error threshold for quadratic-spline fitting
    #[arg(long, default_value = "1.0")]
    pub qtres: f64,

    /// Discard contours shorter than this many points
    #[arg(long, default_value = "8")]
    pub pathomit: usize,

    /// Disable right-angle corner preservation
    #[arg(long)]
    pub no_right_angle_enhance: bool,

    /// Load tracer options from a JSON config file instead of flags
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Check if a file extension is a supported image format.
pub fn is_supported_image(path: &std::path::Path) -> bool {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        matches!(
            ext.to_lowercase().as_str(),
            "bmp" | "png" | "jpg" | "jpeg" | "gif" | "ico" | "tiff" | "tif" | "webp" | "pnm" | "tga" | "dds" | "farbfeld"
        )
    } else {
        false
    }
}
