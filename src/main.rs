mod cli;
mod image_processor;
mod svg_generator;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use vectrace::Options;

fn resolve_options(cli: &Cli) -> Result<Options> {
    if let Some(path) = &cli.config {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let options: Options = serde_json::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        return Ok(options);
    }

    Ok(Options {
        ltres: cli.ltres,
        qtres: cli.qtres,
        pathomit: cli.pathomit,
        rightangleenhance: !cli.no_right_angle_enhance,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli::is_supported_image(&cli.input) {
        eprintln!(
            "warning: {} doesn't look like a supported raster format, trying anyway",
            cli.input.display()
        );
    }

    let output_path = cli.output.clone().unwrap_or_else(|| {
        let mut path = cli.input.clone();
        path.set_extension("svg");
        path
    });

    let options = resolve_options(&cli)?;

    println!(
        "Tracing {} to {}...",
        cli.input.display(),
        output_path.display()
    );

    let image_data = image_processor::load_image(&cli.input)?;
    let image_data = image_processor::resize_if_needed(image_data, cli.max_size);
    let (indices, palette) = image_processor::quantize_to_indices(&image_data, cli.colors)?;

    let layers = vectrace::trace(&indices, image_data.width as usize, image_data.height as usize, &options)?;

    svg_generator::generate_svg(image_data.width, image_data.height, &layers, &palette, &output_path)?;

    println!("Done: {} color layers traced.", layers.len());
    Ok(())
}
