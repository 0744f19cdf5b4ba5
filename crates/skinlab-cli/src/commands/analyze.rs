use std::path::PathBuf;

use anyhow::{Context, Result};
use skinlab_cli::format::format_report;
use skinlab_cli::parse_environment;
use skinlab_core::region::load_face_regions;
use skinlab_core::{analyze_face, AnalysisOptions, SkinZone};

use super::{load_config, load_image, print_json};

/// Execute the analyze command on one face image.
///
/// Face regions come from a JSON file with one `{x, y, width, height}` box
/// per zone. Output is either the full report as JSON or a text summary.
#[allow(clippy::too_many_arguments)]
pub fn cmd_analyze(
    input: PathBuf,
    regions: PathBuf,
    tewl: Option<f32>,
    humidity: Option<f32>,
    temperature: Option<f32>,
    texture_zone: Option<SkinZone>,
    json_output: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let handle = load_config(config.as_deref());
    let defaults = &handle.config.defaults;

    let image = load_image(&input)?;
    let face_regions = load_face_regions(&regions)
        .with_context(|| format!("Failed to load face regions {}", regions.display()))?;

    let environment = parse_environment(humidity, temperature, &defaults.environment_baseline)?;
    let mut options = AnalysisOptions::from_defaults(defaults)
        .with_tewl(tewl)
        .with_environment(environment);
    if let Some(zone) = texture_zone {
        options.texture_zone = zone;
    }

    let report = analyze_face(&image, &face_regions, &options)
        .with_context(|| format!("Failed to analyze {}", input.display()))?;

    if json_output {
        print_json(&report)?;
    } else {
        println!("Analyzing: {}\n", input.display());
        print!("{}", format_report(&report));
    }

    Ok(())
}
