use std::path::PathBuf;

use anyhow::{Context, Result};
use skinlab_cli::format::format_texture;
use skinlab_cli::parse_roi;
use skinlab_core::{analyze_texture, analyze_texture_multi_angle, GlcmParams};

use super::{load_config, load_image, print_json};

/// Execute the texture command on a whole image or a region of it.
///
/// GLCM parameters not given on the command line come from the config.
#[allow(clippy::too_many_arguments)]
pub fn cmd_texture(
    input: PathBuf,
    roi: Option<String>,
    levels: Option<usize>,
    distance: Option<u32>,
    angle: Option<f64>,
    multi_angle: bool,
    json_output: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let handle = load_config(config.as_deref());
    let defaults = &handle.config.defaults;

    let image = load_image(&input)?;
    let image = match roi.as_deref() {
        Some(roi_str) => {
            let bbox = parse_roi(roi_str)?;
            image
                .crop(&bbox)
                .with_context(|| format!("ROI {} does not fit the image", roi_str))?
        }
        None => image,
    };

    let params = GlcmParams::new(
        levels.unwrap_or(defaults.glcm_levels),
        distance.unwrap_or(defaults.glcm_distance),
        angle.unwrap_or(defaults.glcm_angle),
    )?;
    // An explicit angle wins over a config that asks for averaging
    let multi_angle = multi_angle || (angle.is_none() && defaults.multi_angle);

    let texture = if multi_angle {
        analyze_texture_multi_angle(&image, params.levels, params.distance)?
    } else {
        analyze_texture(&image, &params)?
    };

    if json_output {
        print_json(&texture)?;
    } else {
        println!("Texture: {} ({}x{})", input.display(), image.width(), image.height());
        print!("{}", format_texture(&texture));
    }

    Ok(())
}
