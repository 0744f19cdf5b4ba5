//! Parsing functions for CLI arguments.

use anyhow::{bail, Context, Result};
use skinlab_core::{BoundingBox, EnvironmentBaseline, EnvironmentReading};

/// Parse ROI string in format "x,y,width,height"
pub fn parse_roi(roi_str: &str) -> Result<BoundingBox> {
    let parts: Vec<&str> = roi_str.split(',').collect();
    if parts.len() != 4 {
        bail!("ROI must be in format x,y,width,height, got: {}", roi_str);
    }

    let mut values = [0u32; 4];
    for (value, (part, name)) in values
        .iter_mut()
        .zip(parts.iter().zip(["x coordinate", "y coordinate", "width", "height"]))
    {
        *value = part
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Invalid {}: {}", name, part))?;
    }

    let [x, y, width, height] = values;
    if width == 0 || height == 0 {
        bail!("ROI must have a non-zero width and height, got: {}", roi_str);
    }
    Ok(BoundingBox::new(x, y, width, height))
}

/// Build an environment reading from optional humidity and temperature.
///
/// Returns `None` when neither is given; a missing half is taken from the
/// baseline so it contributes no correction.
pub fn parse_environment(
    humidity: Option<f32>,
    temperature: Option<f32>,
    baseline: &EnvironmentBaseline,
) -> Result<Option<EnvironmentReading>> {
    if humidity.is_none() && temperature.is_none() {
        return Ok(None);
    }

    let humidity = humidity.unwrap_or(baseline.humidity);
    if !(0.0..=100.0).contains(&humidity) {
        bail!("Humidity must be between 0 and 100 percent, got {}", humidity);
    }
    let temperature = temperature.unwrap_or(baseline.temperature);
    if !temperature.is_finite() {
        bail!("Temperature must be a finite number of degrees C");
    }

    Ok(Some(EnvironmentReading {
        humidity,
        temperature,
    }))
}
