use std::path::PathBuf;

use anyhow::Result;
use skinlab_cli::format::format_hydration;
use skinlab_cli::parse_environment;
use skinlab_core::correct_hydration;

use super::{load_config, print_json};

/// Execute the hydration command from a measured roughness value
pub fn cmd_hydration(
    ra: f32,
    tewl: Option<f32>,
    humidity: Option<f32>,
    temperature: Option<f32>,
    json_output: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let handle = load_config(config.as_deref());
    let baseline = handle.config.defaults.environment_baseline;
    let environment = parse_environment(humidity, temperature, &baseline)?;

    let result = correct_hydration(ra, tewl, environment.as_ref(), &baseline)?;

    if json_output {
        print_json(&result)?;
    } else {
        println!("Hydration estimate for Ra {:.1}:", ra);
        print!("{}", format_hydration(&result));
    }

    Ok(())
}
