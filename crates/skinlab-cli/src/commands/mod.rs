//! Command implementations for the skinlab CLI.

mod analyze;
mod hydration;
mod init;
mod texture;

// Re-export all command functions
pub use analyze::cmd_analyze;
pub use hydration::cmd_hydration;
pub use init::cmd_init;
pub use texture::cmd_texture;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use skinlab_core::config::{load_analysis_config, AnalysisConfigHandle};
use skinlab_core::{decode_image, ImageBuffer};

/// Load the analysis config and report where it came from
fn load_config(custom_path: Option<&Path>) -> AnalysisConfigHandle {
    let handle = load_analysis_config(custom_path);
    handle.log_usage();
    handle
}

fn load_image(path: &Path) -> Result<ImageBuffer> {
    let image =
        decode_image(path).with_context(|| format!("Failed to decode {}", path.display()))?;
    log::info!("Decoded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", json);
    Ok(())
}
