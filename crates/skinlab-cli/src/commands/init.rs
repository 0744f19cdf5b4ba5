use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use skinlab_core::config::{user_config_path, write_default_config};

/// Write a default `skinlab.yml`.
///
/// Goes to `~/skinlab/skinlab.yml` unless a path is given. Safe to run
/// multiple times - won't overwrite an existing file unless `force` is true.
pub fn cmd_init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => user_config_path().context("Could not determine home directory")?,
    };

    if init_config(&path, force)? {
        println!("Created: {}", path.display());
    } else {
        println!(
            "Skipped: {} (already exists, use --force to overwrite)",
            path.display()
        );
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<bool> {
    write_default_config(path, force)
        .with_context(|| format!("Failed to write config {}", path.display()))
}
