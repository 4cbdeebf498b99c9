use std::path::Path;

use anyhow::{Context, Result};

use ethereal_core::AppConfig;

pub fn run(config: &AppConfig, path: &Path, init: bool) -> Result<()> {
    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = AppConfig::default().to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    println!("# {}", path.display());
    if !path.exists() {
        println!("# (file not found, showing defaults)");
    }
    println!("{}", config.to_toml()?);
    println!("# log file: {}", config.log_path().display());

    Ok(())
}
