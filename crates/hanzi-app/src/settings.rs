use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use hanzi_config::Config;

/// Config from `path` when given, otherwise from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => load_config_file(path),
        None => Ok(Config::new()),
    }
}

fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Write the environment-derived config to `path`; never overwrites.
pub fn init_config_file(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("Config file {} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string_pretty(&Config::new())?)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    tracing::info!("Created config file {}", path.display());
    Ok(())
}
