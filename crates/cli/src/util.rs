// Path: crates/cli/src/util.rs
use anyhow::{Context, Result};
use dnote_types::config::HostConfig;
use std::path::Path;

/// Loads and validates a host config, or returns the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<HostConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => HostConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
