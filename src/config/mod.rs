mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./tsharvest.toml", "~/.config/tsharvest/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.archive.segment_mime_types.is_empty() {
        anyhow::bail!("archive.segment_mime_types cannot be empty");
    }

    let names = [
        ("output.manifest_name", &config.output.manifest_name),
        ("output.concat_list_name", &config.output.concat_list_name),
        ("output.stream_name", &config.output.stream_name),
    ];

    for (key, name) in names {
        if name.trim().is_empty() {
            anyhow::bail!("{} cannot be empty", key);
        }
        if name.contains('/') || name.contains('\\') {
            anyhow::bail!("{} must be a file name, not a path: {:?}", key, name);
        }
    }

    if let Some(ref path) = config.tools.ffmpeg_path {
        if !path.exists() {
            tracing::warn!("Configured ffmpeg path does not exist: {:?}", path);
        }
    }

    Ok(())
}
