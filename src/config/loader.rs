//! Configuration loader with environment variable support

use super::Config;
use crate::error::Result;
use config::{Environment, File, FileFormat};
use std::path::Path;

/// Prefix for environment overrides, e.g. `CAPTION_ENGINE__ENGINE__X_CHAR_BUDGET`
const ENV_PREFIX: &str = "CAPTION_ENGINE";

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    Ok(cfg)
}

/// Load configuration from an optional TOML file with environment variable overrides
pub fn load_config_with_env<P: AsRef<Path>>(path: Option<P>) -> Result<Config> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::from(path.as_ref()).format(FileFormat::Toml));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    Ok(cfg)
}
