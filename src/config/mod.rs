//! Configuration management for the caption engine

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::generator::Platform;

pub mod loader;
pub mod validation;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tunables for caption assembly and hashtag composition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Character budget for X captions, measured without emoji
    #[serde(default = "default_x_char_budget")]
    pub x_char_budget: usize,

    /// Maximum hashtags per variant, per platform
    #[serde(default)]
    pub hashtag_limits: HashtagLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            x_char_budget: default_x_char_budget(),
            hashtag_limits: HashtagLimits::default(),
        }
    }
}

/// Per-platform hashtag caps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashtagLimits {
    #[serde(default = "default_instagram_limit")]
    pub instagram: usize,
    #[serde(default = "default_tiktok_limit")]
    pub tiktok: usize,
    #[serde(default = "default_x_limit")]
    pub x: usize,
    #[serde(default = "default_linkedin_limit")]
    pub linkedin: usize,
    #[serde(default = "default_facebook_limit")]
    pub facebook: usize,
    #[serde(default = "default_pinterest_limit")]
    pub pinterest: usize,
}

impl HashtagLimits {
    pub fn for_platform(&self, platform: Platform) -> usize {
        match platform {
            Platform::Instagram => self.instagram,
            Platform::Tiktok => self.tiktok,
            Platform::X => self.x,
            Platform::Linkedin => self.linkedin,
            Platform::Facebook => self.facebook,
            Platform::Pinterest => self.pinterest,
        }
    }
}

impl Default for HashtagLimits {
    fn default() -> Self {
        Self {
            instagram: default_instagram_limit(),
            tiktok: default_tiktok_limit(),
            x: default_x_limit(),
            linkedin: default_linkedin_limit(),
            facebook: default_facebook_limit(),
            pinterest: default_pinterest_limit(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, compact or pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_x_char_budget() -> usize { 220 }
fn default_instagram_limit() -> usize { 10 }
fn default_tiktok_limit() -> usize { 6 }
fn default_x_limit() -> usize { 2 }
fn default_linkedin_limit() -> usize { 5 }
fn default_facebook_limit() -> usize { 5 }
fn default_pinterest_limit() -> usize { 8 }
fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let config = loader::load_config(path)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Without a path only the built-in defaults and the environment apply.
    pub fn from_env<P: AsRef<Path>>(path: Option<P>) -> crate::error::Result<Self> {
        let config = loader::load_config_with_env(path)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Validate this configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        validation::validate_config(self)
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Self {
            engine: EngineConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
