//! Configuration validation

use super::*;
use crate::error::{CaptionError, Result};

/// Smallest X budget that still leaves room for a hook sentence
const MIN_X_CHAR_BUDGET: usize = 40;

/// X's own post limit
const MAX_X_CHAR_BUDGET: usize = 280;

const MAX_HASHTAGS: usize = 30;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_engine_config(&config.engine)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate engine configuration
fn validate_engine_config(config: &EngineConfig) -> Result<()> {
    if config.x_char_budget < MIN_X_CHAR_BUDGET || config.x_char_budget > MAX_X_CHAR_BUDGET {
        return Err(CaptionError::Config(format!(
            "X character budget must be between {} and {} (got {})",
            MIN_X_CHAR_BUDGET, MAX_X_CHAR_BUDGET, config.x_char_budget
        )));
    }

    for platform in Platform::ALL {
        let limit = config.hashtag_limits.for_platform(platform);
        if limit == 0 || limit > MAX_HASHTAGS {
            return Err(CaptionError::Config(format!(
                "Hashtag limit for {} must be between 1 and {} (got {})",
                platform, MAX_HASHTAGS, limit
            )));
        }
    }

    // X guidance is one or two hashtags per post
    if config.hashtag_limits.x > 2 {
        return Err(CaptionError::Config(
            "Hashtag limit for x cannot exceed 2".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if config.level.trim().is_empty() {
        return Err(CaptionError::Config(
            "Log level cannot be empty".to_string()
        ));
    }

    if !matches!(config.format.as_str(), "json" | "compact" | "pretty") {
        return Err(CaptionError::Config(format!(
            "Log format must be json, compact or pretty (got '{}')",
            config.format
        )));
    }

    Ok(())
}
