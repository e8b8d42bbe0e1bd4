//! Caption Engine - seeded caption and hashtag generation for travel social posts
//!
//! Turns a destination plus stylistic options (platform, tone, length and a
//! handful of optional details) into caption variants, each with an optional
//! hashtag block.
//!
//! ## Features
//!
//! - **Deterministic when seeded**: the same request and seed always produce
//!   byte-identical output
//! - **Platform aware**: X captions fit a character budget and carry at most
//!   two hashtags; Pinterest gets a keyword-rich line
//! - **Stateless**: every call builds its own randomness stream, so the engine
//!   can be shared freely across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use caption_engine::prelude::*;
//!
//! let request = GenerationRequest::new("Santorini, Greece", Platform::X, Tone::Romantic)
//!     .with_length(Length::Short)
//!     .with_variants(2)
//!     .with_seed(42);
//!
//! let variants = generate_content(&request)?;
//! assert_eq!(variants.len(), 2);
//! # Ok::<(), caption_engine::CaptionError>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod observability;
pub mod protocol;

pub use config::Config;
pub use error::{CaptionError, Result, ValidationError};
pub use generator::generate_content;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, EngineConfig};
    pub use crate::error::{CaptionError, Result};
    pub use crate::generator::{
        generate_content, CaptionEngine, CaptionGenerator, CaptionVariant, GenerationRequest,
        Length, Platform, Tone,
    };
    pub use crate::protocol::{GenerateInput, GenerateResponse, RequestHandler};
}
