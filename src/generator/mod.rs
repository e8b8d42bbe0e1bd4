//! Caption generation engine
//!
//! Pipeline per variant: a [`SeededRng`] stream drives the template
//! selector, then the hashtag composer; the assembler stitches the results
//! into [`CaptionVariant`]s.

pub mod assembler;
pub mod catalog;
pub mod hashtags;
pub mod models;
pub mod rng;
pub mod templates;
pub mod validator;

pub use assembler::{generate_content, CaptionEngine};
pub use hashtags::{normalize_hashtag, HashtagComposer};
pub use models::{CaptionVariant, GenerationRequest, Length, Platform, Tone, DEFAULT_VARIANTS};
pub use rng::{RandomSource, SeededRng};
pub use templates::{select_template, SlotFields, TemplateSpec};
pub use validator::InputValidator;

use crate::error::Result;

/// Trait for caption generation
pub trait CaptionGenerator: Send + Sync {
    /// Generate `request.variants` caption variants
    fn generate(&self, request: &GenerationRequest) -> Result<Vec<CaptionVariant>>;
}
