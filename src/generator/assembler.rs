//! Variant assembly

use tracing::debug;

use super::hashtags::HashtagComposer;
use super::models::{CaptionVariant, GenerationRequest};
use super::rng::SeededRng;
use super::templates::{self, SlotFields};
use super::validator::InputValidator;
use super::CaptionGenerator;
use crate::config::EngineConfig;
use crate::error::Result;

/// Caption engine holding immutable tunables; safe to share across threads
#[derive(Debug, Clone, Default)]
pub struct CaptionEngine {
    config: EngineConfig,
    composer: HashtagComposer,
}

impl CaptionEngine {
    pub fn new(config: EngineConfig) -> Self {
        let composer = HashtagComposer::new(config.hashtag_limits.clone());
        Self { config, composer }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn generate_variant(
        &self,
        request: &GenerationRequest,
        fields: &SlotFields,
        base_seed: u64,
        index: usize,
    ) -> Result<CaptionVariant> {
        let mut rng = SeededRng::for_variant(base_seed, index);

        let spec =
            templates::select_template(request.platform, request.tone, request.length, &mut rng)?;
        let caption = templates::render_caption(
            &spec,
            fields,
            request.platform,
            request.include_emojis,
            self.config.x_char_budget,
        )?;

        let hashtags = if request.include_hashtags {
            let tags = self.composer.compose(
                &fields.destination,
                &fields.brand,
                request.tone,
                request.platform,
                &mut rng,
            );
            (!tags.is_empty()).then(|| tags.join(" "))
        } else {
            None
        };

        Ok(CaptionVariant::new(caption, hashtags))
    }
}

impl CaptionGenerator for CaptionEngine {
    fn generate(&self, request: &GenerationRequest) -> Result<Vec<CaptionVariant>> {
        let fields = InputValidator::validate_request(request)?;

        debug!(
            "Generating {} {} caption(s) for {} ({}, seeded: {})",
            request.variants,
            request.tone,
            request.platform,
            request.length,
            request.seed.is_some()
        );

        let base_seed = request.seed.unwrap_or_else(SeededRng::entropy_seed);
        (0..request.variants)
            .map(|index| self.generate_variant(request, &fields, base_seed, index))
            .collect()
    }
}

/// Generate captions with the default engine configuration
pub fn generate_content(request: &GenerationRequest) -> Result<Vec<CaptionVariant>> {
    CaptionEngine::default().generate(request)
}
