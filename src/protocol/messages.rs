//! Wire request and response shapes

use serde::{Deserialize, Serialize};

use crate::error::{CaptionError, ValidationError};
use crate::generator::{
    CaptionVariant, GenerationRequest, InputValidator, Length, Platform, Tone, DEFAULT_VARIANTS,
};

/// Generation request as it arrives on the wire.
///
/// Every field is optional; unknown fields are ignored. Option fields stay
/// strings so an unrecognized value is reported by field name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInput {
    pub destination: Option<String>,
    pub platform: Option<String>,
    pub tone: Option<String>,
    pub length: Option<String>,
    pub audience: Option<String>,
    pub brand: Option<String>,
    pub call_to_action: Option<String>,
    pub offers: Option<String>,
    pub season: Option<String>,
    pub hotel_name: Option<String>,
    pub experiences: Option<String>,
    pub include_hashtags: Option<bool>,
    pub include_emojis: Option<bool>,
    pub variants: Option<i64>,
    pub seed: Option<serde_json::Number>,
}

impl TryFrom<GenerateInput> for GenerationRequest {
    type Error = CaptionError;

    fn try_from(input: GenerateInput) -> Result<Self, Self::Error> {
        let destination = input.destination.unwrap_or_default().trim().to_string();
        let platform: Platform = input
            .platform
            .ok_or(ValidationError::MissingField("platform"))?
            .parse()?;
        let tone: Tone = input
            .tone
            .ok_or(ValidationError::MissingField("tone"))?
            .parse()?;
        let length: Length = match input.length {
            Some(length) => length.parse()?,
            None => Length::default(),
        };
        let variants = match input.variants {
            Some(variants) => InputValidator::validate_variants(variants)?,
            None => DEFAULT_VARIANTS,
        };
        let seed = input.seed.as_ref().map(seed_from_number).transpose()?;

        Ok(GenerationRequest {
            destination,
            platform,
            tone,
            length,
            audience: input.audience.unwrap_or_default(),
            brand: input.brand.unwrap_or_default(),
            call_to_action: input.call_to_action.unwrap_or_default(),
            offers: input.offers.unwrap_or_default(),
            season: input.season.unwrap_or_default(),
            hotel_name: input.hotel_name.unwrap_or_default(),
            experiences: input.experiences.unwrap_or_default(),
            include_hashtags: input.include_hashtags.unwrap_or(true),
            include_emojis: input.include_emojis.unwrap_or(true),
            variants,
            seed,
        })
    }
}

/// Accept any JSON integer as a seed; negative values keep their bit pattern
fn seed_from_number(number: &serde_json::Number) -> Result<u64, ValidationError> {
    if let Some(seed) = number.as_u64() {
        return Ok(seed);
    }
    if let Some(seed) = number.as_i64() {
        return Ok(seed as u64);
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < 9.0e15 => Ok(value as i64 as u64),
        _ => Err(ValidationError::InvalidSeed(number.to_string())),
    }
}

/// Response envelope: `{ok: true, result}` or `{ok: false, error}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<CaptionVariant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn success(result: Vec<CaptionVariant>) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error.into()),
        }
    }
}
