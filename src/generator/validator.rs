//! Request validation

use tracing::{debug, warn};

use super::models::GenerationRequest;
use super::templates::SlotFields;
use crate::error::ValidationError;

/// Maximum destination length in characters
const MAX_DESTINATION_LENGTH: usize = 200;

/// Maximum length of any other text field
const MAX_FIELD_LENGTH: usize = 1000;

/// Input validator
pub struct InputValidator;

impl InputValidator {
    /// Drop control characters and collapse whitespace runs to single spaces
    pub fn sanitize_text(text: &str) -> String {
        text.split_whitespace()
            .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Validate and sanitize the destination
    pub fn validate_destination(destination: &str) -> Result<String, ValidationError> {
        let clean = Self::sanitize_text(destination);
        if clean.is_empty() {
            warn!("Validation failed: empty destination");
            return Err(ValidationError::EmptyDestination);
        }
        Self::check_length("destination", &clean, MAX_DESTINATION_LENGTH)?;
        Ok(clean)
    }

    /// Validate and sanitize an optional text field; empty is allowed
    pub fn validate_optional(field: &'static str, text: &str) -> Result<String, ValidationError> {
        let clean = Self::sanitize_text(text);
        Self::check_length(field, &clean, MAX_FIELD_LENGTH)?;
        Ok(clean)
    }

    /// Validate the requested variant count
    pub fn validate_variants(variants: i64) -> Result<usize, ValidationError> {
        if variants < 1 {
            warn!("Validation failed: variants must be at least 1 ({})", variants);
            return Err(ValidationError::InvalidVariantCount(variants));
        }
        usize::try_from(variants).map_err(|_| ValidationError::InvalidVariantCount(variants))
    }

    fn check_length(field: &'static str, text: &str, max: usize) -> Result<(), ValidationError> {
        let length = text.chars().count();
        if length > max {
            warn!("Validation failed: {} too long ({} > {})", field, length, max);
            return Err(ValidationError::FieldTooLong { field, length, max });
        }
        Ok(())
    }

    /// Validate a whole request, returning the sanitized fields for interpolation
    pub fn validate_request(request: &GenerationRequest) -> Result<SlotFields, ValidationError> {
        let destination = Self::validate_destination(&request.destination)?;
        let variants = i64::try_from(request.variants).unwrap_or(i64::MAX);
        Self::validate_variants(variants)?;

        let fields = SlotFields {
            destination,
            audience: Self::validate_optional("audience", &request.audience)?,
            brand: Self::validate_optional("brand", &request.brand)?,
            call_to_action: Self::validate_optional("callToAction", &request.call_to_action)?,
            offers: Self::validate_optional("offers", &request.offers)?,
            season: Self::validate_optional("season", &request.season)?,
            hotel_name: Self::validate_optional("hotelName", &request.hotel_name)?,
            experiences: Self::validate_optional("experiences", &request.experiences)?,
        };

        debug!("Request validation passed");
        Ok(fields)
    }
}
