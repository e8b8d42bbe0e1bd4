//! Request handler applying wire defaults in front of a generator

use std::sync::Arc;
use tracing::{debug, error, warn};

use super::messages::{GenerateInput, GenerateResponse};
use crate::error::{CaptionError, Result};
use crate::generator::{CaptionGenerator, CaptionVariant, GenerationRequest};

/// Default request handler
#[derive(Clone)]
pub struct RequestHandler {
    generator: Arc<dyn CaptionGenerator>,
}

impl RequestHandler {
    pub fn new(generator: Arc<dyn CaptionGenerator>) -> Self {
        Self { generator }
    }

    /// Apply defaults and run generation
    pub fn generate(&self, input: GenerateInput) -> Result<Vec<CaptionVariant>> {
        let request = GenerationRequest::try_from(input)?;
        self.generator.generate(&request)
    }

    /// Handle a decoded request, folding any failure into the envelope
    pub fn handle(&self, input: GenerateInput) -> GenerateResponse {
        match self.generate(input) {
            Ok(result) => {
                debug!("Generated {} variant(s)", result.len());
                GenerateResponse::success(result)
            }
            Err(e) => Self::failure(e),
        }
    }

    /// Handle a raw JSON request body
    pub fn handle_json(&self, body: &str) -> GenerateResponse {
        match serde_json::from_str::<GenerateInput>(body) {
            Ok(input) => self.handle(input),
            Err(e) => Self::failure(CaptionError::Serialization(e)),
        }
    }

    fn failure(err: CaptionError) -> GenerateResponse {
        if err.is_invalid_argument() {
            warn!("Rejected generation request: {}", err);
        } else {
            error!("Caption generation failed: {}", err);
        }
        GenerateResponse::failure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::CaptionEngine;

    struct FailingGenerator;

    impl CaptionGenerator for FailingGenerator {
        fn generate(&self, _request: &GenerationRequest) -> Result<Vec<CaptionVariant>> {
            Err(CaptionError::Internal("template catalog unavailable".to_string()))
        }
    }

    fn handler() -> RequestHandler {
        RequestHandler::new(Arc::new(CaptionEngine::default()))
    }

    #[test]
    fn test_handle_json_success() {
        let response = handler().handle_json(
            r#"{"destination":"Kyoto, Japan","platform":"pinterest","tone":"minimal",
                "variants":2,"seed":3}"#,
        );
        assert!(response.ok);
        assert_eq!(response.result.map(|r| r.len()), Some(2));
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_handle_json_malformed() {
        let response = handler().handle_json("{not json");
        assert!(!response.ok);
        assert!(response.error.unwrap().starts_with("Serialization error"));
    }

    #[test]
    fn test_handle_empty_destination() {
        let response =
            handler().handle_json(r#"{"destination":"   ","platform":"x","tone":"romantic"}"#);
        assert!(!response.ok);
        assert_eq!(
            response.error.as_deref(),
            Some("Invalid argument: destination must not be empty")
        );
        assert_eq!(response.result, None);
    }

    #[test]
    fn test_internal_failure_reported() {
        let handler = RequestHandler::new(Arc::new(FailingGenerator));
        let response =
            handler.handle_json(r#"{"destination":"Oslo","platform":"x","tone":"minimal"}"#);
        assert!(!response.ok);
        assert!(response.error.unwrap().contains("template catalog unavailable"));
    }
}
