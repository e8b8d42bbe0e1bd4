//! Wire-level tests: JSON envelopes, defaults and exports

use std::sync::Arc;

use caption_engine::config::{Config, EngineConfig, HashtagLimits};
use caption_engine::prelude::*;
use caption_engine::protocol::{join_full, to_csv};
use serde_json::{json, Value};

fn handler() -> RequestHandler {
    RequestHandler::new(Arc::new(CaptionEngine::default()))
}

fn respond(body: Value) -> Value {
    let response = handler().handle_json(&body.to_string());
    serde_json::to_value(response).unwrap()
}

#[test]
fn test_success_envelope_shape() {
    let response = respond(json!({
        "destination": "Santorini, Greece",
        "platform": "x",
        "tone": "romantic",
        "length": "short",
        "variants": 2,
        "seed": 42,
        "includeHashtags": true,
        "includeEmojis": false
    }));

    assert_eq!(response["ok"], json!(true));
    assert!(response.get("error").is_none());

    let result = response["result"].as_array().unwrap();
    assert_eq!(result.len(), 2);
    for variant in result {
        assert!(variant["caption"].is_string());
        assert!(variant["hashtags"].is_string());
        assert!(variant["full"].is_string());
    }
}

#[test]
fn test_defaults_apply() {
    let response = respond(json!({
        "destination": "Marrakech",
        "platform": "instagram",
        "tone": "opulent"
    }));

    let result = response["result"].as_array().unwrap();
    assert_eq!(result.len(), 3);
    for variant in result {
        assert!(variant["hashtags"].is_string());
    }
}

#[test]
fn test_hashtags_omitted_when_disabled() {
    let response = respond(json!({
        "destination": "Marrakech",
        "platform": "tiktok",
        "tone": "adventurous",
        "includeHashtags": false,
        "seed": 1
    }));

    for variant in response["result"].as_array().unwrap() {
        assert!(variant.get("hashtags").is_none());
        assert_eq!(variant["full"], variant["caption"]);
    }
}

#[test]
fn test_seeded_json_round_is_stable() {
    let body = json!({
        "destination": "Bali, Indonesia",
        "platform": "facebook",
        "tone": "wellness",
        "length": "long",
        "audience": "Couples seeking a reset",
        "experiences": "Sunrise yoga, rice terrace walks, Balinese massage",
        "variants": 3,
        "seed": 77
    });

    assert_eq!(respond(body.clone()), respond(body));
}

#[test]
fn test_option_values_are_case_insensitive() {
    let response = respond(json!({
        "destination": "Kyoto",
        "platform": "LinkedIn",
        "tone": " Minimal ",
        "length": "MEDIUM",
        "seed": 9
    }));
    assert_eq!(response["ok"], json!(true));
}

#[test]
fn test_negative_seed_is_accepted() {
    let response = respond(json!({
        "destination": "Reykjavik",
        "platform": "pinterest",
        "tone": "adventurous",
        "seed": -12
    }));
    assert_eq!(response["ok"], json!(true));
}

#[test]
fn test_invalid_inputs_produce_error_envelope() {
    let cases = [
        (json!({"platform": "x", "tone": "romantic"}), "destination"),
        (json!({"destination": "   ", "platform": "x", "tone": "romantic"}), "destination"),
        (json!({"destination": "Rome", "tone": "romantic"}), "platform"),
        (json!({"destination": "Rome", "platform": "x"}), "tone"),
        (json!({"destination": "Rome", "platform": "myspace", "tone": "romantic"}), "platform"),
        (json!({"destination": "Rome", "platform": "x", "tone": "grumpy"}), "tone"),
        (
            json!({"destination": "Rome", "platform": "x", "tone": "romantic", "length": "epic"}),
            "length",
        ),
        (
            json!({"destination": "Rome", "platform": "x", "tone": "romantic", "variants": 0}),
            "variant",
        ),
        (
            json!({"destination": "Rome", "platform": "x", "tone": "romantic", "variants": -2}),
            "variant",
        ),
        (json!({"destination": "Rome", "platform": "x", "tone": "romantic", "seed": 1.5}), "seed"),
    ];

    for (body, needle) in cases {
        let response = respond(body.clone());
        assert_eq!(response["ok"], json!(false), "{body}");
        assert!(response.get("result").is_none(), "{body}");

        let error = response["error"].as_str().unwrap();
        assert!(error.contains(needle), "{body}: {error}");
    }
}

#[test]
fn test_malformed_json_is_reported() {
    let response = handler().handle_json("{not json");
    assert!(!response.ok);
    assert!(response.result.is_none());
    assert!(response.error.is_some());
}

#[test]
fn test_engine_config_limits_are_honored() {
    let config = EngineConfig {
        x_char_budget: 220,
        hashtag_limits: HashtagLimits {
            instagram: 3,
            ..HashtagLimits::default()
        },
    };
    let handler = RequestHandler::new(Arc::new(CaptionEngine::new(config)));
    let input: GenerateInput = serde_json::from_value(json!({
        "destination": "Amalfi Coast, Italy",
        "platform": "instagram",
        "tone": "opulent",
        "brand": "LuxeVoyage",
        "seed": 4
    }))
    .unwrap();

    for variant in handler.generate(input).unwrap() {
        let hashtags = variant.hashtags.unwrap();
        let tokens: Vec<&str> = hashtags.split(' ').collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], "#AmalfiCoast");
        assert_eq!(tokens[1], "#LuxeVoyage");
    }
}

#[test]
fn test_exports_cover_every_variant() {
    let request = GenerationRequest::new("Tulum, Mexico", Platform::Instagram, Tone::Family)
        .with_variants(3)
        .with_seed(11);
    let variants = generate_content(&request).unwrap();

    let csv = to_csv(&variants);
    assert!(csv.starts_with("Variant,Caption,Hashtags,Full\n"));
    assert!(csv.contains("\n2,\""));
    assert!(csv.contains("\n3,\""));

    let joined = join_full(&variants);
    assert_eq!(joined.matches("\n\n---\n\n").count(), 2);
    assert!(joined.starts_with(&variants[0].full));
}

#[test]
fn test_default_config_is_valid() {
    let config = Config::default_config();
    assert!(config.validate().is_ok());
    assert_eq!(config.engine.x_char_budget, 220);
    assert_eq!(config.engine.hashtag_limits.x, 2);
}
