//! Basic usage example for the caption engine

use caption_engine::config::LoggingConfig;
use caption_engine::prelude::*;
use caption_engine::protocol::{join_full, to_csv};

fn main() -> Result<()> {
    // Initialize observability
    caption_engine::observability::init_observability(&LoggingConfig {
        level: "debug".to_string(),
        format: "pretty".to_string(),
    });

    println!("=== Caption Engine Basic Usage Example ===\n");

    println!("1. Building a request...");

    let request = GenerationRequest::new("Amalfi Coast, Italy", Platform::Instagram, Tone::Opulent)
        .with_length(Length::Medium)
        .with_audience("Modern luxury travelers")
        .with_brand("@LuxeVoyage")
        .with_hotel_name("Belmond Hotel Caruso")
        .with_experiences("Infinity pool at golden hour, lemon grove cocktails")
        .with_call_to_action("Tap to save and start planning")
        .with_variants(3)
        .with_seed(42);
    println!("   ✓ {} / {} / {}", request.platform, request.tone, request.length);

    println!("\n2. Generating variants...");

    let variants = generate_content(&request)?;
    for (i, variant) in variants.iter().enumerate() {
        println!("\n   Variant {}:", i + 1);
        println!("{}", variant.full);
    }

    println!("\n3. Same seed, same output...");

    let again = generate_content(&request)?;
    println!("   ✓ Reproducible: {}", again == variants);

    println!("\n4. CSV export:\n");
    println!("{}", to_csv(&variants));

    println!("\n5. Copy-all text:\n");
    println!("{}", join_full(&variants));

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
