//! Plain renderings of a result list

use crate::generator::CaptionVariant;

/// Separator placed between variants when copying all captions at once
pub const VARIANT_SEPARATOR: &str = "\n\n---\n\n";

/// Render variants as CSV with a `Variant,Caption,Hashtags,Full` header.
///
/// Indices are 1-based and every text cell is quoted.
pub fn to_csv(variants: &[CaptionVariant]) -> String {
    let mut lines = Vec::with_capacity(variants.len() + 1);
    lines.push("Variant,Caption,Hashtags,Full".to_string());

    for (index, variant) in variants.iter().enumerate() {
        lines.push(format!(
            "{},{},{},{}",
            index + 1,
            quote(&variant.caption),
            quote(variant.hashtags.as_deref().unwrap_or("")),
            quote(&variant.full),
        ));
    }

    lines.join("\n")
}

/// Join every variant's full text
pub fn join_full(variants: &[CaptionVariant]) -> String {
    variants
        .iter()
        .map(|variant| variant.full.as_str())
        .collect::<Vec<_>>()
        .join(VARIANT_SEPARATOR)
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
