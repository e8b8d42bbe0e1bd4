//! Template selection and caption rendering

use super::catalog::{self, Section, SlotKind, KEYWORDS_TARGET_CHARS};
use super::models::{Length, Platform, Tone};
use super::rng::RandomSource;
use crate::error::{CaptionError, Result};

/// A layout slot with its phrase and emoji already chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub kind: SlotKind,
    pub pattern: &'static str,
    pub target_chars: usize,
    pub emoji: Option<&'static str>,
}

/// Ordered slots making up one caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    pub slots: Vec<Slot>,
}

/// Sanitized request fields available to slot patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotFields {
    pub destination: String,
    pub audience: String,
    pub brand: String,
    pub call_to_action: String,
    pub offers: String,
    pub season: String,
    pub hotel_name: String,
    pub experiences: String,
}

impl SlotFields {
    fn value(&self, placeholder: &str) -> Option<&str> {
        let value = match placeholder {
            "destination" => &self.destination,
            "audience" => &self.audience,
            "brand" => &self.brand,
            "callToAction" => &self.call_to_action,
            "offers" => &self.offers,
            "season" => &self.season,
            "hotelName" => &self.hotel_name,
            "experiences" => &self.experiences,
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// Choose the slots, phrases and emoji for one variant.
///
/// Every emoji slot draws from the palette whether or not emojis end up
/// rendered, so the emoji flag never shifts later random choices.
pub fn select_template<R: RandomSource>(
    platform: Platform,
    tone: Tone,
    length: Length,
    rng: &mut R,
) -> Result<TemplateSpec> {
    let pool = catalog::pool(tone, length);
    let palette = catalog::palette(tone);
    let layout = *rng.pick(pool.layouts)?;

    let mut slots = Vec::with_capacity(layout.len() + 1);
    for spec in layout {
        if spec.kind == SlotKind::Narrative && !platform.allows_narrative() {
            continue;
        }

        if spec.kind == SlotKind::CallToAction && platform == Platform::Pinterest {
            slots.push(Slot {
                kind: SlotKind::Keywords,
                pattern: *rng.pick(pool.keywords)?,
                target_chars: KEYWORDS_TARGET_CHARS,
                emoji: None,
            });
        }

        let candidates = match spec.kind {
            SlotKind::Hook => pool.hooks,
            SlotKind::Detail => pool.details,
            SlotKind::Narrative => pool.narratives,
            SlotKind::Keywords => pool.keywords,
            kind => catalog::field_phrases(kind),
        };
        let pattern = *rng.pick(candidates)?;
        let emoji = if spec.emoji {
            Some(*rng.pick(palette)?)
        } else {
            None
        };

        slots.push(Slot {
            kind: spec.kind,
            pattern,
            target_chars: spec.target_chars,
            emoji,
        });
    }

    Ok(TemplateSpec { slots })
}

/// Rendered sentence awaiting layout
#[derive(Debug, Clone)]
struct Sentence {
    kind: SlotKind,
    text: String,
    emoji: Option<&'static str>,
}

/// Interpolate and lay out a template into caption text.
///
/// Slots referencing an empty field are dropped. X captions are fitted to
/// `x_char_budget`, measured without emoji.
pub fn render_caption(
    spec: &TemplateSpec,
    fields: &SlotFields,
    platform: Platform,
    include_emojis: bool,
    x_char_budget: usize,
) -> Result<String> {
    let mut sentences = Vec::with_capacity(spec.slots.len());
    for slot in &spec.slots {
        if let Some(text) = interpolate(slot.pattern, fields, slot.target_chars)? {
            sentences.push(Sentence {
                kind: slot.kind,
                text,
                emoji: slot.emoji,
            });
        }
    }

    if platform == Platform::X {
        fit_to_budget(&mut sentences, x_char_budget);
    }

    let separator = if platform.uses_paragraphs() { "\n\n" } else { " " };
    let paragraphs: Vec<String> = [Section::Opening, Section::Body, Section::Closing]
        .into_iter()
        .map(|section| {
            sentences
                .iter()
                .filter(|s| s.kind.section() == section)
                .map(|s| match s.emoji {
                    Some(emoji) if include_emojis => format!("{} {}", s.text, emoji),
                    _ => s.text.clone(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect();

    Ok(paragraphs.join(separator))
}

/// Fill a pattern's placeholders; `None` when a referenced field is empty
fn interpolate(pattern: &str, fields: &SlotFields, target_chars: usize) -> Result<Option<String>> {
    let mut out = String::with_capacity(pattern.len() + 32);
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| {
            CaptionError::Internal(format!("unterminated placeholder in template '{}'", pattern))
        })?;
        let name = &after[..end];
        let raw = fields.value(name).ok_or_else(|| {
            CaptionError::Internal(format!(
                "unknown placeholder '{}' in template '{}'",
                name, pattern
            ))
        })?;

        let value = prepare_value(name, raw, target_chars);
        if value.is_empty() {
            return Ok(None);
        }
        out.push_str(&value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Ok(Some(finish_sentence(&out)))
}

fn prepare_value(name: &str, raw: &str, target_chars: usize) -> String {
    let value = raw.trim().trim_end_matches(['.', ',', ';', ':']).trim_end();
    match name {
        "experiences" | "offers" => fit_list(value, target_chars),
        _ => value.to_string(),
    }
}

/// Keep leading comma-separated items of `value` that fit in `target_chars`.
/// The first item is always kept whole.
fn fit_list(value: &str, target_chars: usize) -> String {
    if value.chars().count() <= target_chars {
        return value.to_string();
    }

    let mut items = value.split(',').map(str::trim).filter(|item| !item.is_empty());
    let mut kept = match items.next() {
        Some(first) => first.to_string(),
        None => return String::new(),
    };
    for item in items {
        if kept.chars().count() + 2 + item.chars().count() > target_chars {
            break;
        }
        kept.push_str(", ");
        kept.push_str(item);
    }
    kept
}

fn finish_sentence(text: &str) -> String {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let mut sentence: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => return String::new(),
    };
    if !sentence.ends_with(['.', '!', '?', '…']) {
        sentence.push('.');
    }
    sentence
}

fn plain_len(sentences: &[Sentence]) -> usize {
    let text: usize = sentences.iter().map(|s| s.text.chars().count()).sum();
    text + sentences.len().saturating_sub(1)
}

/// Drop optional sentences from the end, then the call to action, then cut
/// the hook at a word boundary
fn fit_to_budget(sentences: &mut Vec<Sentence>, budget: usize) {
    while plain_len(sentences) > budget {
        let droppable = sentences
            .iter()
            .rposition(|s| !s.kind.is_essential())
            .or_else(|| {
                sentences
                    .iter()
                    .rposition(|s| s.kind == SlotKind::CallToAction)
                    .filter(|_| sentences.len() > 1)
            });
        match droppable {
            Some(index) => {
                sentences.remove(index);
            }
            None => break,
        }
    }

    if plain_len(sentences) > budget {
        if let Some(first) = sentences.first_mut() {
            first.text = truncate_at_word(&first.text, budget);
        }
        sentences.truncate(1);
    }
}

fn truncate_at_word(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let head: String = text.chars().take(budget.saturating_sub(1)).collect();
    let cut = match head.rfind(char::is_whitespace) {
        Some(index) if index > 0 => &head[..index],
        _ => head.as_str(),
    };
    let mut out = cut.trim_end_matches([',', ';', ':', '.', ' ']).to_string();
    out.push('…');
    out
}
