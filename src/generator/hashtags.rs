//! Hashtag composition

use indexmap::IndexMap;

use super::models::{Platform, Tone};
use super::rng::RandomSource;
use crate::config::HashtagLimits;

/// Separators splitting a destination into separately tagged places
const DESTINATION_SEPARATORS: [char; 5] = [',', ';', '|', '/', '&'];

/// Normalize free text into a hashtag token.
///
/// Only ASCII letters and digits survive. Other letters are stripped in
/// place, any other character separates words. Multi-word input is
/// title-cased word by word. Returns `None` when nothing is left.
pub fn normalize_hashtag(raw: &str) -> Option<String> {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            current.push(c);
        } else if c.is_alphanumeric() {
            continue;
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    match words.len() {
        0 => None,
        1 => Some(format!("#{}", words[0])),
        _ => {
            let mut token = String::from("#");
            for word in &words {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    token.push(first.to_ascii_uppercase());
                    token.push_str(chars.as_str());
                }
            }
            Some(token)
        }
    }
}

/// Generic tags for a tone, before normalization.
///
/// Single-word entries are written capitalized so every tone tag comes out
/// in the same CamelCase as multi-word ones.
pub fn tone_pool(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Opulent => &[
            "luxury travel", "five star hotels", "luxury lifestyle",
            "travel in style", "luxury escapes", "jet set life",
        ],
        Tone::Adventurous => &[
            "adventure travel", "explore more", "Wanderlust",
            "off the beaten path", "travel adventures", "bucket list",
        ],
        Tone::Romantic => &[
            "romantic getaway", "Honeymoon", "couples travel",
            "romantic escape", "travel together", "luxury honeymoon",
        ],
        Tone::Family => &[
            "family travel", "family vacation", "travel with kids",
            "family getaway", "making memories", "kid friendly resorts",
        ],
        Tone::Wellness => &[
            "wellness retreat", "wellness travel", "spa escape",
            "mindful travel", "slow travel", "self care",
        ],
        Tone::Minimal => &[
            "minimal travel", "quiet luxury", "slow living",
            "design hotels", "travel minimal", "less but better",
        ],
    }
}

/// Builds per-variant hashtag sets under platform caps
#[derive(Debug, Clone, Default)]
pub struct HashtagComposer {
    limits: HashtagLimits,
}

impl HashtagComposer {
    pub fn new(limits: HashtagLimits) -> Self {
        Self { limits }
    }

    /// Compose a deduplicated hashtag set.
    ///
    /// The primary destination tag leads, the brand tag follows, and the rest
    /// (other destination parts, a travel tag, the tone pool) is shuffled
    /// before the platform cap is applied.
    pub fn compose<R: RandomSource>(
        &self,
        destination: &str,
        brand: &str,
        tone: Tone,
        platform: Platform,
        rng: &mut R,
    ) -> Vec<String> {
        let limit = self.limits.for_platform(platform);

        let places: Vec<&str> = destination
            .split(DESTINATION_SEPARATORS)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        let primary = places.first().and_then(|place| normalize_hashtag(place));
        let travel = places
            .first()
            .and_then(|place| normalize_hashtag(&format!("{} travel", place)));

        let mut rest: Vec<String> = places
            .iter()
            .skip(1)
            .filter_map(|place| normalize_hashtag(place))
            .chain(travel)
            .chain(tone_pool(tone).iter().filter_map(|tag| normalize_hashtag(tag)))
            .collect();
        rng.shuffle(&mut rest);

        // Keyed by lower-cased token so the first spelling wins
        let mut selected: IndexMap<String, String> = IndexMap::new();
        let candidates = primary
            .into_iter()
            .chain(normalize_hashtag(brand))
            .chain(rest);
        for token in candidates {
            if selected.len() >= limit {
                break;
            }
            selected.entry(token.to_ascii_lowercase()).or_insert(token);
        }

        selected.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::rng::SeededRng;

    fn is_valid_token(token: &str) -> bool {
        token.len() > 1
            && token.starts_with('#')
            && token[1..].chars().all(|c| c.is_ascii_alphanumeric())
    }

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize_hashtag("Amalfi Coast").as_deref(), Some("#AmalfiCoast"));
        assert_eq!(normalize_hashtag("Italy").as_deref(), Some("#Italy"));
        assert_eq!(normalize_hashtag("@LuxeVoyage").as_deref(), Some("#LuxeVoyage"));
        assert_eq!(normalize_hashtag("luxury travel").as_deref(), Some("#LuxuryTravel"));
        assert_eq!(normalize_hashtag("St. Barts").as_deref(), Some("#StBarts"));
        assert_eq!(normalize_hashtag("off-the-beaten path").as_deref(), Some("#OffTheBeatenPath"));
    }

    #[test]
    fn test_tone_tags_are_capitalized() {
        for tone in Tone::ALL {
            for tag in tone_pool(tone) {
                let token = normalize_hashtag(tag).unwrap();
                let first = token[1..].chars().next().unwrap();
                assert!(first.is_ascii_uppercase(), "{token}");
            }
        }
    }

    #[test]
    fn test_normalize_discards_empty() {
        assert_eq!(normalize_hashtag(""), None);
        assert_eq!(normalize_hashtag("  @#! "), None);
        assert_eq!(normalize_hashtag("東京"), None);
    }

    #[test]
    fn test_normalize_strips_non_ascii_letters() {
        assert_eq!(normalize_hashtag("Curaçao").as_deref(), Some("#Curaao"));
    }

    #[test]
    fn test_compose_leads_with_destination_then_brand() {
        let composer = HashtagComposer::default();
        let tags = composer.compose(
            "Amalfi Coast, Italy",
            "@LuxeVoyage",
            Tone::Opulent,
            Platform::Instagram,
            &mut SeededRng::new(11),
        );

        assert_eq!(tags[0], "#AmalfiCoast");
        assert_eq!(tags[1], "#LuxeVoyage");
        assert_eq!(tags.len(), 10);
        assert!(tags.contains(&"#Italy".to_string()));
        assert!(tags.iter().all(|t| is_valid_token(t)));
    }

    #[test]
    fn test_compose_respects_x_cap() {
        let composer = HashtagComposer::default();
        for seed in 0..25 {
            let tags = composer.compose(
                "Santorini, Greece",
                "",
                Tone::Romantic,
                Platform::X,
                &mut SeededRng::new(seed),
            );
            assert_eq!(tags.len(), 2);
            assert_eq!(tags[0], "#Santorini");
        }
    }

    #[test]
    fn test_compose_dedupes_case_insensitively() {
        let composer = HashtagComposer::default();
        let tags = composer.compose(
            "Bali, bali",
            "BALI",
            Tone::Wellness,
            Platform::Instagram,
            &mut SeededRng::new(2),
        );

        let lowered: Vec<String> = tags.iter().map(|t| t.to_ascii_lowercase()).collect();
        let unique: std::collections::HashSet<&String> = lowered.iter().collect();
        assert_eq!(unique.len(), tags.len());
        assert_eq!(lowered.iter().filter(|t| t.as_str() == "#bali").count(), 1);
    }

    #[test]
    fn test_compose_without_destination_tokens() {
        let composer = HashtagComposer::default();
        let mut rng = SeededRng::new(4);
        let tags = composer.compose("東京", "", Tone::Minimal, Platform::Linkedin, &mut rng);
        assert_eq!(tags.len(), 5);
        assert!(tags.iter().all(|t| is_valid_token(t)));
    }

    #[test]
    fn test_compose_is_deterministic_per_seed() {
        let composer = HashtagComposer::default();
        let compose = |seed| {
            let mut rng = SeededRng::new(seed);
            composer.compose("Kyoto, Japan", "", Tone::Minimal, Platform::Pinterest, &mut rng)
        };
        let a = compose(9);
        let b = compose(9);
        assert_eq!(a, b);
    }
}
