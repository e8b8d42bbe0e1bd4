//! Data models for caption generation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Default number of variants per request
pub const DEFAULT_VARIANTS: usize = 3;

/// Target social platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
    X,
    Linkedin,
    Facebook,
    Pinterest,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Tiktok,
        Platform::X,
        Platform::Linkedin,
        Platform::Facebook,
        Platform::Pinterest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::X => "x",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
            Platform::Pinterest => "pinterest",
        }
    }

    /// Whether captions on this platform are split into paragraphs
    pub fn uses_paragraphs(&self) -> bool {
        match self {
            Platform::Instagram
            | Platform::Facebook
            | Platform::Linkedin
            | Platform::Pinterest => true,
            Platform::X | Platform::Tiktok => false,
        }
    }

    /// Whether the long narrative slot is allowed at `Length::Long`
    pub fn allows_narrative(&self) -> bool {
        matches!(self, Platform::Instagram | Platform::Facebook)
    }
}

/// Voice of the caption
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Opulent,
    Adventurous,
    Romantic,
    Family,
    Wellness,
    Minimal,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Opulent,
        Tone::Adventurous,
        Tone::Romantic,
        Tone::Family,
        Tone::Wellness,
        Tone::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Opulent => "opulent",
            Tone::Adventurous => "adventurous",
            Tone::Romantic => "romantic",
            Tone::Family => "family",
            Tone::Wellness => "wellness",
            Tone::Minimal => "minimal",
        }
    }
}

/// Requested caption length
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }
}

macro_rules! impl_option_str {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|option| option.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ValidationError::UnknownOption {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_option_str!(Platform, "platform");
impl_option_str!(Tone, "tone");
impl_option_str!(Length, "length");

/// A validated caption generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub destination: String,
    pub platform: Platform,
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub call_to_action: String,
    #[serde(default)]
    pub offers: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub hotel_name: String,
    #[serde(default)]
    pub experiences: String,
    #[serde(default = "default_true")]
    pub include_hashtags: bool,
    #[serde(default = "default_true")]
    pub include_emojis: bool,
    #[serde(default = "default_variants")]
    pub variants: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_true() -> bool { true }
fn default_variants() -> usize { DEFAULT_VARIANTS }

impl GenerationRequest {
    pub fn new(destination: impl Into<String>, platform: Platform, tone: Tone) -> Self {
        Self {
            destination: destination.into(),
            platform,
            tone,
            length: Length::default(),
            audience: String::new(),
            brand: String::new(),
            call_to_action: String::new(),
            offers: String::new(),
            season: String::new(),
            hotel_name: String::new(),
            experiences: String::new(),
            include_hashtags: true,
            include_emojis: true,
            variants: DEFAULT_VARIANTS,
            seed: None,
        }
    }

    pub fn with_length(mut self, length: Length) -> Self {
        self.length = length;
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_call_to_action(mut self, call_to_action: impl Into<String>) -> Self {
        self.call_to_action = call_to_action.into();
        self
    }

    pub fn with_offers(mut self, offers: impl Into<String>) -> Self {
        self.offers = offers.into();
        self
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    pub fn with_hotel_name(mut self, hotel_name: impl Into<String>) -> Self {
        self.hotel_name = hotel_name.into();
        self
    }

    pub fn with_experiences(mut self, experiences: impl Into<String>) -> Self {
        self.experiences = experiences.into();
        self
    }

    pub fn with_hashtags(mut self, include: bool) -> Self {
        self.include_hashtags = include;
        self
    }

    pub fn with_emojis(mut self, include: bool) -> Self {
        self.include_emojis = include;
        self
    }

    pub fn with_variants(mut self, variants: usize) -> Self {
        self.variants = variants;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One generated caption with its optional hashtag block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptionVariant {
    /// Narrative body, never contains hashtags
    pub caption: String,

    /// Space-separated hashtag tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<String>,

    /// Caption followed by a blank line and the hashtags, when present
    pub full: String,
}

impl CaptionVariant {
    pub fn new(caption: String, hashtags: Option<String>) -> Self {
        let full = match &hashtags {
            Some(tags) => format!("{}\n\n{}", caption, tags),
            None => caption.clone(),
        };
        Self { caption, hashtags, full }
    }
}
