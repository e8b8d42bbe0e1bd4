//! Template catalog
//!
//! Phrase banks and slot layouts as static data. A template pool for a
//! `(tone, length)` pair is the tone's phrase banks combined with the length's
//! layouts; nothing here branches on platform.

use super::models::{Length, Tone};

/// Kind of a caption slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Hook,
    Detail,
    Narrative,
    Stay,
    Experiences,
    Audience,
    Season,
    Offer,
    Brand,
    Keywords,
    CallToAction,
}

/// Paragraph a slot renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Opening,
    Body,
    Closing,
}

impl SlotKind {
    pub fn section(&self) -> Section {
        match self {
            SlotKind::Hook => Section::Opening,
            SlotKind::Offer | SlotKind::Brand | SlotKind::CallToAction => Section::Closing,
            _ => Section::Body,
        }
    }

    /// Slots kept when an X caption is squeezed into its budget
    pub fn is_essential(&self) -> bool {
        matches!(self, SlotKind::Hook | SlotKind::CallToAction)
    }
}

/// Position in a layout, before a phrase is chosen for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    pub kind: SlotKind,
    /// Soft limit for interpolated field values, in characters
    pub target_chars: usize,
    /// Whether this slot carries an emoji when emojis are enabled
    pub emoji: bool,
}

const fn slot(kind: SlotKind, target_chars: usize, emoji: bool) -> SlotSpec {
    SlotSpec { kind, target_chars, emoji }
}

/// Candidates for one `(tone, length)` combination
#[derive(Debug, Clone, Copy)]
pub struct TemplatePool {
    pub hooks: &'static [&'static str],
    pub details: &'static [&'static str],
    pub narratives: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub layouts: &'static [&'static [SlotSpec]],
}

/// Look up the template pool for a tone and length
pub fn pool(tone: Tone, length: Length) -> TemplatePool {
    let bank = tone_bank(tone);
    TemplatePool {
        hooks: bank.hooks,
        details: bank.details,
        narratives: bank.narratives,
        keywords: bank.keywords,
        layouts: layouts(length),
    }
}

/// Phrases shared by every tone for slots driven by a single optional field
pub fn field_phrases(kind: SlotKind) -> &'static [&'static str] {
    match kind {
        SlotKind::Stay => &[
            "Stay at {hotelName}",
            "Check in to {hotelName}",
            "Your base: {hotelName}",
        ],
        SlotKind::Experiences => &[
            "On the agenda: {experiences}",
            "Signature moments: {experiences}",
            "Picture this: {experiences}",
        ],
        SlotKind::Audience => &[
            "Curated for {audience}",
            "Made for {audience}",
            "Designed with {audience} in mind",
        ],
        SlotKind::Season => &[
            "Best enjoyed {season}",
            "Now booking for {season}",
            "Plan your escape for {season}",
        ],
        SlotKind::Offer => &[
            "Exclusive perk: {offers}",
            "Included: {offers}",
            "The extras: {offers}",
        ],
        SlotKind::Brand => &[
            "Curated by {brand}",
            "Planned with {brand}",
            "More escapes with {brand}",
        ],
        SlotKind::CallToAction => &["{callToAction}"],
        SlotKind::Hook | SlotKind::Detail | SlotKind::Narrative | SlotKind::Keywords => &[],
    }
}

/// Emoji palette for a tone
pub fn palette(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Opulent => &["✨", "🥂", "💎", "🍾"],
        Tone::Adventurous => &["🧭", "🌋", "🚁", "🌊"],
        Tone::Romantic => &["💕", "🌹", "🌅", "💫"],
        Tone::Family => &["🏝", "🎈", "🌞", "🍦"],
        Tone::Wellness => &["🌿", "🧘", "💆", "🍃"],
        Tone::Minimal => &["🤍", "🌙", "🕊", "🌾"],
    }
}

struct ToneBank {
    hooks: &'static [&'static str],
    details: &'static [&'static str],
    narratives: &'static [&'static str],
    keywords: &'static [&'static str],
}

fn tone_bank(tone: Tone) -> ToneBank {
    match tone {
        Tone::Opulent => ToneBank {
            hooks: &[
                "{destination}, reserved for those who expect more",
                "Gilded mornings in {destination}",
                "{destination} is best experienced in first class",
                "Where every detail of {destination} is polished to a shine",
            ],
            details: &[
                "Marble terraces, chilled champagne and views that stop conversation",
                "Private transfers, butler service and a table with the best light in town",
                "Silk-soft linens, sunset aperitivo and nothing left to chance",
            ],
            narratives: &[
                "Days unfold slowly here: a late breakfast overlooking the water, an afternoon of quiet indulgence, then dinner where the chef knows your name",
                "This is travel without compromise, where the itinerary bends around you and every door opens before you reach it",
            ],
            keywords: &[
                "{destination} luxury travel, five-star hotels and private experiences",
                "{destination} travel guide: luxury resorts, fine dining and VIP itineraries",
            ],
        },
        Tone::Adventurous => ToneBank {
            hooks: &[
                "{destination} is calling, and it does not whisper",
                "Trade the ordinary for {destination}",
                "Your next great story starts in {destination}",
                "Boots on, horizon wide: {destination} awaits",
            ],
            details: &[
                "Hidden coves, rugged trails and a summit worth every step",
                "Sunrise hikes, salt in the air and a guide who knows the secret routes",
                "Wild landscapes by day, a well-earned rest in comfort by night",
            ],
            narratives: &[
                "Spend the morning chasing ridgelines, the afternoon diving into water so clear it feels unreal, and the evening swapping stories under more stars than you knew existed",
                "Every day brings a new route to discover, from coastal paths to backcountry roads, with expert local guides and luxury waiting at the end of each trail",
            ],
            keywords: &[
                "{destination} adventure travel, outdoor escapes and bucket-list experiences",
                "{destination} itinerary ideas: hiking, diving and off-the-beaten-path luxury",
            ],
        },
        Tone::Romantic => ToneBank {
            hooks: &[
                "Fall in love all over again in {destination}",
                "{destination}, made for two",
                "Some places are meant to be shared, like {destination}",
                "Golden hour hits differently in {destination}",
            ],
            details: &[
                "Candlelit dinners, sea breezes and sunsets you will talk about for years",
                "Slow mornings, private terraces and a view made for toasting",
                "Hand-in-hand strolls through quiet streets after dark",
            ],
            narratives: &[
                "Picture long lunches that drift into evening, a private table as the sky turns pink, and nowhere to be but right here, together",
                "From the first glass of something sparkling to the last lingering sunset, every moment is designed for two",
            ],
            keywords: &[
                "{destination} romantic getaway, honeymoon ideas and couples retreats",
                "{destination} honeymoon inspiration: boutique hotels, sunset dinners and private escapes",
            ],
        },
        Tone::Family => ToneBank {
            hooks: &[
                "Big smiles, bigger memories in {destination}",
                "{destination} with the whole crew",
                "The family trip everyone will talk about: {destination}",
                "Make {destination} your family's favorite chapter",
            ],
            details: &[
                "Kids' clubs, spacious suites and pools that keep everyone happy",
                "Adventures for the little ones and downtime for the grown-ups",
                "Beach days, ice cream runs and connecting rooms done right",
            ],
            narratives: &[
                "Mornings at the kids' club, afternoons exploring together and evenings around a table where everyone finally agrees on dinner",
                "Thoughtful service means strollers appear before you ask, menus suit every age and there is always time for one more swim",
            ],
            keywords: &[
                "{destination} family vacation, kid-friendly resorts and multigenerational travel",
                "{destination} family travel ideas: suites, activities and easy luxury",
            ],
        },
        Tone::Wellness => ToneBank {
            hooks: &[
                "Breathe deeper in {destination}",
                "{destination}, the reset you have been waiting for",
                "Slow down and restore in {destination}",
                "Let {destination} bring you back to yourself",
            ],
            details: &[
                "Sunrise yoga, mineral pools and treatments rooted in local tradition",
                "Nourishing menus, restful suites and unhurried days",
                "Forest air, healing rituals and space to simply be",
            ],
            narratives: &[
                "Begin with a gentle practice as the light arrives, spend the afternoon between the spa and the water, and end the day rested in a way that lasts long after you return home",
                "Every element is designed to restore, from mindful menus to treatments drawn from local tradition and rooms made for deep, uninterrupted sleep",
            ],
            keywords: &[
                "{destination} wellness retreat, spa resorts and mindful travel",
                "{destination} wellness travel: yoga, spa rituals and restorative stays",
            ],
        },
        Tone::Minimal => ToneBank {
            hooks: &[
                "{destination}. Nothing more needed",
                "Quiet luxury in {destination}",
                "{destination}, simply",
                "Less noise, more {destination}",
            ],
            details: &[
                "Clean lines, soft light and room to think",
                "Considered design and calm, open space",
                "Good coffee, an empty horizon and time",
            ],
            narratives: &[
                "No crowded schedules and no excess, just thoughtful spaces, honest food and hours that belong entirely to you",
                "Strip travel back to what matters: a beautiful room, a view worth sitting with and the freedom to do very little",
            ],
            keywords: &[
                "{destination} design hotels, quiet luxury and slow travel",
                "{destination} minimalist travel: calm stays and considered design",
            ],
        },
    }
}

const SHORT_LAYOUTS: &[&[SlotSpec]] = &[
    &[
        slot(SlotKind::Hook, 80, true),
        slot(SlotKind::Stay, 40, false),
        slot(SlotKind::CallToAction, 60, true),
    ],
    &[
        slot(SlotKind::Hook, 80, true),
        slot(SlotKind::Offer, 50, false),
        slot(SlotKind::CallToAction, 60, true),
    ],
];

const MEDIUM_LAYOUTS: &[&[SlotSpec]] = &[
    &[
        slot(SlotKind::Hook, 100, true),
        slot(SlotKind::Detail, 120, false),
        slot(SlotKind::Stay, 60, false),
        slot(SlotKind::Experiences, 90, false),
        slot(SlotKind::Audience, 60, false),
        slot(SlotKind::Offer, 80, false),
        slot(SlotKind::CallToAction, 80, true),
    ],
    &[
        slot(SlotKind::Hook, 100, true),
        slot(SlotKind::Experiences, 90, false),
        slot(SlotKind::Detail, 120, false),
        slot(SlotKind::Stay, 60, false),
        slot(SlotKind::Season, 40, false),
        slot(SlotKind::Offer, 80, false),
        slot(SlotKind::CallToAction, 80, true),
    ],
];

const LONG_LAYOUTS: &[&[SlotSpec]] = &[
    &[
        slot(SlotKind::Hook, 120, true),
        slot(SlotKind::Detail, 140, false),
        slot(SlotKind::Narrative, 240, false),
        slot(SlotKind::Stay, 80, false),
        slot(SlotKind::Experiences, 160, false),
        slot(SlotKind::Audience, 80, false),
        slot(SlotKind::Season, 60, false),
        slot(SlotKind::Offer, 120, false),
        slot(SlotKind::Brand, 60, false),
        slot(SlotKind::CallToAction, 100, true),
    ],
    &[
        slot(SlotKind::Hook, 120, true),
        slot(SlotKind::Narrative, 240, false),
        slot(SlotKind::Experiences, 160, true),
        slot(SlotKind::Detail, 140, false),
        slot(SlotKind::Stay, 80, false),
        slot(SlotKind::Audience, 80, false),
        slot(SlotKind::Offer, 120, false),
        slot(SlotKind::Season, 60, false),
        slot(SlotKind::Brand, 60, false),
        slot(SlotKind::CallToAction, 100, true),
    ],
];

fn layouts(length: Length) -> &'static [&'static [SlotSpec]] {
    match length {
        Length::Short => SHORT_LAYOUTS,
        Length::Medium => MEDIUM_LAYOUTS,
        Length::Long => LONG_LAYOUTS,
    }
}

/// Target length for the pinterest keyword slot
pub const KEYWORDS_TARGET_CHARS: usize = 140;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pool_is_populated() {
        for tone in Tone::ALL {
            for length in Length::ALL {
                let pool = pool(tone, length);
                assert!(!pool.hooks.is_empty(), "{tone}/{length} hooks");
                assert!(!pool.details.is_empty(), "{tone}/{length} details");
                assert!(!pool.narratives.is_empty(), "{tone}/{length} narratives");
                assert!(!pool.keywords.is_empty(), "{tone}/{length} keywords");
                assert!(!pool.layouts.is_empty(), "{tone}/{length} layouts");
            }
            assert!(!palette(tone).is_empty());
        }
    }

    #[test]
    fn test_layouts_open_with_hook_and_close_with_call_to_action() {
        for length in Length::ALL {
            for layout in layouts(length) {
                assert_eq!(layout.first().map(|s| s.kind), Some(SlotKind::Hook));
                assert_eq!(layout.last().map(|s| s.kind), Some(SlotKind::CallToAction));
            }
        }
    }

    #[test]
    fn test_tone_phrases_mention_destination() {
        for tone in Tone::ALL {
            let bank = tone_bank(tone);
            for phrase in bank.hooks.iter().chain(bank.keywords) {
                assert!(phrase.contains("{destination}"), "{phrase}");
            }
        }
    }

    #[test]
    fn test_field_slots_have_phrases() {
        let kinds = [
            SlotKind::Stay,
            SlotKind::Experiences,
            SlotKind::Audience,
            SlotKind::Season,
            SlotKind::Offer,
            SlotKind::Brand,
            SlotKind::CallToAction,
        ];
        for kind in kinds {
            assert!(!field_phrases(kind).is_empty(), "{kind:?}");
        }
    }

    #[test]
    fn test_palette_has_no_ascii() {
        for tone in Tone::ALL {
            for emoji in palette(tone) {
                assert!(!emoji.is_ascii());
            }
        }
    }
}
