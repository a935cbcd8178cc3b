use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ReviewError;

/// The named fragment lists of a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Opening,
    Quality,
    Achievement,
    Ending,
    Connector,
    Intensifier,
    Timeframe,
    Suffix,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Opening,
        Category::Quality,
        Category::Achievement,
        Category::Ending,
        Category::Connector,
        Category::Intensifier,
        Category::Timeframe,
        Category::Suffix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Opening => "openings",
            Category::Quality => "qualities",
            Category::Achievement => "achievements",
            Category::Ending => "endings",
            Category::Connector => "connectors",
            Category::Intensifier => "intensifiers",
            Category::Timeframe => "timeframes",
            Category::Suffix => "suffixes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot templates. Each review uses exactly one fragment from every list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Templates {
    #[serde(default)]
    pub openings: Vec<String>,
    #[serde(default)]
    pub qualities: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub endings: Vec<String>,
}

/// Optional connective fragments, included by coin flip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variations {
    #[serde(default)]
    pub connectors: Vec<String>,
    #[serde(default)]
    pub intensifiers: Vec<String>,
    #[serde(default)]
    pub timeframes: Vec<String>,
}

/// Read-only fragment data a generator draws from.
///
/// Missing lists deserialize as empty and are rejected by [`Corpus::validate`],
/// so a partial corpus file fails at construction rather than at generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub templates: Templates,
    #[serde(default)]
    pub variations: Variations,
    /// Closing exclamations appended when novelty cannot be reached.
    #[serde(default)]
    pub suffixes: Vec<String>,
}

impl Corpus {
    /// The corpus shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            templates: Templates {
                openings: owned(OPENINGS),
                qualities: owned(QUALITIES),
                achievements: owned(ACHIEVEMENTS),
                endings: owned(ENDINGS),
            },
            variations: Variations {
                connectors: owned(CONNECTORS),
                intensifiers: owned(INTENSIFIERS),
                timeframes: owned(TIMEFRAMES),
            },
            suffixes: owned(SUFFIXES),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn category(&self, category: Category) -> &[String] {
        match category {
            Category::Opening => &self.templates.openings,
            Category::Quality => &self.templates.qualities,
            Category::Achievement => &self.templates.achievements,
            Category::Ending => &self.templates.endings,
            Category::Connector => &self.variations.connectors,
            Category::Intensifier => &self.variations.intensifiers,
            Category::Timeframe => &self.variations.timeframes,
            Category::Suffix => &self.suffixes,
        }
    }

    /// Every category must hold at least one fragment.
    pub fn validate(&self) -> Result<(), ReviewError> {
        for category in Category::ALL {
            if self.category(category).is_empty() {
                return Err(ReviewError::EmptyCategory(category));
            }
        }
        Ok(())
    }

    /// Number of distinct slot combinations, ignoring variations and skeletons.
    pub fn slot_combinations(&self) -> usize {
        self.templates.openings.len()
            * self.templates.qualities.len()
            * self.templates.achievements.len()
            * self.templates.endings.len()
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const OPENINGS: &[&str] = &[
    "{businessName} delivered our app with perfection!",
    "Extremely satisfied with {businessName}'s work.",
    "Excellent team of developers at {businessName}!",
    "Outstanding service from {businessName}!",
    "The team at {businessName} is incredibly talented.",
    "{businessName}'s expertise is exceptional.",
    "Working with {businessName} was a game-changer.",
    "Fantastic experience with {businessName}!",
    "{businessName} exceeded all our expectations.",
    "Highly recommend {businessName} for development.",
    "Amazing work by the {businessName} team!",
    "{businessName} provided outstanding solutions.",
    "Impressed with {businessName}'s professionalism.",
    "{businessName} delivered beyond our expectations.",
    "Exceptional service from {businessName}!",
];

const QUALITIES: &[&str] = &[
    "Highly professional team and seamless experience.",
    "Their innovative ideas and execution are top-notch!",
    "Quick response, great communication, and outstanding delivery.",
    "They truly understand your business needs.",
    "Affordable, reliable, and professional service!",
    "They delivered a robust, scalable solution.",
    "Innovative solutions with excellent communication.",
    "Delivered on time, within budget, and superior quality.",
    "Technical skills and professional approach.",
    "Knowledgeable, responsive, and high-quality solutions.",
    "Attention to detail and commitment to quality.",
    "Creative problem-solving and technical expertise.",
    "Dedicated team with excellent project management.",
    "Modern technologies and cutting-edge solutions.",
    "Reliable support and maintenance services.",
];

const ACHIEVEMENTS: &[&str] = &[
    "Their attention to detail and commitment to quality is unmatched.",
    "They transformed our business with cutting-edge solutions.",
    "{businessName} exceeded all our expectations completely.",
    "They convert your vision into reality with smart solutions.",
    "Their expertise in modern technologies is impressive.",
    "Perfectly meets our business needs and requirements.",
    "Maintained excellent communication throughout the project.",
    "Amazing experience with superior quality delivery!",
    "Made the entire process smooth and efficient.",
    "Will definitely work with them again in future.",
    "Delivered innovative and scalable applications.",
    "Provided comprehensive solutions for our business.",
    "Enhanced our digital presence significantly.",
    "Streamlined our operations with smart technology.",
    "Created user-friendly and feature-rich applications.",
];

const ENDINGS: &[&str] = &[
    "Highly recommended for all your development needs!",
    "Best choice for professional development services.",
    "Five stars for their exceptional work and dedication.",
    "Thank you {businessName} for the amazing service!",
    "Looking forward to future collaborations with them.",
    "Definitely our go-to company for tech solutions.",
    "Worth every penny spent on their services.",
    "Professional team that delivers real results.",
    "Exceeded expectations in every aspect possible.",
    "Highly satisfied with the overall experience.",
    "Outstanding value for money and quality.",
    "Reliable partner for all our tech needs.",
    "Impressive work that speaks for itself.",
    "Committed to excellence and customer satisfaction.",
    "Truly a world-class development team.",
];

const CONNECTORS: &[&str] = &[
    "Additionally,",
    "Furthermore,",
    "Moreover,",
    "What's more,",
    "Also,",
    "Plus,",
    "In addition,",
    "Beyond that,",
    "Not only that,",
    "On top of this,",
];

const INTENSIFIERS: &[&str] = &[
    "absolutely",
    "truly",
    "genuinely",
    "remarkably",
    "exceptionally",
    "incredibly",
    "extremely",
    "thoroughly",
    "completely",
    "perfectly",
];

const TIMEFRAMES: &[&str] = &[
    "from day one",
    "throughout the project",
    "from start to finish",
    "during our collaboration",
    "in every interaction",
    "at every stage",
    "consistently",
    "without exception",
    "every step of the way",
    "from beginning to end",
];

const SUFFIXES: &[&str] = &[
    "Outstanding work!",
    "Exceptional service!",
    "Highly recommended!",
    "Amazing experience!",
    "Perfect execution!",
    "Great collaboration!",
    "Superb quality!",
    "Excellent results!",
    "Top-notch service!",
    "Brilliant work!",
];
