use super::normalize::{capitalize, decapitalize};

/// One random draw from the corpus, before assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw<'a> {
    pub opening: &'a str,
    pub quality: &'a str,
    pub achievement: &'a str,
    pub ending: &'a str,
    pub connector: Option<&'a str>,
    pub intensifier: Option<&'a str>,
    pub timeframe: Option<&'a str>,
}

/// Sentence orderings a review can take.
///
/// The opening always leads and the ending always closes; the skeletons differ
/// in the order of quality and achievement and in which fragment each
/// variation attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skeleton {
    /// opening. INTENSIFIED quality <connector> EXTENDED achievement. ending
    IntensifiedQuality,
    /// opening <connector> INTENSIFIED achievement. EXTENDED quality. ending
    ConnectedAchievement,
    /// opening. EXTENDED quality <connector> INTENSIFIED achievement. ending
    ExtendedQuality,
    /// EXTENDED opening. INTENSIFIED quality <connector> achievement. ending
    ExtendedOpening,
    /// opening. INTENSIFIED achievement <connector> EXTENDED quality. ending
    IntensifiedAchievement,
}

impl Skeleton {
    pub const ALL: [Skeleton; 5] = [
        Skeleton::IntensifiedQuality,
        Skeleton::ConnectedAchievement,
        Skeleton::ExtendedQuality,
        Skeleton::ExtendedOpening,
        Skeleton::IntensifiedAchievement,
    ];

    /// Joins the drawn fragments into one string. Placeholders are left in place.
    pub fn assemble(self, draw: &Draw<'_>, placeholder: &str) -> String {
        let amp = |fragment: &str| intensify(fragment, draw.intensifier, placeholder);
        let ext = |fragment: &str| extend(fragment, draw.timeframe);
        let join = |left: &str, right: &str| connect(left, draw.connector, right, placeholder);

        let sentences = match self {
            Skeleton::IntensifiedQuality => [
                draw.opening.to_string(),
                join(&amp(draw.quality), &ext(draw.achievement)),
                draw.ending.to_string(),
            ],
            Skeleton::ConnectedAchievement => [
                join(draw.opening, &amp(draw.achievement)),
                ext(draw.quality),
                draw.ending.to_string(),
            ],
            Skeleton::ExtendedQuality => [
                draw.opening.to_string(),
                join(&ext(draw.quality), &amp(draw.achievement)),
                draw.ending.to_string(),
            ],
            Skeleton::ExtendedOpening => [
                ext(draw.opening),
                join(&amp(draw.quality), draw.achievement),
                draw.ending.to_string(),
            ],
            Skeleton::IntensifiedAchievement => [
                draw.opening.to_string(),
                join(&amp(draw.achievement), &ext(draw.quality)),
                draw.ending.to_string(),
            ],
        };

        sentences.join(" ")
    }
}

/// "Good." + "truly" -> "Truly good."
fn intensify(fragment: &str, intensifier: Option<&str>, placeholder: &str) -> String {
    match intensifier.map(str::trim).filter(|w| !w.is_empty()) {
        Some(word) => format!("{} {}", capitalize(word), decapitalize(fragment.trim(), placeholder)),
        None => fragment.to_string(),
    }
}

/// "Great." + "from day one" -> "Great from day one."
fn extend(fragment: &str, timeframe: Option<&str>) -> String {
    let timeframe = match timeframe.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => t,
        None => return fragment.to_string(),
    };

    let body = fragment.trim_end();
    let stem = body.trim_end_matches(|c: char| matches!(c, '.' | '!' | '?'));
    let terminal = match &body[stem.len()..] {
        "" => ".",
        punctuation => punctuation,
    };
    format!("{} {}{}", stem, timeframe, terminal)
}

/// "A." + "Also," + "Great." -> "A. Also, great."
fn connect(left: &str, connector: Option<&str>, right: &str, placeholder: &str) -> String {
    match connector.map(str::trim).filter(|c| !c.is_empty()) {
        Some(connector) => format!("{} {} {}", left, connector, decapitalize(right.trim(), placeholder)),
        None => format!("{} {}", left, right),
    }
}
