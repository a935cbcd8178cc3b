const MAPS_URL_PREFIXES: [&str; 4] = [
    "https://maps.google.com",
    "https://www.google.com/maps",
    "https://search.google.com/local/writereview",
    "https://goo.gl/maps",
];

/// URL path segment for a business: "Joe's Café & Bar" -> "joes-caf-bar".
///
/// Only ASCII letters, digits, whitespace and hyphens survive.
pub fn generate_slug(business_name: &str) -> String {
    let mut slug = String::with_capacity(business_name.len());
    let mut pending_hyphen = false;

    for ch in business_name.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

/// Accepts the Google Maps and review-link URL shapes a card may point to.
pub fn validate_google_maps_url(url: &str) -> bool {
    MAPS_URL_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}
