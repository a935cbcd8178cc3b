/// Replaces every occurrence of `placeholder` with `business_name`.
pub fn substitute(text: &str, placeholder: &str, business_name: &str) -> String {
    text.replace(placeholder, business_name)
}

/// PURE FUNCTION: Whitespace and punctuation cleanup applied to every review.
///
/// - whitespace runs become a single space
/// - whitespace before `.` or `,` is dropped
/// - runs of periods (also across whitespace) become one period
/// - runs of commas become one comma
/// - no leading or trailing whitespace
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }

        match ch {
            '.' | ',' => {
                pending_space = false;
                if out.ends_with(ch) {
                    continue;
                }
                out.push(ch);
            }
            _ => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(ch);
            }
        }
    }

    out
}

/// Uppercases the first character.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character of a fragment that continues a sentence.
///
/// Fragments led by the placeholder, the pronoun "I", or an all-caps word keep
/// their casing.
pub(crate) fn decapitalize(fragment: &str, placeholder: &str) -> String {
    if fragment.starts_with(placeholder) {
        return fragment.to_string();
    }

    let first_word = fragment.split_whitespace().next().unwrap_or("");
    let letters: Vec<char> = first_word.chars().filter(|c| c.is_alphabetic()).collect();
    let all_caps = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());
    if all_caps || first_word == "I" || first_word.starts_with("I'") {
        return fragment.to_string();
    }

    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
