use regex::Regex;
use std::sync::OnceLock;

// Word boundaries are ASCII-only: a title next to an accented letter is still a title.
fn honorifics() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(?-u:\b)(Mr|Ms|Mrs|Dr|Hon|Senator|Member)(?-u:\b)")
            .expect("honorific pattern")
    })
}

fn post_nominals() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(?-u:\b)(MP|AM|AO|OBE|QC|KC)(?-u:\b)").expect("post-nominal pattern")
    })
}

/// Last name token after dropping titles and post-nominals, lower-cased.
///
/// Returns an empty string when nothing is left.
pub fn extract_surname(full_name: &str) -> String {
    let without_titles = honorifics().replace_all(full_name, "");
    let cleaned = post_nominals().replace_all(&without_titles, "");
    cleaned
        .split_whitespace()
        .last()
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Lower-cases and keeps only `a`-`z`.
pub fn normalize_key(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// The House register lookup key for a display name.
pub fn surname_key(full_name: &str) -> String {
    normalize_key(&extract_surname(full_name))
}
