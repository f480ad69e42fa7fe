use std::sync::LazyLock;

use regex::{Captures, Regex};

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));
static UNDERSCORE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|_)(.)").expect("valid regex"));

/// `userId` → `user_id`, `HTMLParser` → `html_parser`.
pub fn to_snake_case(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let split_acronyms = ACRONYM_BOUNDARY.replace_all(text, "${1}_${2}");
    WORD_BOUNDARY
        .replace_all(&split_acronyms, "${1}_${2}")
        .to_lowercase()
}

/// `user_id` → `userId`, or `UserId` with `first_upper`.
pub fn to_camel_case(text: &str, first_upper: bool) -> String {
    let pascal = UNDERSCORE_SEGMENT.replace_all(text, |caps: &Captures| caps[1].to_uppercase());
    if first_upper {
        return pascal.into_owned();
    }

    let mut original = text.chars();
    let Some(first) = original.next() else {
        return String::new();
    };
    first
        .to_lowercase()
        .chain(pascal.chars().skip(1))
        .collect()
}
