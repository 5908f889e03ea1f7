//! Student name extraction.

use std::sync::LazyLock;

use regex::Regex;

// The registration number precedes the uppercase name, which precedes the
// field label.
static STUDENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]+\s+([A-ZÀ-Ü\s]+?)\s+Nome:").unwrap_or_else(|_| unreachable!())
});

/// Extracts the student's name in title case, or an empty string.
///
/// ```
/// use ira_transcript::get_student_name;
///
/// assert_eq!(get_student_name("512345 JOÃO PEDRO Nome:"), "João Pedro");
/// assert_eq!(get_student_name("Nome: ?"), "");
/// ```
#[must_use]
pub fn get_student_name(text: &str) -> String {
    STUDENT_NAME
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| to_title_case(m.as_str().trim()))
        .unwrap_or_default()
}

/// Capitalizes the first letter of each space-separated word and
/// lowercases the rest.
#[must_use]
pub fn to_title_case(name: &str) -> String {
    name.to_lowercase()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
