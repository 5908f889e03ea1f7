//! Pending required course extraction.
//!
//! The pending list sits between a fixed heading and the equivalences
//! block. Entries run together as `CODE NAME HOURS h`, possibly several per
//! line.

use std::cmp::Ordering;
use std::sync::LazyLock;

use ira_transcript_models::PendingCourseRecord;
use regex::Regex;

use crate::numeric::parse_count;

/// Heading that opens the pending course list.
pub const START_MARKER: &str = "Componentes Curriculares Obrigatórios Pendentes";

/// Heading that closes the pending course list.
pub const END_MARKER: &str = "Equivalências:";

static PENDING_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]{2,3}[0-9]{4,})\s+(.*?)\s+([0-9]+)\s*h").unwrap_or_else(|_| unreachable!())
});

/// Extracts the pending required courses, sorted by name.
///
/// Returns an empty list when the start heading is missing. Without an end
/// heading the section runs to the end of the text.
#[must_use]
pub fn extract_pending_courses(text: &str) -> Vec<PendingCourseRecord> {
    let Some(start) = text.find(START_MARKER) else {
        log::debug!("Pending course section not found");
        return Vec::new();
    };

    let section = &text[start + START_MARKER.len()..];
    let section = section
        .find(END_MARKER)
        .map_or(section, |end| &section[..end]);

    let mut courses: Vec<PendingCourseRecord> = PENDING_ENTRY
        .captures_iter(section)
        .map(|caps| PendingCourseRecord {
            code: caps[1].trim().to_owned(),
            name: caps[2].trim().to_owned(),
            credit_hour: parse_count(&caps[3]),
        })
        .collect();

    courses.sort_by(|a, b| compare_names(&a.name, &b.name));

    log::debug!("Extracted {} pending courses", courses.len());

    courses
}

/// Orders course names the way a Portuguese reader expects.
///
/// Accents and case are ignored at first; ties are broken by accent, then
/// with lowercase before uppercase.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn collation_key(name: &str) -> String {
    name.to_lowercase().chars().map(fold_accent).collect()
}

const fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}
