//! Credit-hour summary extraction.
//!
//! The summary block is matched against the whole text rather than line by
//! line, since the counters may be split across fragments.

use std::sync::LazyLock;

use ira_transcript_models::CreditHourSummary;
use regex::Regex;

use crate::numeric::parse_count;

static TOTAL_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Carga Horária Total\s+([0-9]+)\s+([0-9]+)").unwrap_or_else(|_| unreachable!())
});

// The unnamed field between completed and pending is not used.
static OPTIONAL_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Carga Horária Optativa\s+([0-9]+)\s+([0-9]+)\s+[0-9]+\s+([0-9]+)")
        .unwrap_or_else(|_| unreachable!())
});

/// Extracts the program's credit-hour counters.
///
/// Counters whose pattern is absent stay at `0`.
///
/// ```
/// use ira_transcript::extract_credit_hour_summary;
///
/// let summary = extract_credit_hour_summary("no matching text");
/// assert_eq!(summary.required_hours, 0);
/// assert_eq!(summary.optional_pending_hours, 0);
/// ```
#[must_use]
pub fn extract_credit_hour_summary(text: &str) -> CreditHourSummary {
    let mut summary = CreditHourSummary::default();

    if let Some(caps) = TOTAL_HOURS.captures(text) {
        summary.required_hours = parse_count(&caps[1]);
        summary.completed_hours = parse_count(&caps[2]);
    } else {
        log::debug!("Total credit-hour line not found");
    }

    if let Some(caps) = OPTIONAL_HOURS.captures(text) {
        summary.optional_required_hours = parse_count(&caps[1]);
        summary.optional_completed_hours = parse_count(&caps[2]);
        summary.optional_pending_hours = parse_count(&caps[3]);
    } else {
        log::debug!("Optional credit-hour line not found");
    }

    summary
}
