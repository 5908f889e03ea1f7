#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Academic record extraction from transcript page text.
//!
//! Transcript PDFs are pixel-positioned text with no semantic markup. Once
//! the page text has been flattened into lines (see [`assembly`]), this
//! crate recovers structured records from it with layout heuristics and
//! regex matching:
//!
//! - [`disciplines`]: one [`DisciplineRecord`] per course row
//! - [`summary`]: the program's [`CreditHourSummary`]
//! - [`pending`]: required courses not yet completed
//! - [`student`]: the student's display name
//!
//! Every extractor is total. Lines or sections that don't match a known
//! shape are skipped, and missing sections yield empty or zeroed output.
//! A partial extraction is always returned instead of an error.

pub mod assembly;
pub mod disciplines;
mod numeric;
pub mod pending;
pub mod student;
pub mod summary;

pub use assembly::{TextFragment, assemble_page_text};
pub use disciplines::extract_disciplines;
pub use pending::extract_pending_courses;
pub use student::get_student_name;
pub use summary::extract_credit_hour_summary;

use ira_transcript_models::{CreditHourSummary, DisciplineRecord, PendingCourseRecord};
use serde::{Deserialize, Serialize};

/// Everything extracted from a single transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptExtraction {
    /// Title-cased student name, or empty.
    pub student_name: String,
    /// Course rows in transcript order.
    pub disciplines: Vec<DisciplineRecord>,
    /// Program credit-hour counters.
    pub credit_hour_summary: CreditHourSummary,
    /// Pending required courses sorted by name.
    pub pending_courses: Vec<PendingCourseRecord>,
}

/// Runs every extractor over the assembled transcript text.
///
/// ```
/// let text = "2023.1\nCALCULO I T01 APROVADO MA0001 85.0 7.50 * 64.00\n";
/// let extraction = ira_transcript::extract_all(text);
///
/// assert_eq!(extraction.disciplines.len(), 1);
/// assert_eq!(extraction.disciplines[0].name, "CALCULO I");
/// assert!(extraction.pending_courses.is_empty());
/// ```
#[must_use]
pub fn extract_all(text: &str) -> TranscriptExtraction {
    let extraction = TranscriptExtraction {
        student_name: get_student_name(text),
        disciplines: extract_disciplines(text),
        credit_hour_summary: extract_credit_hour_summary(text),
        pending_courses: extract_pending_courses(text),
    };

    log::info!(
        "Extracted {} disciplines and {} pending courses",
        extraction.disciplines.len(),
        extraction.pending_courses.len()
    );

    extraction
}
