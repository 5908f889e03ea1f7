#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Downloadable renderings of parsed transcript data.
//!
//! Each renderer returns the file contents as a string. [`write_bundle`]
//! writes all of them into a directory using the conventional file names.

use std::path::{Path, PathBuf};

use ira_transcript_models::{CreditHourSummary, DisciplineRecord, PendingCourseRecord};

/// File name for the raw extracted text.
pub const TEXT_FILE: &str = "extracted_text.txt";

/// File name for the credit-hour summary.
pub const SUMMARY_FILE: &str = "credit_hour_summary.json";

/// File name for the pending course list.
pub const PENDING_FILE: &str = "pending_courses.csv";

/// File name for the discipline list.
pub const DISCIPLINES_FILE: &str = "disciplines.csv";

/// Errors that can occur while rendering or writing exports.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV row could not be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendered output was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Returns the extracted text as it should be saved.
#[must_use]
pub fn text_dump(text: &str) -> String {
    text.to_owned()
}

/// Renders the credit-hour summary as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn summary_json(summary: &CreditHourSummary) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

/// Rows are separated by `\n` with no terminator after the last one.
fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let mut bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(String::from_utf8(bytes)?)
}

/// Renders pending courses as CSV with a `code,name,creditHour` header.
///
/// # Errors
///
/// Returns [`ExportError`] if a row can't be written.
pub fn pending_courses_csv(courses: &[PendingCourseRecord]) -> Result<String, ExportError> {
    let mut writer = csv_writer();
    writer.write_record(["code", "name", "creditHour"])?;

    for course in courses {
        writer.write_record([
            course.code.as_str(),
            course.name.as_str(),
            &course.credit_hour.to_string(),
        ])?;
    }

    finish(writer)
}

/// Renders disciplines as CSV, one row per record in transcript order.
///
/// # Errors
///
/// Returns [`ExportError`] if a row can't be written.
pub fn disciplines_csv(disciplines: &[DisciplineRecord]) -> Result<String, ExportError> {
    let mut writer = csv_writer();
    writer.write_record([
        "period",
        "code",
        "name",
        "status",
        "grade",
        "creditHour",
        "symbol",
    ])?;

    for d in disciplines {
        writer.write_record([
            d.period.as_str(),
            d.code.as_str(),
            d.name.as_str(),
            d.status.keyword(),
            &d.grade.to_string(),
            &d.credit_hour.to_string(),
            d.symbol.as_str(),
        ])?;
    }

    finish(writer)
}

/// Writes every non-empty export into `dir`, creating it if needed.
///
/// The text dump is skipped when the text is blank, and each CSV is skipped
/// when it would hold no rows. The summary is always written.
///
/// # Errors
///
/// Returns [`ExportError`] if rendering or writing fails.
pub fn write_bundle(
    dir: &Path,
    text: &str,
    summary: &CreditHourSummary,
    pending_courses: &[PendingCourseRecord],
    disciplines: &[DisciplineRecord],
) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(dir)?;

    let mut outputs = Vec::new();

    if !text.trim().is_empty() {
        outputs.push((TEXT_FILE, text_dump(text)));
    }
    outputs.push((SUMMARY_FILE, summary_json(summary)?));
    if !pending_courses.is_empty() {
        outputs.push((PENDING_FILE, pending_courses_csv(pending_courses)?));
    }
    if !disciplines.is_empty() {
        outputs.push((DISCIPLINES_FILE, disciplines_csv(disciplines)?));
    }

    let mut written = Vec::with_capacity(outputs.len());

    for (name, contents) in outputs {
        let path = dir.join(name);
        std::fs::write(&path, contents)?;
        log::debug!("Wrote {}", path.display());
        written.push(path);
    }

    log::info!("Exported {} file(s) to {}", written.len(), dir.display());

    Ok(written)
}
