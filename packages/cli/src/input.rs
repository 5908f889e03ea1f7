//! Transcript loading and command-line value parsing.

use std::path::Path;

use ira_index_models::{SimulatedCourse, is_period};
use ira_transcript::{TextFragment, assemble_page_text, assembly::fragments_from_page_text};

/// Period placeholder resolved to the term after the transcript's last one.
pub const NEXT_PERIOD: &str = "next";

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Unknown course {0:?}; run `ira courses` to list known courses")]
    UnknownCourse(String),

    #[error("Suggestions are disabled; set {0} to enable them")]
    SuggestionsDisabled(&'static str),
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Reads a transcript as text.
///
/// PDFs are extracted page by page and reassembled into lines; anything
/// else is taken to be already-extracted text.
pub async fn read_transcript(path: &Path) -> Result<String, InputError> {
    let bytes = tokio::fs::read(path).await?;

    if !is_pdf(path) {
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    log::debug!("Read {} bytes of PDF from {}", bytes.len(), path.display());

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| InputError::Pdf(e.to_string()))?;

    let fragments: Vec<Vec<TextFragment>> = pages
        .iter()
        .map(|page| fragments_from_page_text(page))
        .collect();
    let text = assemble_page_text(&fragments);

    log::info!(
        "Extracted {} characters from {} page(s) of {}",
        text.len(),
        pages.len(),
        path.display()
    );

    Ok(text)
}

/// Parses a `PERIOD:HOURS:GRADE[:NAME]` course description.
///
/// `PERIOD` is kept as given, including the [`NEXT_PERIOD`] placeholder.
pub fn parse_simulated_course(value: &str) -> Result<SimulatedCourse, String> {
    let mut parts = value.splitn(4, ':');

    let period = parts
        .next()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| format!("missing period in {value:?}"))?;
    let credit_hour = parse_number(parts.next(), "hours", value)?;
    let grade = parse_number(parts.next(), "grade", value)?;
    let name = parts.next().map(str::trim).unwrap_or_default();

    let course = SimulatedCourse {
        name: name.to_owned(),
        period: period.to_owned(),
        credit_hour,
        grade,
    };

    if !period.eq_ignore_ascii_case(NEXT_PERIOD) && !is_period(period) {
        return Err(format!(
            "period {period:?} in {value:?} must look like 2026.1 or be `{NEXT_PERIOD}`"
        ));
    }
    if !course.has_valid_load() {
        return Err(format!(
            "{value:?} needs positive hours and a grade between 0 and 10"
        ));
    }

    Ok(course)
}

fn parse_number(part: Option<&str>, field: &str, value: &str) -> Result<f64, String> {
    let part = part.ok_or_else(|| format!("missing {field} in {value:?}"))?;
    part.trim()
        .parse()
        .map_err(|_| format!("invalid {field} {part:?} in {value:?}"))
}
