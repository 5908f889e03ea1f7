//! Course row extraction.
//!
//! Rows look like
//!
//! ```text
//! 2023.1
//! CALCULO I              T01  APROVADO  MA0001  85.0  7.50  *  64.00
//! ```
//!
//! A line holding only a period token sets the period for the rows after
//! it. A row is recognised by its status keyword: the text before the
//! keyword holds the course title and a trailing class tag, the text after
//! it holds the code, attendance, grade, optional symbol and credit hours.
//!
//! Long titles wrap onto the line above the data row, leaving nothing but
//! the class tag before the keyword. In that case the title is borrowed from
//! the previous line when that line looks like a bare uppercase title.

use std::sync::LazyLock;

use ira_transcript_models::{DisciplineRecord, DisciplineStatus};
use regex::Regex;

use crate::numeric::parse_leading_float;

/// Titles (and wrapped title lines) must be longer than this many
/// characters.
const MIN_NAME_CHARS: usize = 3;

static PERIOD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]{4}\.[0-9])\s*$").unwrap_or_else(|_| unreachable!()));

static PERIOD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}\.[0-9]").unwrap_or_else(|_| unreachable!()));

static ROW_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<code>[A-Z]{2,3}[0-9]{4,})\s+(?P<freq>[0-9.-]+)\s+(?P<grade>[0-9.-]+)\s*(?P<symbol>[*e&#@§]?)\s*(?P<credit_hour>[0-9]+\.00)",
    )
    .unwrap_or_else(|_| unreachable!())
});

static CLASS_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(\S+)$").unwrap_or_else(|_| unreachable!()));

static WRAPPED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-ZÁÀÂÃÉÊÍÎÓÔÕÚÇ\s-]+$").unwrap_or_else(|_| unreachable!())
});

/// Scan state carried from one line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState<'a> {
    /// Period set by the most recent period line, or empty before the first.
    pub current_period: &'a str,
}

/// Extracts every course row from the assembled transcript text.
///
/// Rows with a `SUPRIMIDO` or `APROVT INTERNO` status are dropped, as are
/// rows whose title can't be recovered.
#[must_use]
pub fn extract_disciplines(text: &str) -> Vec<DisciplineRecord> {
    let lines: Vec<&str> = text.split('\n').filter(|line| !line.is_empty()).collect();

    let (_, records) = lines.iter().enumerate().fold(
        (ScanState::default(), Vec::new()),
        |(state, mut records), (i, &line)| {
            let previous_line = i.checked_sub(1).map(|prev| lines[prev]);
            let (state, record) = scan_line(state, line, previous_line);
            records.extend(record);
            (state, records)
        },
    );

    log::debug!(
        "Extracted {} discipline records from {} lines",
        records.len(),
        lines.len()
    );

    records
}

/// Advances the scan by one line.
///
/// Period lines update the state and never yield a record. Any other line
/// is parsed as a course row under the current period.
#[must_use]
pub fn scan_line<'a>(
    state: ScanState<'a>,
    line: &'a str,
    previous_line: Option<&str>,
) -> (ScanState<'a>, Option<DisciplineRecord>) {
    if let Some(period) = parse_period_line(line) {
        return (
            ScanState {
                current_period: period,
            },
            None,
        );
    }

    let record = parse_row(line, previous_line, state.current_period);
    (state, record)
}

/// Returns the period token if `line` consists of nothing else.
#[must_use]
pub fn parse_period_line(line: &str) -> Option<&str> {
    PERIOD_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Finds the leftmost status keyword in `line`.
///
/// Returns the status and the byte offset where its keyword starts. When
/// several keywords start at the same offset, the one earliest in
/// [`DisciplineStatus::MATCH_PRIORITY`] wins.
#[must_use]
pub fn find_status(line: &str) -> Option<(DisciplineStatus, usize)> {
    DisciplineStatus::MATCH_PRIORITY
        .iter()
        .filter_map(|status| line.find(status.keyword()).map(|pos| (*status, pos)))
        .min_by_key(|&(_, pos)| pos)
}

/// Parses a single course row.
///
/// Returns `None` for lines without a status keyword, with an excluded
/// status, whose trailing data doesn't have the expected shape, or whose
/// title can't be recovered.
#[must_use]
pub fn parse_row(
    line: &str,
    previous_line: Option<&str>,
    current_period: &str,
) -> Option<DisciplineRecord> {
    let (status, start) = find_status(line)?;
    if status.is_excluded_at_parse() {
        return None;
    }

    let before = &line[..start];
    let after = &line[start + status.keyword().len()..];

    let caps = ROW_DATA.captures(after)?;
    let field = |name: &str| caps.name(name).map_or("", |m| m.as_str());

    let Some(name) = title_from_row(before, current_period)
        .or_else(|| previous_line.and_then(wrapped_title))
    else {
        log::trace!("Dropping row without a recoverable title: {line:?}");
        return None;
    };

    Some(DisciplineRecord {
        period: current_period.to_owned(),
        code: field("code").trim().to_owned(),
        name: name.trim().to_owned(),
        status,
        grade: parse_leading_float(field("grade")),
        credit_hour: parse_leading_float(field("credit_hour")),
        symbol: field("symbol").trim().to_owned(),
    })
}

/// Recovers the title from the text before the status keyword.
///
/// Removes a leaked period token and the trailing class tag.
fn title_from_row(before: &str, current_period: &str) -> Option<String> {
    let without_period = if current_period.is_empty() {
        before.to_owned()
    } else {
        before.replacen(current_period, "", 1)
    };

    let title = CLASS_TAG.replace(without_period.trim(), "");
    let title = title.trim();

    (title.chars().count() > MIN_NAME_CHARS).then(|| title.to_owned())
}

/// Accepts the previous line as a wrapped title if it is a bare uppercase
/// title rather than a period header or another data row.
///
/// The period token check is subsumed by the character class, which admits
/// no digits; it is kept so that widening the class can't let period
/// headers through.
fn wrapped_title(previous_line: &str) -> Option<String> {
    let candidate = previous_line.trim();

    (candidate.chars().count() > MIN_NAME_CHARS
        && !PERIOD_TOKEN.is_match(candidate)
        && WRAPPED_TITLE.is_match(candidate))
    .then(|| candidate.to_owned())
}
