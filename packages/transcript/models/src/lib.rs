#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Academic transcript record types.
//!
//! These types are produced by the transcript parser and consumed by the
//! performance index engine. Records are plain values: once created they are
//! never mutated, and every derived structure is recomputed from a list of
//! them.
//!
//! Periods are `YYYY.S` strings. Because the year is always four digits and
//! the term a single digit, plain string ordering is chronological ordering.
//! Several computations rely on that.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Enrollment outcome keyword as printed on the transcript.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum DisciplineStatus {
    /// Passed.
    #[serde(rename = "APROVADO")]
    #[strum(serialize = "APROVADO")]
    Approved,
    /// Passed by final average.
    #[serde(rename = "APROVADO MÉDIA")]
    #[strum(serialize = "APROVADO MÉDIA")]
    ApprovedByAverage,
    /// Failed.
    #[serde(rename = "REPROVADO")]
    #[strum(serialize = "REPROVADO")]
    Failed,
    /// Withdrawn after enrolling.
    #[serde(rename = "TRANCADO")]
    #[strum(serialize = "TRANCADO")]
    Withdrawn,
    /// Removed from the record by the registrar.
    #[serde(rename = "SUPRIMIDO")]
    #[strum(serialize = "SUPRIMIDO")]
    Suppressed,
    /// Credit transferred internally.
    #[serde(rename = "APROVT INTERNO")]
    #[strum(serialize = "APROVT INTERNO")]
    InternalTransfer,
    /// Currently enrolled.
    #[serde(rename = "MATRICULADO")]
    #[strum(serialize = "MATRICULADO")]
    Enrolled,
}

impl DisciplineStatus {
    /// Keyword match order for transcript lines.
    ///
    /// When two keywords start at the same position the one listed first
    /// wins, so `APROVADO MÉDIA` must precede `APROVADO`.
    pub const MATCH_PRIORITY: &'static [Self] = &[
        Self::ApprovedByAverage,
        Self::Approved,
        Self::Failed,
        Self::Withdrawn,
        Self::Suppressed,
        Self::InternalTransfer,
        Self::Enrolled,
    ];

    /// The exact keyword as it appears on the transcript.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Approved => "APROVADO",
            Self::ApprovedByAverage => "APROVADO MÉDIA",
            Self::Failed => "REPROVADO",
            Self::Withdrawn => "TRANCADO",
            Self::Suppressed => "SUPRIMIDO",
            Self::InternalTransfer => "APROVT INTERNO",
            Self::Enrolled => "MATRICULADO",
        }
    }

    /// Whether records with this status enter the weighted average and the
    /// grade distribution.
    #[must_use]
    pub const fn is_scoring_eligible(self) -> bool {
        matches!(self, Self::Approved | Self::ApprovedByAverage | Self::Failed)
    }

    /// Whether this status counts as a pass.
    #[must_use]
    pub const fn is_passing(self) -> bool {
        matches!(self, Self::Approved | Self::ApprovedByAverage)
    }

    /// Whether lines carrying this status are dropped by the parser.
    #[must_use]
    pub const fn is_excluded_at_parse(self) -> bool {
        matches!(self, Self::Suppressed | Self::InternalTransfer)
    }
}

/// One course instance from the transcript: completed, withdrawn, or in
/// progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineRecord {
    /// Academic term in `YYYY.S` form.
    pub period: String,
    /// Course code (2-3 uppercase letters followed by at least 4 digits).
    /// Empty for simulated records.
    pub code: String,
    /// Course title.
    pub name: String,
    /// Enrollment outcome.
    pub status: DisciplineStatus,
    /// Final grade in `[0, 10]`; `0` when absent.
    pub grade: f64,
    /// Credit-hour load of this course instance.
    pub credit_hour: f64,
    /// Single-character grading annotation, or empty.
    pub symbol: String,
}

/// Program credit-hour requirement counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditHourSummary {
    /// Total hours required by the program.
    pub required_hours: u64,
    /// Total hours completed.
    pub completed_hours: u64,
    /// Elective hours required.
    pub optional_required_hours: u64,
    /// Elective hours completed.
    pub optional_completed_hours: u64,
    /// Elective hours still pending.
    pub optional_pending_hours: u64,
}

/// A required course the student has not completed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingCourseRecord {
    /// Course code.
    pub code: String,
    /// Course title.
    pub name: String,
    /// Credit hours.
    pub credit_hour: u64,
}

/// Reference mean and standard deviation of the individual index for a
/// program cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseBaseline {
    /// Stable identifier of the program.
    #[serde(alias = "id")]
    pub identifier: String,
    /// Human-readable program name.
    #[serde(alias = "name")]
    pub display_name: String,
    /// Cohort mean of the individual index.
    pub mean: f64,
    /// Cohort standard deviation of the individual index.
    pub std: f64,
}

/// A user-submitted baseline for a program missing from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSuggestion {
    /// Program name.
    pub name: String,
    /// Suggested cohort mean.
    pub mean: f64,
    /// Suggested cohort standard deviation.
    pub std: f64,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn keyword_matches_display_and_parse() {
        for status in DisciplineStatus::MATCH_PRIORITY {
            assert_eq!(status.to_string(), status.keyword());
            assert_eq!(status.as_ref(), status.keyword());
            assert_eq!(
                DisciplineStatus::from_str(status.keyword()).unwrap(),
                *status
            );
        }
    }

    #[test]
    fn match_priority_covers_every_status_once() {
        assert_eq!(DisciplineStatus::MATCH_PRIORITY.len(), 7);
        let mut sorted = DisciplineStatus::MATCH_PRIORITY.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 7);
    }

    #[test]
    fn longer_keywords_precede_their_prefixes() {
        let priority = DisciplineStatus::MATCH_PRIORITY;
        for (i, earlier) in priority.iter().enumerate() {
            for later in &priority[i + 1..] {
                assert!(
                    !later.keyword().starts_with(earlier.keyword()),
                    "{earlier} shadows {later}"
                );
            }
        }
    }

    #[test]
    fn scoring_eligibility() {
        assert!(DisciplineStatus::Approved.is_scoring_eligible());
        assert!(DisciplineStatus::ApprovedByAverage.is_scoring_eligible());
        assert!(DisciplineStatus::Failed.is_scoring_eligible());
        assert!(!DisciplineStatus::Withdrawn.is_scoring_eligible());
        assert!(!DisciplineStatus::Enrolled.is_scoring_eligible());
        assert!(!DisciplineStatus::Failed.is_passing());
        assert!(DisciplineStatus::Suppressed.is_excluded_at_parse());
        assert!(DisciplineStatus::InternalTransfer.is_excluded_at_parse());
    }

    #[test]
    fn status_serializes_as_keyword() {
        let json = serde_json::to_string(&DisciplineStatus::ApprovedByAverage).unwrap();
        assert_eq!(json, "\"APROVADO MÉDIA\"");
    }

    #[test]
    fn record_uses_camel_case_fields() {
        let record = DisciplineRecord {
            period: "2023.1".to_string(),
            code: "MA0001".to_string(),
            name: "CALCULO I".to_string(),
            status: DisciplineStatus::Approved,
            grade: 7.5,
            credit_hour: 64.0,
            symbol: String::new(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["creditHour"], 64.0);
        assert_eq!(value["status"], "APROVADO");
    }

    #[test]
    fn baseline_accepts_short_field_aliases() {
        let baseline: CourseBaseline = serde_json::from_str(
            r#"{"id":"cc","name":"Ciência da Computação","mean":7.1,"std":1.4}"#,
        )
        .unwrap();
        assert_eq!(baseline.identifier, "cc");
        assert_eq!(baseline.display_name, "Ciência da Computação");
    }
}
