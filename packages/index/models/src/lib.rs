#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Performance index report and what-if simulation types.
//!
//! Per-period maps are keyed by `YYYY.S` period strings in a [`BTreeMap`],
//! which iterates them chronologically because the period format is fixed
//! width.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Grade histogram bucket.
///
/// Buckets are left-inclusive and right-exclusive. The last one extends to
/// `10.1` so that a perfect `10` is counted.
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
pub enum GradeBucket {
    /// `[0, 5)`
    #[serde(rename = "Ruim (<5)")]
    #[strum(serialize = "Ruim (<5)")]
    Poor,
    /// `[5, 7)`
    #[serde(rename = "Regular (5-7)")]
    #[strum(serialize = "Regular (5-7)")]
    Fair,
    /// `[7, 8)`
    #[serde(rename = "Bom (7-8)")]
    #[strum(serialize = "Bom (7-8)")]
    Good,
    /// `[8, 9)`
    #[serde(rename = "Otimo (8-9)")]
    #[strum(serialize = "Otimo (8-9)")]
    Great,
    /// `[9, 10.1)`
    #[serde(rename = "Excelente (9-10)")]
    #[strum(serialize = "Excelente (9-10)")]
    Excellent,
}

impl GradeBucket {
    /// Every bucket in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Poor,
            Self::Fair,
            Self::Good,
            Self::Great,
            Self::Excellent,
        ]
    }

    /// Inclusive lower and exclusive upper grade bound.
    #[must_use]
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            Self::Poor => (0.0, 5.0),
            Self::Fair => (5.0, 7.0),
            Self::Good => (7.0, 8.0),
            Self::Great => (8.0, 9.0),
            Self::Excellent => (9.0, 10.1),
        }
    }

    /// Returns the bucket containing `grade`, or `None` if it falls outside
    /// every bucket.
    #[must_use]
    pub fn for_grade(grade: f64) -> Option<Self> {
        Self::all().iter().copied().find(|bucket| {
            let (low, high) = bucket.bounds();
            grade >= low && grade < high
        })
    }
}

/// Every metric shown for one transcript against one cohort baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// Individual performance index.
    pub individual_index: f64,
    /// Cohort-normalized index in `[0, 10]`.
    pub general_index: f64,
    /// Cumulative individual index as of the end of each period.
    pub index_per_period: BTreeMap<String, f64>,
    /// Raw mean grade per period, over every status.
    pub mean_grade_per_period: BTreeMap<String, f64>,
    /// Count of scoring-eligible grades per bucket.
    pub grade_distribution: BTreeMap<GradeBucket, u64>,
    /// Credit hours enrolled per period.
    pub hourly_load: BTreeMap<String, f64>,
    /// Completed share of required hours, as a percentage.
    pub course_progress: f64,
    /// Passing share of scoring-eligible records, as a percentage.
    pub pass_rate: f64,
}

/// A hypothetical future course for what-if simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedCourse {
    /// Optional course title.
    pub name: String,
    /// Period in `YYYY.S` form.
    pub period: String,
    /// Credit-hour load; must be positive.
    pub credit_hour: f64,
    /// Expected grade in `[0, 10]`.
    pub grade: f64,
}

/// Whether `value` is a `YYYY.S` period: four digits, a dot, one digit.
///
/// Surrounding whitespace is ignored.
///
/// ```
/// use ira_index_models::is_period;
///
/// assert!(is_period("2026.1"));
/// assert!(!is_period("2147483647.1"));
/// assert!(!is_period("abc"));
/// ```
#[must_use]
pub fn is_period(value: &str) -> bool {
    match value.trim().as_bytes() {
        [y0, y1, y2, y3, b'.', term] => {
            [y0, y1, y2, y3, term].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

impl SimulatedCourse {
    /// Whether the course can take part in a simulation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_period(&self.period) && self.has_valid_load()
    }

    /// Whether the credit hours are positive and the grade lies in
    /// `[0, 10]`, regardless of the period.
    #[must_use]
    pub fn has_valid_load(&self) -> bool {
        self.credit_hour > 0.0 && (0.0..=10.0).contains(&self.grade)
    }
}

/// Current and simulated indices side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Individual index of the transcript as is.
    pub current_individual_index: f64,
    /// Individual index with the simulated courses added.
    pub simulated_individual_index: f64,
    /// General index of the transcript as is.
    pub current_general_index: f64,
    /// General index with the simulated courses added.
    pub simulated_general_index: f64,
}
