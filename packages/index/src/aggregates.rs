//! Per-period and distribution aggregates for charting.
//!
//! The mean grade and hourly load cover every record regardless of status,
//! since they visualize raw transcript data. The grade distribution and
//! pass rate only cover scoring-eligible records, like the index itself.

#![allow(clippy::cast_precision_loss)]

use std::collections::BTreeMap;

use ira_index_models::GradeBucket;
use ira_transcript_models::{CreditHourSummary, DisciplineRecord};

/// Mean grade per period over every record.
#[must_use]
pub fn calculate_mean_grade_per_period(disciplines: &[DisciplineRecord]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<&str, (f64, u64)> = BTreeMap::new();

    for discipline in disciplines {
        let (sum, count) = totals.entry(discipline.period.as_str()).or_default();
        *sum += discipline.grade;
        *count += 1;
    }

    totals
        .into_iter()
        .map(|(period, (sum, count))| (period.to_owned(), sum / count as f64))
        .collect()
}

/// Credit hours per period over every record.
#[must_use]
pub fn prepare_hourly_load_data(disciplines: &[DisciplineRecord]) -> BTreeMap<String, f64> {
    let mut load: BTreeMap<String, f64> = BTreeMap::new();

    for discipline in disciplines {
        *load.entry(discipline.period.clone()).or_default() += discipline.credit_hour;
    }

    load
}

/// Histogram of scoring-eligible grades.
///
/// Every bucket is present, in display order, even when empty.
#[must_use]
pub fn prepare_grade_distribution_data(
    disciplines: &[DisciplineRecord],
) -> BTreeMap<GradeBucket, u64> {
    let mut counts: BTreeMap<GradeBucket, u64> =
        GradeBucket::all().iter().map(|bucket| (*bucket, 0)).collect();

    for discipline in disciplines.iter().filter(|d| d.status.is_scoring_eligible()) {
        match GradeBucket::for_grade(discipline.grade) {
            Some(bucket) => *counts.entry(bucket).or_default() += 1,
            None => log::debug!(
                "Grade {} of {} is outside every bucket",
                discipline.grade,
                discipline.code
            ),
        }
    }

    counts
}

/// Percentage of scoring-eligible records that passed.
///
/// Returns `0` when there are no scoring-eligible records.
#[must_use]
pub fn calculate_pass_rate(disciplines: &[DisciplineRecord]) -> f64 {
    let (eligible, passed) = disciplines
        .iter()
        .filter(|d| d.status.is_scoring_eligible())
        .fold((0_u64, 0_u64), |(eligible, passed), d| {
            (eligible + 1, passed + u64::from(d.status.is_passing()))
        });

    if eligible == 0 {
        return 0.0;
    }

    passed as f64 / eligible as f64 * 100.0
}

/// Percentage of the program's required hours already completed.
///
/// Returns `0` when the required hours are unknown.
#[must_use]
pub fn calculate_course_progress(summary: &CreditHourSummary) -> f64 {
    if summary.required_hours == 0 {
        return 0.0;
    }

    summary.completed_hours as f64 / summary.required_hours as f64 * 100.0
}
