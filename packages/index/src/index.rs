//! Individual and general index computation.
//!
//! The individual index is a credit-hour weighted grade average in which
//! later terms weigh more, scaled down by the share of withdrawn hours:
//!
//! ```text
//! weight  = min(6, terms since the first recorded term + 1)
//! average = Σ weight·hours·grade / Σ weight·hours     (scoring-eligible only)
//! penalty = 1 - 0.5 · withdrawn hours / total hours   (every record)
//! index   = penalty · average
//! ```
//!
//! The general index places the individual index on a `[0, 10]` scale
//! centered at `6` for the cohort mean, two points per standard deviation.

#![allow(clippy::suboptimal_flops)]

use std::collections::{BTreeMap, BTreeSet};

use ira_transcript_models::{DisciplineRecord, DisciplineStatus};

use crate::split_period;

/// Terms at or beyond this one share the maximum weight.
const MAX_PERIOD_WEIGHT: f64 = 6.0;

/// Share of withdrawn hours charged against the index.
const WITHDRAWAL_PENALTY: f64 = 0.5;

/// General index assigned to the cohort mean.
const GENERAL_INDEX_MIDPOINT: f64 = 6.0;

/// General index points per cohort standard deviation.
const GENERAL_INDEX_SPREAD: f64 = 2.0;

/// Computes the individual performance index.
///
/// Returns `0` for an empty list, when the total credit hours are zero, or
/// when no scoring-eligible record carries credit hours.
///
/// ```
/// use ira_index::calculate_individual_index;
/// use ira_transcript_models::{DisciplineRecord, DisciplineStatus};
///
/// let record = DisciplineRecord {
///     period: "2023.1".to_string(),
///     code: "MA0001".to_string(),
///     name: "CALCULO I".to_string(),
///     status: DisciplineStatus::Approved,
///     grade: 8.0,
///     credit_hour: 64.0,
///     symbol: String::new(),
/// };
///
/// assert!((calculate_individual_index(&[record]) - 8.0).abs() < 1e-9);
/// assert_eq!(calculate_individual_index(&[]), 0.0);
/// ```
#[must_use]
pub fn calculate_individual_index(disciplines: &[DisciplineRecord]) -> f64 {
    let records: Vec<&DisciplineRecord> = disciplines.iter().collect();
    individual_index(&records)
}

fn individual_index(records: &[&DisciplineRecord]) -> f64 {
    // Fixed-width periods make the lexicographic minimum the earliest term.
    let Some(start_period) = records.iter().map(|d| d.period.as_str()).min() else {
        return 0.0;
    };
    let (start_year, start_term) = split_period(start_period);
    let (start_year, start_term) = (f64::from(start_year), f64::from(start_term));

    let dropped_hours: f64 = records
        .iter()
        .filter(|d| d.status == DisciplineStatus::Withdrawn)
        .map(|d| d.credit_hour)
        .sum();

    let total_hours: f64 = records.iter().map(|d| d.credit_hour).sum();

    let (numerator, denominator) = records
        .iter()
        .filter(|d| d.status.is_scoring_eligible())
        .fold((0.0, 0.0), |(numerator, denominator), d| {
            let (year, term) = split_period(&d.period);
            let term_number =
                (f64::from(year) - start_year) * 2.0 + (f64::from(term) - start_term) + 1.0;
            let weight = term_number.min(MAX_PERIOD_WEIGHT);

            (
                numerator + weight * d.credit_hour * d.grade,
                denominator + weight * d.credit_hour,
            )
        });

    if total_hours == 0.0 {
        return 0.0;
    }
    let penalty = 1.0 - WITHDRAWAL_PENALTY * dropped_hours / total_hours;

    if denominator == 0.0 {
        return 0.0;
    }

    penalty * (numerator / denominator)
}

/// Normalizes an individual index against a cohort baseline.
///
/// Returns exactly `6` when `course_std` is zero; otherwise the result is
/// clamped to `[0, 10]`.
#[must_use]
pub fn calculate_general_index(individual_index: f64, course_mean: f64, course_std: f64) -> f64 {
    let general = if course_std == 0.0 {
        GENERAL_INDEX_MIDPOINT
    } else {
        GENERAL_INDEX_MIDPOINT
            + GENERAL_INDEX_SPREAD * ((individual_index - course_mean) / course_std)
    };

    general.clamp(0.0, 10.0)
}

/// Computes the cumulative individual index as of the end of each period.
///
/// Each entry covers every record whose period is not after its key.
#[must_use]
pub fn calculate_index_per_period(disciplines: &[DisciplineRecord]) -> BTreeMap<String, f64> {
    let periods: BTreeSet<&str> = disciplines.iter().map(|d| d.period.as_str()).collect();

    periods
        .into_iter()
        .map(|period| {
            let until_period: Vec<&DisciplineRecord> = disciplines
                .iter()
                .filter(|d| d.period.as_str() <= period)
                .collect();
            (period.to_owned(), individual_index(&until_period))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ira_transcript_models::DisciplineStatus::{
        Approved, ApprovedByAverage, Enrolled, Failed, Withdrawn,
    };

    use super::*;
    use crate::test_support::{approx, record};

    #[test]
    fn empty_list_scores_zero() {
        assert!(calculate_individual_index(&[]) == 0.0);
    }

    #[test]
    fn single_first_term_course_scores_its_grade() {
        let records = [record("2023.1", Approved, 8.0, 64.0)];
        assert!(approx(calculate_individual_index(&records), 8.0));
    }

    #[test]
    fn withdrawn_hours_apply_penalty() {
        let records = [
            record("2023.1", Withdrawn, 0.0, 32.0),
            record("2023.1", Approved, 6.0, 64.0),
        ];

        // penalty = 1 - 0.5 * 32 / 96
        assert!(approx(calculate_individual_index(&records), 5.0));
    }

    #[test]
    fn zero_total_hours_scores_zero() {
        let records = [
            record("2023.1", Approved, 9.0, 0.0),
            record("2023.2", Failed, 2.0, 0.0),
        ];
        let index = calculate_individual_index(&records);

        assert!(index == 0.0);
        assert!(!index.is_nan());
    }

    #[test]
    fn no_eligible_hours_scores_zero() {
        let records = [
            record("2023.1", Withdrawn, 0.0, 64.0),
            record("2023.1", Enrolled, 0.0, 64.0),
        ];
        assert!(calculate_individual_index(&records) == 0.0);
    }

    #[test]
    fn later_terms_weigh_more() {
        let records = [
            record("2022.1", Approved, 10.0, 60.0),
            record("2022.2", Failed, 4.0, 60.0),
        ];

        // weights 1 and 2: (600 + 480) / (60 + 120)
        assert!(approx(calculate_individual_index(&records), 6.0));
    }

    #[test]
    fn weight_caps_at_six() {
        let records = [
            record("2020.1", Approved, 10.0, 10.0),
            record("2023.2", ApprovedByAverage, 5.0, 10.0),
            record("2030.1", ApprovedByAverage, 5.0, 10.0),
        ];

        // weights 1, 6 and 6
        let expected = (10.0 * 10.0 + 6.0 * 50.0 + 6.0 * 50.0) / (10.0 + 60.0 + 60.0);
        assert!(approx(calculate_individual_index(&records), expected));
    }

    #[test]
    fn far_future_period_takes_maximum_weight() {
        let records = [
            record("2023.1", Approved, 6.0, 64.0),
            record("2147483647.1", Approved, 9.0, 64.0),
        ];

        // weights 1 and 6: (384 + 3456) / 448
        let index = calculate_individual_index(&records);
        assert!(approx(index, 3840.0 / 448.0));
    }

    #[test]
    fn second_term_start_counts_from_its_own_term() {
        let records = [
            record("2022.2", Approved, 10.0, 10.0),
            record("2023.1", Approved, 0.0, 10.0),
        ];

        // 2023.1 is the second term after a 2022.2 start
        assert!(approx(calculate_individual_index(&records), 100.0 / 30.0));
    }

    #[test]
    fn enrolled_hours_dilute_nothing_but_count_in_total() {
        let records = [
            record("2023.1", Approved, 8.0, 64.0),
            record("2023.1", Enrolled, 0.0, 64.0),
        ];
        assert!(approx(calculate_individual_index(&records), 8.0));
    }

    #[test]
    fn input_is_left_untouched() {
        let records = vec![
            record("2023.2", Approved, 7.0, 64.0),
            record("2023.1", Withdrawn, 0.0, 64.0),
        ];
        let before = records.clone();
        let _ = calculate_individual_index(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn zero_std_gives_midpoint() {
        assert!(calculate_general_index(9.5, 7.0, 0.0) == 6.0);
        assert!(calculate_general_index(0.0, 0.0, 0.0) == 6.0);
    }

    #[test]
    fn general_index_scales_by_std() {
        assert!(approx(calculate_general_index(8.0, 7.0, 1.0), 8.0));
        assert!(approx(calculate_general_index(6.0, 7.0, 2.0), 5.0));
    }

    #[test]
    fn general_index_is_clamped() {
        for (individual, mean, std) in [
            (10.0, 0.0, 0.1),
            (0.0, 10.0, 0.1),
            (5.0, 5.0, -1.0),
            (9.9, 1.0, 0.5),
            (1.0, 9.0, 1e-6),
        ] {
            let general = calculate_general_index(individual, mean, std);
            assert!((0.0..=10.0).contains(&general), "{general}");
        }
    }

    #[test]
    fn index_per_period_is_cumulative() {
        let records = [
            record("2022.2", Approved, 6.0, 60.0),
            record("2022.1", Approved, 10.0, 60.0),
            record("2022.2", Withdrawn, 0.0, 60.0),
        ];
        let per_period = calculate_index_per_period(&records);

        let periods: Vec<&str> = per_period.keys().map(String::as_str).collect();
        assert_eq!(periods, vec!["2022.1", "2022.2"]);
        assert!(approx(per_period["2022.1"], 10.0));

        // (600 + 720) / 180, penalty 1 - 0.5 * 60 / 180
        let expected = (1.0 - 0.5 * 60.0 / 180.0) * (1320.0 / 180.0);
        assert!(approx(per_period["2022.2"], expected));
        assert!(approx(per_period["2022.2"], calculate_individual_index(&records)));
    }

    #[test]
    fn index_per_period_of_empty_list_is_empty() {
        assert!(calculate_index_per_period(&[]).is_empty());
    }
}
