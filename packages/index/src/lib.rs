#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Academic performance index engine.
//!
//! Computes the individual performance index of a transcript, normalizes it
//! against a cohort baseline, and prepares the per-period breakdowns shown
//! alongside it. Every function is pure: the input list is never mutated,
//! so callers can simulate future courses by concatenating lists.
//!
//! Degenerate inputs have defined results instead of `NaN`: an empty list
//! or zero total hours give an individual index of `0`, as does a list with
//! no scoring-eligible hours; a zero cohort standard deviation gives a
//! general index of `6`.

pub mod aggregates;
pub mod index;
pub mod report;
pub mod simulation;

pub use aggregates::{
    calculate_course_progress, calculate_mean_grade_per_period, calculate_pass_rate,
    prepare_grade_distribution_data, prepare_hourly_load_data,
};
pub use index::{calculate_general_index, calculate_index_per_period, calculate_individual_index};
pub use report::build_report;
pub use simulation::{next_period, simulate};

use thiserror::Error;

/// Errors that can occur while running a what-if simulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// None of the simulated courses had a period, positive credit hours and
    /// a grade within `[0, 10]`.
    #[error("No valid simulated course: each needs a period, positive credit hours and a grade between 0 and 10")]
    NoValidCourses,
}

/// Splits a `YYYY.S` period into year and term.
///
/// Missing or malformed components read as `0`.
pub(crate) fn split_period(period: &str) -> (i32, i32) {
    let mut parts = period.split('.');
    let mut next = || {
        parts
            .next()
            .and_then(|part| part.trim().parse::<i32>().ok())
            .unwrap_or(0)
    };
    let year = next();
    let term = next();
    (year, term)
}

#[cfg(test)]
pub(crate) mod test_support {
    use ira_transcript_models::{DisciplineRecord, DisciplineStatus};

    pub fn record(
        period: &str,
        status: DisciplineStatus,
        grade: f64,
        credit_hour: f64,
    ) -> DisciplineRecord {
        DisciplineRecord {
            period: period.to_string(),
            code: "CK0001".to_string(),
            name: "DISCIPLINA".to_string(),
            status,
            grade,
            credit_hour,
            symbol: String::new(),
        }
    }

    pub fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}
