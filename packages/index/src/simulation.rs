//! What-if simulation of future courses.
//!
//! Simulated courses are turned into ordinary records and appended to the
//! transcript; the engine scores the combined list like any other.

use ira_index_models::{SimulatedCourse, SimulationResult};
use ira_transcript_models::{CourseBaseline, DisciplineRecord, DisciplineStatus};

use crate::{SimulationError, calculate_general_index, calculate_individual_index, split_period};

/// Simulated grades at or above this pass.
const PASSING_GRADE: f64 = 5.0;

/// Converts a simulated course into a transcript record.
#[must_use]
pub fn to_discipline(course: &SimulatedCourse) -> DisciplineRecord {
    let status = if course.grade >= PASSING_GRADE {
        DisciplineStatus::ApprovedByAverage
    } else {
        DisciplineStatus::Failed
    };

    DisciplineRecord {
        period: course.period.trim().to_owned(),
        code: String::new(),
        name: course.name.clone(),
        status,
        grade: course.grade,
        credit_hour: course.credit_hour,
        symbol: String::new(),
    }
}

/// Compares the current indices with the indices after taking the
/// simulated courses.
///
/// Invalid simulated courses are ignored.
///
/// # Errors
///
/// Returns [`SimulationError::NoValidCourses`] if no simulated course is
/// valid.
pub fn simulate(
    disciplines: &[DisciplineRecord],
    simulated: &[SimulatedCourse],
    baseline: &CourseBaseline,
) -> Result<SimulationResult, SimulationError> {
    let future: Vec<DisciplineRecord> = simulated
        .iter()
        .filter(|course| course.is_valid())
        .map(to_discipline)
        .collect();

    if future.is_empty() {
        return Err(SimulationError::NoValidCourses);
    }

    log::debug!(
        "Simulating {} of {} courses on top of {} records",
        future.len(),
        simulated.len(),
        disciplines.len()
    );

    let combined: Vec<DisciplineRecord> = disciplines.iter().cloned().chain(future).collect();

    let current_individual_index = calculate_individual_index(disciplines);
    let simulated_individual_index = calculate_individual_index(&combined);

    Ok(SimulationResult {
        current_individual_index,
        simulated_individual_index,
        current_general_index: calculate_general_index(
            current_individual_index,
            baseline.mean,
            baseline.std,
        ),
        simulated_general_index: calculate_general_index(
            simulated_individual_index,
            baseline.mean,
            baseline.std,
        ),
    })
}

/// Returns the term following the latest recorded period, or `None` for an
/// empty transcript.
///
/// ```
/// use ira_index::next_period;
///
/// assert_eq!(next_period(&[]), None);
/// ```
#[must_use]
pub fn next_period(disciplines: &[DisciplineRecord]) -> Option<String> {
    let last = disciplines.iter().map(|d| d.period.as_str()).max()?;
    let (year, term) = split_period(last);

    Some(if term == 1 {
        format!("{year}.2")
    } else {
        format!("{}.1", year.saturating_add(1))
    })
}
