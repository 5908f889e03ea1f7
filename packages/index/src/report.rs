//! Full performance report assembly.

use ira_index_models::PerformanceReport;
use ira_transcript_models::{CourseBaseline, CreditHourSummary, DisciplineRecord};

use crate::{
    calculate_course_progress, calculate_general_index, calculate_index_per_period,
    calculate_individual_index, calculate_mean_grade_per_period, calculate_pass_rate,
    prepare_grade_distribution_data, prepare_hourly_load_data,
};

/// Computes every metric for a transcript against a cohort baseline.
#[must_use]
pub fn build_report(
    disciplines: &[DisciplineRecord],
    summary: &CreditHourSummary,
    baseline: &CourseBaseline,
) -> PerformanceReport {
    let individual_index = calculate_individual_index(disciplines);
    let general_index = calculate_general_index(individual_index, baseline.mean, baseline.std);

    log::debug!(
        "Individual index {individual_index:.4}, general index {general_index:.4} against {}",
        baseline.identifier
    );

    PerformanceReport {
        individual_index,
        general_index,
        index_per_period: calculate_index_per_period(disciplines),
        mean_grade_per_period: calculate_mean_grade_per_period(disciplines),
        grade_distribution: prepare_grade_distribution_data(disciplines),
        hourly_load: prepare_hourly_load_data(disciplines),
        course_progress: calculate_course_progress(summary),
        pass_rate: calculate_pass_rate(disciplines),
    }
}
