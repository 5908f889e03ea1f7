#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for parsing transcripts and computing performance indices.
//!
//! ```text
//! ira extract historico.pdf [--json]
//! ira report historico.pdf --course cc [--json]
//! ira simulate historico.pdf --course cc --add next:64:8.5 --add next:32:7
//! ira export historico.pdf --out-dir out/
//! ira courses
//! ira suggest --name "Medicina" --mean 7.4 --std 1.1
//! ```
//!
//! Course baselines are read from the TOML file named by
//! `IRA_BASELINES_PATH`; suggestions are appended to `IRA_SUGGESTIONS_PATH`.

mod input;

use std::path::{Path, PathBuf};

use chrono::Datelike as _;
use clap::{Parser, Subcommand};
use ira_baseline::{BaselineConfig, SUGGESTIONS_PATH_ENV, SuggestionSink as _, find_baseline};
use ira_index::{build_report, next_period, simulate};
use ira_index_models::{PerformanceReport, SimulatedCourse};
use ira_transcript::{TranscriptExtraction, extract_all};
use ira_transcript_models::{CourseBaseline, CourseSuggestion};

use crate::input::{InputError, NEXT_PERIOD, parse_simulated_course, read_transcript};

#[derive(Parser)]
#[command(name = "ira", about = "Transcript parsing and academic performance indices")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the records parsed from a transcript
    Extract {
        /// Transcript PDF or extracted text file
        file: PathBuf,
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Compute every performance metric for a transcript
    Report {
        /// Transcript PDF or extracted text file
        file: PathBuf,
        /// Course identifier or name to compare against
        #[arg(long)]
        course: String,
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Compare current indices with indices after hypothetical courses
    Simulate {
        /// Transcript PDF or extracted text file
        file: PathBuf,
        /// Course identifier or name to compare against
        #[arg(long)]
        course: String,
        /// Future course as PERIOD:HOURS:GRADE[:NAME]; PERIOD may be `next`
        #[arg(long = "add", required = true, value_parser = parse_simulated_course)]
        courses: Vec<SimulatedCourse>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write text, JSON and CSV exports of a transcript
    Export {
        /// Transcript PDF or extracted text file
        file: PathBuf,
        /// Directory to write into
        #[arg(long, default_value = "export")]
        out_dir: PathBuf,
    },
    /// List known course baselines
    Courses,
    /// Propose baseline statistics for a missing course
    Suggest {
        /// Course name
        #[arg(long)]
        name: String,
        /// Mean individual index of the course
        #[arg(long)]
        mean: f64,
        /// Standard deviation of the individual index
        #[arg(long)]
        std: f64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let config = BaselineConfig::from_env();

    match cli.command {
        Commands::Extract { file, json } => {
            let extraction = load(&file).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&extraction)?);
            } else {
                print_extraction(&extraction);
            }
        }
        Commands::Report { file, course, json } => {
            let baseline = resolve_baseline(&config, &course).await?;
            let extraction = load(&file).await?;
            let report = build_report(
                &extraction.disciplines,
                &extraction.credit_hour_summary,
                &baseline,
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&extraction.student_name, &baseline, &report);
            }
        }
        Commands::Simulate {
            file,
            course,
            courses,
            json,
        } => {
            let baseline = resolve_baseline(&config, &course).await?;
            let extraction = load(&file).await?;

            let upcoming = next_period(&extraction.disciplines)
                .unwrap_or_else(|| format!("{}.1", chrono::Local::now().year()));
            let courses: Vec<SimulatedCourse> = courses
                .into_iter()
                .map(|mut c| {
                    if c.period.eq_ignore_ascii_case(NEXT_PERIOD) {
                        c.period.clone_from(&upcoming);
                    }
                    c
                })
                .collect();

            let result = simulate(&extraction.disciplines, &courses, &baseline)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{:<18} {:>10} {:>10}", "", "CURRENT", "SIMULATED");
                println!(
                    "{:<18} {:>10.4} {:>10.4}",
                    "Individual index",
                    result.current_individual_index,
                    result.simulated_individual_index
                );
                println!(
                    "{:<18} {:>10.4} {:>10.4}",
                    "General index", result.current_general_index, result.simulated_general_index
                );
            }
        }
        Commands::Export { file, out_dir } => {
            let text = read_transcript(&file).await?;
            let extraction = extract_all(&text);
            let written = ira_export::write_bundle(
                &out_dir,
                &text,
                &extraction.credit_hour_summary,
                &extraction.pending_courses,
                &extraction.disciplines,
            )?;

            for path in &written {
                println!("{}", path.display());
            }
        }
        Commands::Courses => {
            let baselines = config.load_baselines().await;

            if baselines.is_empty() {
                println!("No course baselines found.");
                return Ok(());
            }

            println!("{:<16} {:>6} {:>6}  NAME", "ID", "MEAN", "STD");
            println!("{}", "-".repeat(60));
            for b in &baselines {
                println!(
                    "{:<16} {:>6.2} {:>6.2}  {}",
                    b.identifier, b.mean, b.std, b.display_name
                );
            }
        }
        Commands::Suggest { name, mean, std } => {
            let sink = config
                .suggestion_sink()
                .ok_or(InputError::SuggestionsDisabled(SUGGESTIONS_PATH_ENV))?;
            let id = sink.submit(&CourseSuggestion { name, mean, std }).await?;
            println!("Suggestion recorded: {id}");
        }
    }

    Ok(())
}

async fn load(file: &Path) -> Result<TranscriptExtraction, InputError> {
    let text = read_transcript(file).await?;
    Ok(extract_all(&text))
}

async fn resolve_baseline(
    config: &BaselineConfig,
    query: &str,
) -> Result<CourseBaseline, InputError> {
    let baselines = config.load_baselines().await;
    find_baseline(&baselines, query)
        .cloned()
        .ok_or_else(|| InputError::UnknownCourse(query.to_owned()))
}

fn print_extraction(extraction: &TranscriptExtraction) {
    println!("Student: {}\n", extraction.student_name);

    println!(
        "{:<8} {:<10} {:<16} {:>6} {:>6} {:<3} NAME",
        "PERIOD", "CODE", "STATUS", "GRADE", "HOURS", "SYM"
    );
    println!("{}", "-".repeat(100));
    for d in &extraction.disciplines {
        println!(
            "{:<8} {:<10} {:<16} {:>6} {:>6} {:<3} {}",
            d.period,
            d.code,
            d.status.keyword(),
            d.grade, d.credit_hour, d.symbol, d.name
        );
    }
    println!("\n{} discipline(s)\n", extraction.disciplines.len());

    let s = &extraction.credit_hour_summary;
    println!(
        "Hours: {}/{} required, {}/{} elective ({} elective pending)\n",
        s.completed_hours,
        s.required_hours,
        s.optional_completed_hours,
        s.optional_required_hours,
        s.optional_pending_hours
    );

    if extraction.pending_courses.is_empty() {
        println!("No pending required courses.");
    } else {
        println!("Pending required courses:");
        for p in &extraction.pending_courses {
            println!("  {:<10} {:>4}h  {}", p.code, p.credit_hour, p.name);
        }
    }
}

fn print_report(student_name: &str, baseline: &CourseBaseline, report: &PerformanceReport) {
    println!("Student: {student_name}");
    println!("Course:  {}\n", baseline.display_name);
    println!("Individual index: {:.4}", report.individual_index);
    println!("General index:    {:.4}", report.general_index);
    println!("Course progress:  {:.1}%", report.course_progress);
    println!("Pass rate:        {:.1}%\n", report.pass_rate);

    println!("{:<8} {:>8} {:>8} {:>8}", "PERIOD", "INDEX", "MEAN", "HOURS");
    for (period, index) in &report.index_per_period {
        println!(
            "{:<8} {:>8.4} {:>8.2} {:>8}",
            period,
            index,
            report.mean_grade_per_period.get(period).copied().unwrap_or(0.0),
            report.hourly_load.get(period).copied().unwrap_or(0.0)
        );
    }

    println!("\nGrade distribution:");
    for (bucket, count) in &report.grade_distribution {
        println!("  {:<18} {count}", bucket.to_string());
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn simulate_collects_every_added_course() {
        let cli = Cli::try_parse_from([
            "ira",
            "simulate",
            "historico.txt",
            "--course",
            "cc",
            "--add",
            "next:64:8",
            "--add",
            "2030.2:32:4.5:Redes",
        ])
        .unwrap();

        let Commands::Simulate { courses, .. } = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].period, NEXT_PERIOD);
        assert_eq!(courses[1].name, "Redes");
    }

    #[test]
    fn simulate_requires_a_course() {
        assert!(
            Cli::try_parse_from(["ira", "simulate", "historico.txt", "--course", "cc"]).is_err()
        );
        assert!(
            Cli::try_parse_from([
                "ira",
                "simulate",
                "historico.txt",
                "--course",
                "cc",
                "--add",
                "2030.1:64"
            ])
            .is_err()
        );
    }

    #[test]
    fn export_defaults_output_directory() {
        let cli = Cli::try_parse_from(["ira", "export", "historico.pdf"]).unwrap();
        let Commands::Export { out_dir, .. } = cli.command else {
            panic!("expected export");
        };
        assert_eq!(out_dir, PathBuf::from("export"));
    }
}
