#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Course baseline lookup and suggestion submission.
//!
//! The general index needs the mean and standard deviation of the
//! individual index for the student's program. Those figures come from an
//! external catalog behind the [`BaselineSource`] trait; programs missing
//! from the catalog can be proposed through a [`SuggestionSink`].
//!
//! Catalog failures never reach the index engine: [`fetch_or_empty`] turns
//! them into an empty list.

pub mod suggestions;
pub mod toml_file;

use std::path::PathBuf;

use ira_transcript_models::{CourseBaseline, CourseSuggestion};

pub use suggestions::{JsonLinesSuggestionSink, validate_suggestion};
pub use toml_file::TomlBaselineFile;

/// Environment variable naming the TOML baseline catalog.
pub const BASELINES_PATH_ENV: &str = "IRA_BASELINES_PATH";

/// Environment variable naming the JSON-lines suggestion file.
pub const SUGGESTIONS_PATH_ENV: &str = "IRA_SUGGESTIONS_PATH";

/// Errors that can occur while reading baselines or storing suggestions.
#[derive(Debug, thiserror::Error)]
pub enum BaselineError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The baseline catalog is not valid TOML.
    #[error("Invalid baseline catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// A suggestion could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A suggestion failed validation.
    #[error(transparent)]
    InvalidSuggestion(#[from] SuggestionError),
}

/// Reasons a course suggestion is rejected before submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestionError {
    /// The program name is blank.
    #[error("Course name is required")]
    MissingName,

    /// The mean is not a finite number.
    #[error("Course mean must be a number")]
    InvalidMean,

    /// The standard deviation is not a finite number.
    #[error("Course standard deviation must be a number")]
    InvalidStd,
}

/// A catalog of course baselines.
pub trait BaselineSource: Send + Sync {
    /// Fetches every known course baseline.
    ///
    /// # Errors
    ///
    /// Returns [`BaselineError`] if the catalog can't be read.
    fn fetch_baselines(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<CourseBaseline>, BaselineError>> + Send;

    /// Returns a short description of the catalog for log messages.
    fn describe(&self) -> String;
}

/// A destination for course baseline suggestions.
pub trait SuggestionSink: Send + Sync {
    /// Stores a suggestion and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BaselineError`] if the suggestion is invalid or can't be
    /// stored.
    fn submit(
        &self,
        suggestion: &CourseSuggestion,
    ) -> impl std::future::Future<Output = Result<String, BaselineError>> + Send;
}

/// An in-memory baseline catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticBaselines {
    baselines: Vec<CourseBaseline>,
}

impl StaticBaselines {
    /// Creates a catalog holding `baselines`.
    #[must_use]
    pub const fn new(baselines: Vec<CourseBaseline>) -> Self {
        Self { baselines }
    }
}

impl BaselineSource for StaticBaselines {
    async fn fetch_baselines(&self) -> Result<Vec<CourseBaseline>, BaselineError> {
        Ok(self.baselines.clone())
    }

    fn describe(&self) -> String {
        format!("{} static baseline(s)", self.baselines.len())
    }
}

/// Fetches baselines, treating any failure as an empty catalog.
pub async fn fetch_or_empty(source: &(impl BaselineSource + ?Sized)) -> Vec<CourseBaseline> {
    match source.fetch_baselines().await {
        Ok(baselines) => {
            log::debug!(
                "Loaded {} baseline(s) from {}",
                baselines.len(),
                source.describe()
            );
            baselines
        }
        Err(e) => {
            log::warn!(
                "Failed to load baselines from {}: {e}",
                source.describe()
            );
            Vec::new()
        }
    }
}

/// Finds a baseline by identifier, or by display name ignoring case.
#[must_use]
pub fn find_baseline<'a>(baselines: &'a [CourseBaseline], query: &str) -> Option<&'a CourseBaseline> {
    let query = query.trim();

    baselines
        .iter()
        .find(|b| b.identifier == query)
        .or_else(|| {
            let lowered = query.to_lowercase();
            baselines
                .iter()
                .find(|b| b.display_name.to_lowercase() == lowered)
        })
}

/// Collaborator locations read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaselineConfig {
    /// TOML baseline catalog; unset means no baselines are known.
    pub baselines_path: Option<PathBuf>,
    /// JSON-lines suggestion file; unset disables suggestions.
    pub suggestions_path: Option<PathBuf>,
}

impl BaselineConfig {
    /// Reads [`BASELINES_PATH_ENV`] and [`SUGGESTIONS_PATH_ENV`].
    #[must_use]
    pub fn from_env() -> Self {
        let path_var = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            baselines_path: path_var(BASELINES_PATH_ENV),
            suggestions_path: path_var(SUGGESTIONS_PATH_ENV),
        }
    }

    /// Loads the configured catalog, or an empty list when none is set or
    /// it can't be read.
    pub async fn load_baselines(&self) -> Vec<CourseBaseline> {
        match &self.baselines_path {
            Some(path) => fetch_or_empty(&TomlBaselineFile::new(path.clone())).await,
            None => {
                log::info!("{BASELINES_PATH_ENV} is not set; no course baselines available");
                Vec::new()
            }
        }
    }

    /// Returns the configured suggestion sink, if any.
    #[must_use]
    pub fn suggestion_sink(&self) -> Option<JsonLinesSuggestionSink> {
        self.suggestions_path
            .clone()
            .map(JsonLinesSuggestionSink::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline(identifier: &str, display_name: &str) -> CourseBaseline {
        CourseBaseline {
            identifier: identifier.to_string(),
            display_name: display_name.to_string(),
            mean: 7.0,
            std: 1.0,
        }
    }

    struct FailingSource;

    impl BaselineSource for FailingSource {
        async fn fetch_baselines(&self) -> Result<Vec<CourseBaseline>, BaselineError> {
            Err(BaselineError::Io(std::io::Error::other("unreachable catalog")))
        }

        fn describe(&self) -> String {
            "failing source".to_string()
        }
    }

    #[tokio::test]
    async fn failing_source_yields_empty_list() {
        assert!(fetch_or_empty(&FailingSource).await.is_empty());
    }

    #[tokio::test]
    async fn static_source_returns_its_baselines() {
        let source = StaticBaselines::new(vec![baseline("cc", "Computação")]);
        let baselines = fetch_or_empty(&source).await;
        assert_eq!(baselines.len(), 1);
        assert_eq!(baselines[0].identifier, "cc");
    }

    #[tokio::test]
    async fn missing_catalog_path_yields_empty_list() {
        let config = BaselineConfig::default();
        assert!(config.load_baselines().await.is_empty());
        assert!(config.suggestion_sink().is_none());
    }

    #[test]
    fn finds_by_identifier_then_name() {
        let baselines = vec![
            baseline("cc", "Ciência da Computação"),
            baseline("ec", "Engenharia de Computação"),
        ];

        assert_eq!(find_baseline(&baselines, "ec").unwrap().identifier, "ec");
        assert_eq!(
            find_baseline(&baselines, " ciência da computação ")
                .unwrap()
                .identifier,
            "cc"
        );
        assert!(find_baseline(&baselines, "medicina").is_none());
    }
}
