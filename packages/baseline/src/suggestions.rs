//! Course suggestion storage.
//!
//! Suggestions are appended to a JSON-lines file, one object per line, for
//! later review before they are added to the baseline catalog.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use ira_transcript_models::CourseSuggestion;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt as _;

use crate::{BaselineError, SuggestionError, SuggestionSink};

/// A suggestion as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSuggestion {
    /// Unique identifier of the submission.
    pub id: String,
    /// Program name.
    pub name: String,
    /// Suggested cohort mean.
    pub course_mean: f64,
    /// Suggested cohort standard deviation.
    pub course_std: f64,
    /// When the suggestion was received.
    pub created_at: DateTime<Utc>,
}

/// Checks that a suggestion is complete before it is submitted.
///
/// # Errors
///
/// Returns the first [`SuggestionError`] found.
pub fn validate_suggestion(suggestion: &CourseSuggestion) -> Result<(), SuggestionError> {
    if suggestion.name.trim().is_empty() {
        return Err(SuggestionError::MissingName);
    }
    if !suggestion.mean.is_finite() {
        return Err(SuggestionError::InvalidMean);
    }
    if !suggestion.std.is_finite() {
        return Err(SuggestionError::InvalidStd);
    }
    Ok(())
}

/// Appends suggestions to a JSON-lines file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonLinesSuggestionSink {
    path: PathBuf,
}

impl JsonLinesSuggestionSink {
    /// Creates a sink appending to `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SuggestionSink for JsonLinesSuggestionSink {
    async fn submit(&self, suggestion: &CourseSuggestion) -> Result<String, BaselineError> {
        validate_suggestion(suggestion)?;

        let stored = StoredSuggestion {
            id: uuid::Uuid::new_v4().to_string(),
            name: suggestion.name.trim().to_owned(),
            course_mean: suggestion.mean,
            course_std: suggestion.std,
            created_at: Utc::now(),
        };

        let mut line = serde_json::to_string(&stored)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        log::info!(
            "Stored suggestion {} for {:?} in {}",
            stored.id,
            stored.name,
            self.path.display()
        );

        Ok(stored.id)
    }
}
