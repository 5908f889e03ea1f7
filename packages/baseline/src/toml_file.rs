//! TOML-backed baseline catalog.
//!
//! ```toml
//! [[course]]
//! id = "cc"
//! name = "Ciência da Computação"
//! mean = 7.12
//! std = 1.35
//! ```

use std::path::PathBuf;

use ira_transcript_models::CourseBaseline;
use serde::Deserialize;

use crate::{BaselineError, BaselineSource};

#[derive(Debug, Deserialize)]
struct Catalog {
    #[serde(default, rename = "course")]
    courses: Vec<CourseBaseline>,
}

/// Parses a baseline catalog from TOML text.
///
/// # Errors
///
/// Returns [`BaselineError::Toml`] if the text is not a valid catalog.
pub fn parse_catalog(text: &str) -> Result<Vec<CourseBaseline>, BaselineError> {
    let catalog: Catalog = toml::from_str(text)?;
    Ok(catalog.courses)
}

/// A baseline catalog stored in a TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TomlBaselineFile {
    path: PathBuf,
}

impl TomlBaselineFile {
    /// Creates a source reading from `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BaselineSource for TomlBaselineFile {
    async fn fetch_baselines(&self) -> Result<Vec<CourseBaseline>, BaselineError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        parse_catalog(&text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch_or_empty;

    const EXAMPLE: &str = include_str!("../baselines.example.toml");

    #[test]
    fn parses_example_catalog() {
        let baselines = parse_catalog(EXAMPLE).unwrap();

        assert_eq!(baselines.len(), 2);
        assert_eq!(baselines[0].identifier, "example-cs");
        assert!((baselines[0].mean - 7.0).abs() < f64::EPSILON);
        assert!((baselines[1].std - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_long_field_names() {
        let baselines = parse_catalog(
            "[[course]]\nidentifier = \"cc\"\ndisplayName = \"Computação\"\nmean = 7.0\nstd = 0.0\n",
        )
        .unwrap();
        assert_eq!(baselines[0].display_name, "Computação");
    }

    #[test]
    fn empty_catalog_has_no_courses() {
        assert!(parse_catalog("").unwrap().is_empty());
    }

    #[test]
    fn rejects_incomplete_entries() {
        assert!(matches!(
            parse_catalog("[[course]]\nid = \"cc\"\n"),
            Err(BaselineError::Toml(_))
        ));
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_catalog() {
        let source = TomlBaselineFile::new(PathBuf::from("/nonexistent/ira/baselines.toml"));

        assert!(matches!(
            source.fetch_baselines().await,
            Err(BaselineError::Io(_))
        ));
        assert!(fetch_or_empty(&source).await.is_empty());
    }

    #[tokio::test]
    async fn reads_catalog_from_disk() {
        let path = std::env::temp_dir().join(format!("ira-baselines-{}.toml", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, EXAMPLE).await.unwrap();

        let baselines = TomlBaselineFile::new(path.clone())
            .fetch_baselines()
            .await
            .unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(baselines.len(), 2);
    }
}
