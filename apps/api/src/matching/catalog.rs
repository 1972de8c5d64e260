//! Catalog Loader — reads the CSV program catalog once and holds it read-only.
//!
//! `AppState` holds the loaded catalog as `Arc<Catalog>`. Where it comes from is behind
//! `CatalogSource`, so tests can hand in rows without touching the filesystem.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// Separator between entries of the optional `CAREERS` column.
pub const CAREERS_DELIMITER: char = ';';

/// One program offering. `riasec_code` is upper-cased at load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogRow {
    #[serde(rename = "UNIVERSITY")]
    pub university: String,
    #[serde(rename = "CAMPUS")]
    pub campus: String,
    #[serde(rename = "COURSES")]
    pub course: String,
    #[serde(rename = "MAJOR")]
    pub major: String,
    #[serde(rename = "RIASEC CODE")]
    pub riasec_code: String,
    /// Optional column; absent or blank means no careers listed.
    #[serde(rename = "CAREERS", default, deserialize_with = "deserialize_careers")]
    pub careers: Vec<String>,
}

fn deserialize_careers<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(split_careers(&raw))
}

/// Splits `"Engineer; Site Manager"` into trimmed, non-empty entries.
fn split_careers(raw: &str) -> Vec<String> {
    raw.split(CAREERS_DELIMITER)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

impl CatalogRow {
    pub fn new(
        university: impl Into<String>,
        campus: impl Into<String>,
        course: impl Into<String>,
        major: impl Into<String>,
        riasec_code: impl Into<String>,
    ) -> Self {
        CatalogRow {
            university: university.into(),
            campus: campus.into(),
            course: course.into(),
            major: major.into(),
            riasec_code: riasec_code.into().to_uppercase(),
            careers: Vec::new(),
        }
    }

    pub fn with_careers<I, S>(mut self, careers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.careers = careers.into_iter().map(Into::into).collect();
        self
    }
}

/// The full catalog in source order. Row order matters: it breaks score ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.riasec_code = row.riasec_code.to_uppercase();
                row
            })
            .collect();
        Catalog { rows }
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct course names.
    pub fn course_count(&self) -> usize {
        let mut courses: Vec<&str> = self.rows.iter().map(|r| r.course.as_str()).collect();
        courses.sort_unstable();
        courses.dedup();
        courses.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sources
// ────────────────────────────────────────────────────────────────────────────

/// Where the catalog comes from. Loaded once at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog, AppError>;
}

/// Reads `UNIVERSITY, CAMPUS, COURSES, MAJOR, RIASEC CODE` (and optional `CAREERS`) columns
/// from a CSV file.
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvCatalogSource { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for CsvCatalogSource {
    async fn load(&self) -> Result<Catalog, AppError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| AppError::MissingCatalog {
                path: self.path.clone(),
                source,
            })?;

        let catalog = parse_catalog(&bytes, &self.path)?;
        tracing::info!(
            rows = catalog.len(),
            courses = catalog.course_count(),
            "Loaded catalog from {}",
            self.path.display()
        );
        Ok(catalog)
    }
}

/// Rows handed in directly.
pub struct StaticCatalogSource(pub Vec<CatalogRow>);

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn load(&self) -> Result<Catalog, AppError> {
        Ok(Catalog::new(self.0.clone()))
    }
}

/// Parses CSV bytes into a catalog. Extra columns are ignored; cells are trimmed.
pub fn parse_catalog(bytes: &[u8], path: &Path) -> Result<Catalog, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let rows = reader
        .deserialize::<CatalogRow>()
        .collect::<Result<Vec<_>, csv::Error>>()
        .map_err(|e| AppError::MalformedCatalog {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(Catalog::new(rows))
}
