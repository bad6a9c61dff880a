use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use fixturegen_core::{FixtureKind, NestedShape};

/// Options for the fixture engine.
///
/// Every field has a default, so a settings file only needs to name what it
/// overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory fixtures are written to.
    pub out_dir: PathBuf,
    /// Seed for the run. A random seed is drawn (and reported) when unset.
    pub seed: Option<u64>,
    pub nested: NestedOptions,
    pub array: ArrayOptions,
    pub ndjson: NdjsonOptions,
    pub csv: CsvOptions,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            seed: None,
            nested: NestedOptions::default(),
            array: ArrayOptions::default(),
            ndjson: NdjsonOptions::default(),
            csv: CsvOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedOptions {
    /// Maximum nesting depth, at least 1.
    pub max_depth: usize,
    /// Number of top-level keys in the document.
    pub num_keys: usize,
    pub shape: NestedShape,
    /// Output path; defaults to `random_nested.json` under `out_dir`.
    pub out: Option<PathBuf>,
}

impl Default for NestedOptions {
    fn default() -> Self {
        Self {
            max_depth: 10,
            num_keys: 30,
            shape: NestedShape::default(),
            out: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayOptions {
    pub count: usize,
    pub out: Option<PathBuf>,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            count: 10_000,
            out: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NdjsonOptions {
    pub count: usize,
    pub out: Option<PathBuf>,
}

impl Default for NdjsonOptions {
    fn default() -> Self {
        Self {
            count: 1_000,
            out: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    pub rows: usize,
    /// Width of the date window in days, ending at `end`.
    pub span_days: i64,
    /// Last instant rows may be dated at. Current UTC time when unset.
    pub end: Option<NaiveDateTime>,
    pub out: Option<PathBuf>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            rows: 10_000,
            span_days: 365 * 5,
            end: None,
            out: None,
        }
    }
}

impl GenerateOptions {
    /// Destination of `kind`, honoring per-fixture overrides.
    pub fn output_path(&self, kind: FixtureKind) -> PathBuf {
        let explicit = match kind {
            FixtureKind::NestedJson => self.nested.out.as_ref(),
            FixtureKind::JsonArray => self.array.out.as_ref(),
            FixtureKind::Ndjson => self.ndjson.out.as_ref(),
            FixtureKind::Csv => self.csv.out.as_ref(),
        };
        explicit
            .cloned()
            .unwrap_or_else(|| self.out_dir.join(kind.default_file_name()))
    }
}

/// Summary of one written fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureReport {
    pub kind: FixtureKind,
    pub path: PathBuf,
    pub seed: u64,
    /// Top-level entries for the nested document, records otherwise.
    pub records: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}
