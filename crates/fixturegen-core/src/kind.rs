use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixture files fixturegen knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixtureKind {
    /// Random nested JSON document.
    NestedJson,
    /// JSON array of fixed-schema catalog entries.
    JsonArray,
    /// Newline-delimited fixed-schema person records.
    Ndjson,
    /// Header row plus fixed-schema ledger rows.
    Csv,
}

impl FixtureKind {
    pub const ALL: [FixtureKind; 4] = [
        FixtureKind::NestedJson,
        FixtureKind::JsonArray,
        FixtureKind::Ndjson,
        FixtureKind::Csv,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FixtureKind::NestedJson => "json",
            FixtureKind::JsonArray => "json-array",
            FixtureKind::Ndjson => "ndjson",
            FixtureKind::Csv => "csv",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            FixtureKind::NestedJson => "random_nested.json",
            FixtureKind::JsonArray => "random_array.json",
            FixtureKind::Ndjson => "random_data.ndjson",
            FixtureKind::Csv => "random_data.csv",
        }
    }

    /// Human label used in confirmation messages.
    pub fn label(self) -> &'static str {
        match self {
            FixtureKind::NestedJson => "Random nested JSON",
            FixtureKind::JsonArray => "Random JSON array",
            FixtureKind::Ndjson => "NDJSON",
            FixtureKind::Csv => "CSV",
        }
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
