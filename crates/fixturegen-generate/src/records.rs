//! Fixed-schema record builders for the array, NDJSON and CSV fixtures.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::primitives::{
    capitalize, pick, random_date, random_datetime, random_datetime_seconds, random_float,
    random_lowercase, random_uppercase, random_uuid, round_to,
};

pub const PERSON_NAMES: &[&str] = &["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank"];
pub const LEDGER_WORDS: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "omega", "sigma", "lambda", "theta", "zeta",
];
pub const CSV_HEADER: [&str; 6] = [
    "date",
    "name",
    "description",
    "random_sum",
    "random_average",
    "random_decimals",
];

/// A builder producing one fixed-schema record per call.
pub trait RecordGenerator {
    type Record: Serialize;

    fn id(&self) -> &'static str;

    fn generate(&self, rng: &mut dyn RngCore) -> Self::Record;
}

/// Build exactly `count` records.
pub fn generate_records<G: RecordGenerator>(
    generator: &G,
    count: usize,
    rng: &mut dyn RngCore,
) -> Vec<G::Record> {
    (0..count).map(|_| generator.generate(rng)).collect()
}

/// Element of the JSON array fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    pub year: i32,
    pub created: String,
    pub random_number: i64,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogEntryGenerator;

impl CatalogEntryGenerator {
    pub const YEAR_MIN: i32 = 1990;
    pub const YEAR_MAX: i32 = 2025;

    fn created_window() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
        )
    }
}

impl RecordGenerator for CatalogEntryGenerator {
    type Record = CatalogEntry;

    fn id(&self) -> &'static str {
        "record.catalog_entry"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> CatalogEntry {
        let name = capitalize(&random_lowercase(6, rng));
        let description = (0..3)
            .map(|_| random_lowercase(5, rng))
            .collect::<Vec<_>>()
            .join(" ");
        let year = rng.random_range(Self::YEAR_MIN..=Self::YEAR_MAX);
        let (min, max) = Self::created_window();
        let created = random_date(min, max, rng).format("%Y-%m-%d").to_string();
        let random_number = rng.random_range(1..=1000);
        let score = random_float(0.0, 100.0, 2, rng);

        CatalogEntry {
            name,
            description,
            year,
            created,
            random_number,
            score,
        }
    }
}

/// One line of the NDJSON fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub score: f64,
    pub active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Default)]
pub struct PersonRecordGenerator;

impl PersonRecordGenerator {
    pub const AGE_MIN: u8 = 18;
    pub const AGE_MAX: u8 = 80;

    fn created_window() -> (NaiveDateTime, NaiveDateTime) {
        (
            NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap_or_default()
                .and_time(Default::default()),
            NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap_or_default()
                .and_time(Default::default()),
        )
    }
}

impl RecordGenerator for PersonRecordGenerator {
    type Record = PersonRecord;

    fn id(&self) -> &'static str {
        "record.person"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> PersonRecord {
        let id = random_uuid(rng);
        let name = pick(PERSON_NAMES, rng).to_string();
        let age = rng.random_range(Self::AGE_MIN..=Self::AGE_MAX);
        let score = random_float(0.0, 100.0, 2, rng);
        let active = rng.random_bool(0.5);
        let (min, max) = Self::created_window();
        let created_at = random_datetime(min, max, rng)
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string();

        PersonRecord {
            id,
            name,
            age,
            score,
            active,
            created_at,
        }
    }
}

/// One row of the CSV fixture. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub date: String,
    pub name: String,
    pub description: String,
    pub random_sum: i64,
    pub random_average: f64,
    pub random_decimals: f64,
}

/// Ledger rows dated within `span_days` before `end`.
#[derive(Debug, Clone)]
pub struct LedgerRowGenerator {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl LedgerRowGenerator {
    /// `None` when `span_days` is negative or the window start falls outside
    /// the representable date range.
    pub fn new(end: NaiveDateTime, span_days: i64) -> Option<Self> {
        if span_days < 0 {
            return None;
        }
        let span = TimeDelta::try_days(span_days)?;
        let start = end.checked_sub_signed(span)?;
        Some(Self { start, end })
    }

    pub fn window(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.start, self.end)
    }
}

impl RecordGenerator for LedgerRowGenerator {
    type Record = LedgerRow;

    fn id(&self) -> &'static str {
        "record.ledger_row"
    }

    fn generate(&self, rng: &mut dyn RngCore) -> LedgerRow {
        let (start, end) = self.window();
        let date = random_datetime_seconds(start, end, rng)
            .format("%Y-%m-%d")
            .to_string();
        let name = random_person_name(rng);
        let word_count = rng.random_range(5..=12);
        let description = (0..word_count)
            .map(|_| pick(LEDGER_WORDS, rng))
            .collect::<Vec<_>>()
            .join(" ");
        let random_sum = rng.random_range(100..=10000);
        let random_average = random_float(10.0, 1000.0, 2, rng);
        let random_decimals = round_to(rng.random::<f64>(), 6);

        LedgerRow {
            date,
            name,
            description,
            random_sum,
            random_average,
            random_decimals,
        }
    }
}

fn random_person_name(rng: &mut dyn RngCore) -> String {
    let first_len = rng.random_range(3..=7);
    let first = format!(
        "{}{}",
        random_uppercase(1, rng),
        random_lowercase(first_len, rng)
    );
    let last_len = rng.random_range(4..=8);
    let last = format!(
        "{}{}",
        random_uppercase(1, rng),
        random_lowercase(last_len, rng)
    );
    format!("{first} {last}")
}
