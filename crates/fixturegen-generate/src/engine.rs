use std::path::Path;
use std::time::Instant;

use rand::RngCore;
use tracing::{debug, info};

use fixturegen_core::FixtureKind;

use crate::errors::GenerationError;
use crate::model::{FixtureReport, GenerateOptions};
use crate::nested::RandomValueGenerator;
use crate::output::csv::write_records_csv;
use crate::output::json::write_json_pretty;
use crate::output::ndjson::write_ndjson;
use crate::records::{
    CSV_HEADER, CatalogEntryGenerator, LedgerRowGenerator, PersonRecordGenerator,
    RecordGenerator, generate_records,
};
use crate::rng::{fixture_seed, seeded_rng};

/// Entry point for writing fixtures from options.
#[derive(Debug, Clone, Default)]
pub struct FixtureEngine {
    options: GenerateOptions,
}

impl FixtureEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Write a single fixture.
    pub fn run(&self, kind: FixtureKind) -> Result<FixtureReport, GenerationError> {
        self.validate()?;
        let seed = self.resolve_seed();
        self.run_with_seed(kind, seed)
    }

    /// Write every fixture kind with one shared run seed.
    pub fn run_all(&self) -> Result<Vec<FixtureReport>, GenerationError> {
        self.validate()?;
        let seed = self.resolve_seed();
        info!(seed, fixtures = FixtureKind::ALL.len(), "generation started");

        FixtureKind::ALL
            .iter()
            .map(|kind| self.run_with_seed(*kind, seed))
            .collect()
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        let nested = &self.options.nested;
        if nested.max_depth == 0 {
            return Err(GenerationError::InvalidOptions(
                "nested.max_depth must be >= 1".to_string(),
            ));
        }
        nested.shape.validate()?;

        if self.options.csv.span_days <= 0 {
            return Err(GenerationError::InvalidOptions(
                "csv.span_days must be > 0".to_string(),
            ));
        }
        self.ledger_generator()?;
        Ok(())
    }

    fn ledger_generator(&self) -> Result<LedgerRowGenerator, GenerationError> {
        let csv = &self.options.csv;
        let end = csv.end.unwrap_or_else(|| chrono::Utc::now().naive_utc());
        let Some(generator) = LedgerRowGenerator::new(end, csv.span_days) else {
            return Err(GenerationError::InvalidOptions(
                "csv.span_days reaches before the earliest representable date".to_string(),
            ));
        };
        Ok(generator)
    }

    fn resolve_seed(&self) -> u64 {
        self.options.seed.unwrap_or_else(rand::random)
    }

    fn run_with_seed(
        &self,
        kind: FixtureKind,
        seed: u64,
    ) -> Result<FixtureReport, GenerationError> {
        let start = Instant::now();
        let path = self.options.output_path(kind);
        let mut rng = seeded_rng(fixture_seed(seed, kind));

        info!(kind = %kind, seed, path = %path.display(), "generating fixture");

        let (records, bytes_written) = match kind {
            FixtureKind::NestedJson => self.write_nested(&path, &mut rng)?,
            FixtureKind::JsonArray => {
                let generator = CatalogEntryGenerator;
                let entries = self.build(&generator, self.options.array.count, &mut rng);
                (entries.len(), write_json_pretty(&path, &entries)?)
            }
            FixtureKind::Ndjson => {
                let generator = PersonRecordGenerator;
                let records = self.build(&generator, self.options.ndjson.count, &mut rng);
                (records.len(), write_ndjson(&path, &records)?)
            }
            FixtureKind::Csv => {
                let generator = self.ledger_generator()?;
                let rows = self.build(&generator, self.options.csv.rows, &mut rng);
                (rows.len(), write_records_csv(&path, &CSV_HEADER, &rows)?)
            }
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(kind = %kind, records, bytes_written, duration_ms, "fixture written");

        Ok(FixtureReport {
            kind,
            path,
            seed,
            records: records as u64,
            bytes_written,
            duration_ms,
        })
    }

    fn write_nested(
        &self,
        path: &Path,
        rng: &mut dyn RngCore,
    ) -> Result<(usize, u64), GenerationError> {
        let nested = &self.options.nested;
        debug!(
            max_depth = nested.max_depth,
            num_keys = nested.num_keys,
            shape = ?nested.shape,
            "nested options resolved"
        );
        let generator = RandomValueGenerator::new(nested.shape.clone());
        let document = generator.generate_document(nested.max_depth, nested.num_keys, rng);
        let bytes = write_json_pretty(path, &document)?;
        Ok((document.len(), bytes))
    }

    fn build<G: RecordGenerator>(
        &self,
        generator: &G,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<G::Record> {
        debug!(generator = generator.id(), count, "building records");
        generate_records(generator, count, rng)
    }
}
