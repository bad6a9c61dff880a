//! Seeded fixture generation for fixturegen.
//!
//! This crate turns [`GenerateOptions`] into fixture files on disk: a random
//! nested JSON document, a JSON array, NDJSON records and CSV rows. All
//! randomness flows through an explicitly passed source, so a seed fully
//! determines the output.

pub mod engine;
pub mod errors;
pub mod model;
pub mod nested;
pub mod output;
pub mod primitives;
pub mod records;
pub mod rng;

pub use engine::FixtureEngine;
pub use errors::GenerationError;
pub use model::{
    ArrayOptions, CsvOptions, FixtureReport, GenerateOptions, NdjsonOptions, NestedOptions,
};
pub use nested::RandomValueGenerator;
