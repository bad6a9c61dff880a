//! Core contracts for fixturegen.
//!
//! This crate defines the nested value model, the distribution bounds used to
//! shape generated values, and the catalogue of fixture kinds shared by the
//! generator and the CLI.

pub mod error;
pub mod kind;
pub mod shape;
pub mod value;

pub use error::{Error, Result};
pub use kind::FixtureKind;
pub use shape::NestedShape;
pub use value::{Mapping, Value, ValueKind};
