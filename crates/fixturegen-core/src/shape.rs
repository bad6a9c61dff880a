use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Distribution bounds for randomly shaped nested values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedShape {
    /// Inclusive lower bound for integers.
    pub int_min: i64,
    /// Inclusive upper bound for integers.
    pub int_max: i64,
    pub float_min: f64,
    pub float_max: f64,
    /// Decimal places floats are rounded to.
    pub float_scale: u32,
    /// Length of generated strings and mapping keys.
    pub string_len: usize,
    /// Inclusive lower bound for sequence and mapping sizes.
    pub min_children: usize,
    /// Inclusive upper bound for sequence and mapping sizes.
    pub max_children: usize,
}

impl Default for NestedShape {
    fn default() -> Self {
        Self {
            int_min: 1,
            int_max: 100,
            float_min: 1.0,
            float_max: 100.0,
            float_scale: 2,
            string_len: 6,
            min_children: 2,
            max_children: 5,
        }
    }
}

/// Largest scale that still rounds meaningfully in an `f64`.
pub const MAX_FLOAT_SCALE: u32 = 15;

impl NestedShape {
    /// Reject bounds that would make a random draw impossible.
    pub fn validate(&self) -> Result<()> {
        if self.int_min > self.int_max {
            return Err(invalid_shape("int_min must be <= int_max"));
        }
        if !self.float_min.is_finite() || !self.float_max.is_finite() {
            return Err(invalid_shape("float bounds must be finite"));
        }
        if self.float_min > self.float_max {
            return Err(invalid_shape("float_min must be <= float_max"));
        }
        if !(self.float_max - self.float_min).is_finite() {
            return Err(invalid_shape("float range width must be finite"));
        }
        if self.float_scale > MAX_FLOAT_SCALE {
            let message = format!("float_scale must be <= {MAX_FLOAT_SCALE}");
            return Err(invalid_shape(&message));
        }
        let factor = 10_f64.powi(self.float_scale as i32);
        let magnitude = self.float_min.abs().max(self.float_max.abs());
        if !(magnitude * factor).is_finite() {
            return Err(invalid_shape("scaled float bounds overflow"));
        }
        if self.string_len == 0 {
            return Err(invalid_shape("string_len must be > 0"));
        }
        if self.min_children == 0 {
            return Err(invalid_shape("min_children must be > 0"));
        }
        if self.min_children > self.max_children {
            return Err(invalid_shape("min_children must be <= max_children"));
        }
        Ok(())
    }
}

fn invalid_shape(message: &str) -> Error {
    Error::InvalidShape(message.to_string())
}
