use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use fixturegen_core::{Mapping, NestedShape, Value, ValueKind};

use crate::primitives::{random_float, random_lowercase};

/// Builds randomly shaped, depth-bounded value trees.
#[derive(Debug, Clone, Default)]
pub struct RandomValueGenerator {
    shape: NestedShape,
}

impl RandomValueGenerator {
    pub fn new(shape: NestedShape) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> &NestedShape {
        &self.shape
    }

    /// Generate one value at `depth`.
    ///
    /// Once `depth >= max_depth` only scalars are drawn, so recursion stops
    /// there regardless of the random choices made above it.
    pub fn generate(&self, depth: usize, max_depth: usize, rng: &mut dyn RngCore) -> Value {
        let kinds: &[ValueKind] = if depth >= max_depth {
            &ValueKind::SCALARS
        } else {
            &ValueKind::ALL
        };
        let kind = kinds.choose(rng).copied().unwrap_or(ValueKind::Integer);

        match kind {
            ValueKind::Integer => {
                Value::Integer(rng.random_range(self.shape.int_min..=self.shape.int_max))
            }
            ValueKind::Float => Value::Float(random_float(
                self.shape.float_min,
                self.shape.float_max,
                self.shape.float_scale,
                rng,
            )),
            ValueKind::String => Value::String(self.random_key(rng)),
            ValueKind::Sequence => {
                let len = self.child_count(rng);
                Value::Sequence(
                    (0..len)
                        .map(|_| self.generate(depth + 1, max_depth, rng))
                        .collect(),
                )
            }
            ValueKind::Mapping => {
                let len = self.child_count(rng);
                let mut mapping = Mapping::with_capacity(len);
                for _ in 0..len {
                    let key = self.random_key(rng);
                    let value = self.generate(depth + 1, max_depth, rng);
                    mapping.push(key, value);
                }
                Value::Mapping(mapping)
            }
        }
    }

    /// Root mapping of `num_keys` random keys, each holding `generate(1, max_depth)`.
    pub fn generate_document(
        &self,
        max_depth: usize,
        num_keys: usize,
        rng: &mut dyn RngCore,
    ) -> Mapping {
        let mut document = Mapping::with_capacity(num_keys);
        for _ in 0..num_keys {
            let key = self.random_key(rng);
            let value = self.generate(1, max_depth, rng);
            document.push(key, value);
        }
        document
    }

    fn random_key(&self, rng: &mut dyn RngCore) -> String {
        random_lowercase(self.shape.string_len, rng)
    }

    fn child_count(&self, rng: &mut dyn RngCore) -> usize {
        rng.random_range(self.shape.min_children..=self.shape.max_children)
    }
}
