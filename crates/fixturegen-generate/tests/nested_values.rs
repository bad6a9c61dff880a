use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fixturegen_core::{NestedShape, Value, ValueKind};
use fixturegen_generate::RandomValueGenerator;

fn assert_within_shape(value: &Value, shape: &NestedShape) {
    match value {
        Value::Integer(value) => {
            assert!((shape.int_min..=shape.int_max).contains(value), "int {value}");
        }
        Value::Float(value) => {
            assert!(
                *value >= shape.float_min && *value <= shape.float_max,
                "float {value}"
            );
            let scaled = value * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "float {value}");
        }
        Value::String(value) => assert_key(value, shape.string_len),
        Value::Sequence(items) => {
            assert!(
                (shape.min_children..=shape.max_children).contains(&items.len()),
                "sequence len {}",
                items.len()
            );
            for item in items {
                assert_within_shape(item, shape);
            }
        }
        Value::Mapping(mapping) => {
            assert!(
                (shape.min_children..=shape.max_children).contains(&mapping.len()),
                "mapping len {}",
                mapping.len()
            );
            for (key, item) in mapping.iter() {
                assert_key(key, shape.string_len);
                assert_within_shape(item, shape);
            }
        }
    }
}

fn assert_key(value: &str, len: usize) {
    assert_eq!(value.len(), len, "string {value:?}");
    assert!(value.chars().all(|ch| ch.is_ascii_lowercase()), "string {value:?}");
}

#[test]
fn depth_never_exceeds_max_depth() {
    let generator = RandomValueGenerator::default();
    for max_depth in 1..=6 {
        let mut rng = ChaCha8Rng::seed_from_u64(max_depth as u64);
        for _ in 0..200 {
            let value = generator.generate(1, max_depth, &mut rng);
            assert!(
                value.depth() <= max_depth,
                "depth {} > {max_depth}",
                value.depth()
            );
        }
    }
}

#[test]
fn max_depth_one_yields_scalars_only() {
    let generator = RandomValueGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..500 {
        let value = generator.generate(1, 1, &mut rng);
        assert!(value.is_scalar(), "unexpected {value:?}");
    }
}

#[test]
fn generated_values_respect_default_shape() {
    let generator = RandomValueGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..200 {
        let value = generator.generate(1, 4, &mut rng);
        assert_within_shape(&value, generator.shape());
    }
}

#[test]
fn every_variant_appears_above_the_depth_limit() {
    let generator = RandomValueGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(generator.generate(1, 3, &mut rng).kind());
    }
    assert_eq!(seen.len(), 5);
}

#[test]
fn document_has_requested_keys_and_depth() {
    let generator = RandomValueGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let document = generator.generate_document(3, 5, &mut rng);

    assert_eq!(document.len(), 5);
    for (key, value) in document.iter() {
        assert_key(key, 6);
        assert!(value.depth() <= 3);
    }
}

#[test]
fn custom_shape_controls_strings_and_children() {
    let shape = NestedShape {
        string_len: 3,
        min_children: 1,
        max_children: 1,
        ..NestedShape::default()
    };
    let generator = RandomValueGenerator::new(shape.clone());
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for _ in 0..200 {
        let value = generator.generate(1, 5, &mut rng);
        assert_within_shape(&value, &shape);
    }
}

#[test]
fn same_seed_same_document() {
    let generator = RandomValueGenerator::default();
    let mut rng_a = ChaCha8Rng::seed_from_u64(99);
    let mut rng_b = ChaCha8Rng::seed_from_u64(99);

    let doc_a = generator.generate_document(6, 10, &mut rng_a);
    let doc_b = generator.generate_document(6, 10, &mut rng_b);

    assert_eq!(doc_a, doc_b);
}

#[test]
fn accessors_follow_the_generated_variant() {
    let generator = RandomValueGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    for _ in 0..300 {
        let value = generator.generate(1, 3, &mut rng);
        match value.kind() {
            ValueKind::Integer => {
                let int = value.as_i64().expect("integer");
                assert!((1..=100).contains(&int));
                assert_eq!(value.as_f64(), None);
            }
            ValueKind::Float => {
                let float = value.as_f64().expect("float");
                assert!((1.0..=100.0).contains(&float));
                assert_eq!(value.as_i64(), None);
            }
            ValueKind::String => {
                assert_key(value.as_str().expect("string"), 6);
                assert!(value.as_sequence().is_none());
            }
            ValueKind::Sequence => {
                let items = value.as_sequence().expect("sequence");
                assert!((2..=5).contains(&items.len()));
                assert!(value.as_mapping().is_none());
            }
            ValueKind::Mapping => {
                let mapping = value.as_mapping().expect("mapping");
                assert!((2..=5).contains(&mapping.len()));
                assert!(value.as_str().is_none());
            }
        }
    }
}

#[test]
fn document_keys_match_owned_entries() {
    let generator = RandomValueGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let document = generator.generate_document(2, 6, &mut rng);

    let keys: Vec<String> = document.keys().map(str::to_string).collect();
    let owned: Vec<(String, Value)> = document.clone().into_iter().collect();

    assert_eq!(keys.len(), 6);
    for ((key, value), expected) in owned.iter().zip(&keys) {
        assert_eq!(key, expected);
        assert!(document.get(key).is_some());
        assert!(value.depth() <= 2);
    }
}
