use fixturegen_core::FixtureKind;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source used for every fixture.
pub type FixtureRng = ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> FixtureRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Per-fixture stream so `all` runs stay independent of fixture order.
pub fn fixture_seed(seed: u64, kind: FixtureKind) -> u64 {
    hash_seed(seed, kind.id())
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_seeds_differ_per_kind() {
        let seeds: Vec<u64> = FixtureKind::ALL
            .iter()
            .map(|kind| fixture_seed(42, *kind))
            .collect();
        for (index, seed) in seeds.iter().enumerate() {
            assert!(!seeds[index + 1..].contains(seed));
        }
        assert_eq!(
            fixture_seed(42, FixtureKind::Csv),
            fixture_seed(42, FixtureKind::Csv)
        );
    }
}
