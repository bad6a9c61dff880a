//! Primitive distributions shared by the nested generator and record builders.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `len` letters drawn uniformly from `a..=z`.
pub fn random_lowercase(len: usize, rng: &mut dyn RngCore) -> String {
    random_from_alphabet(LOWERCASE, len, rng)
}

pub fn random_uppercase(len: usize, rng: &mut dyn RngCore) -> String {
    random_from_alphabet(UPPERCASE, len, rng)
}

fn random_from_alphabet(alphabet: &[u8], len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn round_to(value: f64, scale: u32) -> f64 {
    let factor = 10_f64.powi(scale as i32);
    (value * factor).round() / factor
}

/// Uniform float in `[min, max]` rounded to `scale` decimals.
pub fn random_float(min: f64, max: f64, scale: u32, rng: &mut dyn RngCore) -> f64 {
    round_to(rng.random_range(min..=max), scale)
}

/// Uniform whole day in `[min, max]`.
pub fn random_date(min: NaiveDate, max: NaiveDate, rng: &mut dyn RngCore) -> NaiveDate {
    let span = (max - min).num_days();
    if span <= 0 {
        return min;
    }
    min + Duration::days(rng.random_range(0..=span))
}

/// Uniform instant in `[min, max)` with microsecond resolution.
pub fn random_datetime(
    min: NaiveDateTime,
    max: NaiveDateTime,
    rng: &mut dyn RngCore,
) -> NaiveDateTime {
    let span = (max - min).num_microseconds().unwrap_or(i64::MAX);
    if span <= 0 {
        return min;
    }
    min + Duration::microseconds(rng.random_range(0..span))
}

/// Uniform whole second in `[min, max]`.
pub fn random_datetime_seconds(
    min: NaiveDateTime,
    max: NaiveDateTime,
    rng: &mut dyn RngCore,
) -> NaiveDateTime {
    let span = (max - min).num_seconds();
    if span <= 0 {
        return min;
    }
    min + Duration::seconds(rng.random_range(0..=span))
}

/// Version 4 UUID built from the caller's random source.
pub fn random_uuid(rng: &mut dyn RngCore) -> String {
    let bytes: [u8; 16] = rng.random();
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    uuid.to_string()
}

pub fn pick<'a>(values: &'a [&'a str], rng: &mut dyn RngCore) -> &'a str {
    values.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;

    #[test]
    fn capitalize_handles_empty_and_ascii() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("qwerty"), "Qwerty");
    }

    #[test]
    fn round_to_trims_decimals() {
        assert_eq!(round_to(12.3456, 2), 12.35);
        assert_eq!(round_to(0.1234564, 6), 0.123456);
    }

    #[test]
    fn random_uuid_is_version_four() {
        let mut rng = seeded_rng(9);
        let value = random_uuid(&mut rng);
        let parsed = uuid::Uuid::parse_str(&value).expect("parse uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn degenerate_ranges_return_lower_bound() {
        let mut rng = seeded_rng(3);
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        assert_eq!(random_date(day, day, &mut rng), day);

        let instant = day.and_hms_opt(0, 0, 0).unwrap_or_default();
        assert_eq!(random_datetime(instant, instant, &mut rng), instant);
    }
}
