//! Shared helpers for integration tests.

#![allow(dead_code)]

use brazilnum::IdKind;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("brazilnum=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Real-world and hand-checked valid identifiers, bare digits.
pub fn known_valid(kind: IdKind) -> &'static [&'static str] {
    match kind {
        IdKind::Cpf => &["11144477735", "52998224725", "00000000191", "12345678909"],
        IdKind::Cnpj => &[
            "11222333000181",
            "11444777000161",
            "33000167000101",
            "00000000000191",
            "60746948000112",
        ],
        IdKind::Pis => &["12345678900", "17033259504", "10000000008"],
        IdKind::Cei => &["111111111118", "100000000003", "102249999891"],
    }
}

/// Replaces the digit at `position` with `digit`.
pub fn substitute(id: &str, position: usize, digit: char) -> String {
    id.char_indices()
        .map(|(i, c)| if i == position { digit } else { c })
        .collect()
}

/// Fraction of single-digit payload substitutions that `validate` rejects.
pub fn mutation_detection_rate(ids: &[String], kind: IdKind, validate: fn(&str) -> bool) -> f64 {
    let mut total = 0u32;
    let mut detected = 0u32;

    for id in ids {
        assert!(validate(id), "fixture {id} is not a valid {kind}");
        for position in 0..kind.payload_len() {
            for digit in '0'..='9' {
                if id[position..].starts_with(digit) {
                    continue;
                }
                total += 1;
                if !validate(&substitute(id, position, digit)) {
                    detected += 1;
                }
            }
        }
    }

    f64::from(detected) / f64::from(total)
}
