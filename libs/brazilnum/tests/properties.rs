mod common;

use brazilnum::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::{init_tracing, known_valid, mutation_detection_rate};

type Validator = fn(&str) -> bool;
type Formatter = fn(&str) -> String;

fn validator(kind: IdKind) -> Validator {
    match kind {
        IdKind::Cpf => |s| validate_cpf(s),
        IdKind::Cnpj => |s| validate_cnpj(s),
        IdKind::Pis => |s| validate_pis(s),
        IdKind::Cei => |s| validate_cei(s),
    }
}

fn formatter(kind: IdKind) -> Formatter {
    match kind {
        IdKind::Cpf => |s| format_cpf(s),
        IdKind::Cnpj => |s| format_cnpj(s),
        IdKind::Pis => |s| format_pis(s),
        IdKind::Cei => |s| format_cei(s),
    }
}

fn random_raw(kind: IdKind, rng: &mut StdRng) -> String {
    match kind {
        IdKind::Cpf => random_cpf_with(rng, false),
        IdKind::Cnpj => random_cnpj_with(rng, false),
        IdKind::Pis => random_pis_with(rng, false),
        IdKind::Cei => random_cei_with(rng, false),
    }
}

fn pad(kind: IdKind, id: &str, validate: bool) -> Result<String> {
    match kind {
        IdKind::Cpf => pad_cpf(id, validate),
        IdKind::Cnpj => pad_cnpj(id, validate),
        IdKind::Pis => pad_pis(id, validate),
        IdKind::Cei => pad_cei(id, validate),
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_cpf_scenario() {
    assert!(validate_cpf("11144477735"));
    assert_eq!(format_cpf("11144477735"), "111.444.777-35");
    assert!(!validate_cpf("11144477736"));
}

#[test]
fn test_cnpj_from_firm_scenario() {
    let cnpj = cnpj_from_firm_id("1111444477", "0001").unwrap();
    assert_eq!(cnpj.len(), 14);
    assert_eq!(&cnpj[8..12], "0001");
    assert!(validate_cnpj(&cnpj));
}

#[test]
fn test_pis_scenario() {
    let d = pis_check_digit("1234567890").unwrap();
    assert!(validate_pis(format!("1234567890{d}")));
}

#[test]
fn test_cei_scenario() {
    let mut completed = 0;
    for k in 0..500u64 {
        let stem = (10_000_000_000 + k * 179_999_999).to_string();
        let check = cei_check_digit(&stem).unwrap();
        if check < 10 {
            let cei = format!("{stem}{check}");
            assert_eq!(cei.len(), 12);
            assert!(validate_cei(&cei), "{cei} should be valid");
            completed += 1;
        }
    }
    assert!(completed > 400);
}

#[test]
fn test_pad_cnpj_scenario() {
    assert_eq!(pad_cnpj(123, false).unwrap(), "00000000000123");
}

#[test]
fn test_known_valid_identifiers() {
    for kind in IdKind::ALL {
        let validate = validator(kind);
        let format = formatter(kind);
        for id in known_valid(kind) {
            assert!(validate(id), "{id} should be a valid {kind}");
            assert!(validate(&format(id)), "formatted {id} should be a valid {kind}");
        }
    }
}

#[test]
fn test_errors_propagate_with_kind() {
    assert_eq!(cpf_check_digits("").unwrap_err().kind(), IdKind::Cpf);
    assert_eq!(cnpj_check_digits("").unwrap_err().kind(), IdKind::Cnpj);
    assert_eq!(pis_check_digit("").unwrap_err().kind(), IdKind::Pis);
    assert_eq!(cei_check_digit("").unwrap_err().kind(), IdKind::Cei);

    for kind in IdKind::ALL {
        let err = pad(kind, "", false).unwrap_err();
        assert!(err.is_invalid());
        assert_eq!(err.kind(), kind);
    }
}

#[test]
fn test_typed_parse_rejects() {
    init_tracing();

    assert!(Cpf::parse("11144477736").is_err());
    assert!(Cnpj::parse("11.222.333/0001-82").is_err());
    assert!(Pis::parse(12345678901u64).is_err());
    assert!(Cei::parse("").is_err());
}

// =============================================================================
// Generators
// =============================================================================

#[test]
fn test_random_draws_always_valid() {
    let mut rng = StdRng::seed_from_u64(0x6272_617a);
    for kind in IdKind::ALL {
        let validate = validator(kind);
        for _ in 0..1000 {
            let id = random_raw(kind, &mut rng);
            assert_eq!(id.len(), kind.length());
            assert!(validate(&id), "generated invalid {kind}: {id}");
        }
    }
}

#[test]
fn test_random_thread_rng_draws_always_valid() {
    for _ in 0..1000 {
        assert!(validate_cpf(random_cpf(false)));
        assert!(validate_cnpj(random_cnpj(false)));
        assert!(validate_pis(random_pis(false)));
        assert!(validate_cei(random_cei(false)));
    }
}

#[test]
fn test_random_formatted_round_trips() {
    for _ in 0..100 {
        let cpf = random_cpf(true);
        assert_eq!(format_cpf(clean_cpf(&cpf)), cpf);
        let cnpj = random_cnpj(true);
        assert_eq!(format_cnpj(clean_cnpj(&cnpj)), cnpj);
        let pis = random_pis(true);
        assert_eq!(format_pis(clean_pis(&pis)), pis);
        let cei = random_cei(true);
        assert_eq!(format_cei(clean_cei(&cei)), cei);
    }
}

// =============================================================================
// Single-digit error detection
// =============================================================================

fn cpf_fixtures() -> Vec<String> {
    (0..200u64)
        .map(|k| {
            let stem = (100_000_000 + k * 4_499_977).to_string();
            let (a, b) = cpf_check_digits(&stem).unwrap();
            format!("{stem}{a}{b}")
        })
        .collect()
}

fn cnpj_fixtures() -> Vec<String> {
    (0..200u64)
        .map(|k| {
            let firm = 10_000_000 + k * 449_993;
            let establishment = format!("000{}", k % 5 + 1);
            cnpj_from_firm_id(firm, establishment).unwrap()
        })
        .collect()
}

fn pis_fixtures() -> Vec<String> {
    (0..200u64)
        .map(|k| {
            let stem = (1_000_000_000 + k * 44_999_971).to_string();
            let check = pis_check_digit(&stem).unwrap();
            format!("{stem}{check}")
        })
        .collect()
}

fn cei_fixtures() -> Vec<String> {
    (0..400u64)
        .filter_map(|k| {
            let stem = (10_000_000_000 + k * 224_999_989).to_string();
            let check = cei_check_digit(&stem).unwrap();
            (check < 10).then(|| format!("{stem}{check}"))
        })
        .take(200)
        .collect()
}

#[test]
fn test_cnpj_detects_every_substitution() {
    let rate = mutation_detection_rate(&cnpj_fixtures(), IdKind::Cnpj, validator(IdKind::Cnpj));
    assert_eq!(rate, 1.0);
}

#[test]
fn test_cpf_detects_substitutions() {
    let rate = mutation_detection_rate(&cpf_fixtures(), IdKind::Cpf, validator(IdKind::Cpf));
    assert!(rate >= 0.99, "CPF detection rate {rate}");
}

#[test]
fn test_pis_detects_substitutions() {
    // Remainders 0 and 1 share check digit 0.
    let rate = mutation_detection_rate(&pis_fixtures(), IdKind::Pis, validator(IdKind::Pis));
    assert!(rate >= 0.98, "PIS/PASEP detection rate {rate}");
}

#[test]
fn test_cei_detects_substitutions() {
    // Only the digit sum of the last two digits of the weighted sum is checked.
    let rate = mutation_detection_rate(&cei_fixtures(), IdKind::Cei, validator(IdKind::Cei));
    assert!(rate >= 0.92, "CEI detection rate {rate}");
}

// =============================================================================
// Properties
// =============================================================================

fn any_kind() -> impl Strategy<Value = IdKind> {
    prop::sample::select(IdKind::ALL.to_vec())
}

proptest! {
    /// Formatting is punctuation only.
    #[test]
    fn format_preserves_validity(kind in any_kind(), raw in "[0-9]{0,16}") {
        let formatted = formatter(kind)(&raw);
        prop_assert_eq!(validator(kind)(&formatted), validator(kind)(&raw));
        prop_assert_eq!(clean_id(&formatted), clean_id(&raw));
    }

    /// Punctuated input validates like its bare digits.
    #[test]
    fn validate_ignores_noise(kind in any_kind(), seed in any::<u64>(), noise in "[ ./-]{0,3}") {
        let mut rng = StdRng::seed_from_u64(seed);
        let id = random_raw(kind, &mut rng);
        let noisy = format!("{noise}{id}{noise}");
        prop_assert!(validator(kind)(&noisy));
    }

    /// Padding twice changes nothing.
    #[test]
    fn pad_is_idempotent(kind in any_kind(), value in any::<u64>()) {
        let once = pad(kind, &value.to_string(), false).unwrap();
        let twice = pad(kind, &once, false).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Stripping leading zeros from a valid identifier is undone by pad.
    #[test]
    fn pad_recovers_leading_zeros(kind in any_kind(), seed in any::<u64>(), zeros in 1usize..4) {
        let mut rng = StdRng::seed_from_u64(seed);
        let id = random_raw(kind, &mut rng);
        let mut shifted = "0".repeat(zeros);
        shifted.push_str(&id[zeros..]);

        let value: u64 = shifted.parse().unwrap();
        let padded = pad(kind, &value.to_string(), false).unwrap();
        prop_assert_eq!(&padded, &shifted);
    }

    /// Validation answers for any input without panicking.
    #[test]
    fn validate_never_panics(kind in any_kind(), raw in ".{0,40}") {
        let _ = validator(kind)(&raw);
    }

    /// Check digits read from a valid identifier match its trailing digits.
    #[test]
    fn check_digits_match_suffix(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);

        let cpf = random_cpf_with(&mut rng, false);
        let (a, b) = cpf_check_digits(&cpf).unwrap();
        prop_assert_eq!(format!("{a}{b}"), &cpf[9..]);

        let cnpj = random_cnpj_with(&mut rng, false);
        let (a, b) = cnpj_check_digits(&cnpj).unwrap();
        prop_assert_eq!(format!("{a}{b}"), &cnpj[12..]);

        let pis = random_pis_with(&mut rng, false);
        prop_assert_eq!(pis_check_digit(&pis).unwrap().to_string(), &pis[10..]);

        let cei = random_cei_with(&mut rng, false);
        prop_assert_eq!(cei_check_digit(&cei).unwrap().to_string(), &cei[11..]);
    }
}
