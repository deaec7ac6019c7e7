//! Unit tests for GeneratorSession, the caller-side orchestration.

use passgen::app::{GenerationOutcome, GeneratorSession};
use passgen::services::crypto_service::{CryptoService, CryptoServiceTrait};
use passgen::types::analysis::Strength;
use passgen::types::errors::CryptoError;
use passgen::types::options::{GeneratorMode, PasswordOptions, UuidOptions};
use passgen::types::settings::GeneratorSettings;

/// A source that works until switched off.
struct Switchable {
    inner: CryptoService,
    available: std::cell::Cell<bool>,
}

impl Switchable {
    fn new() -> Self {
        Self {
            inner: CryptoService::new(),
            available: std::cell::Cell::new(true),
        }
    }
}

impl CryptoServiceTrait for Switchable {
    fn fill_random(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        if self.available.get() {
            self.inner.fill_random(dest)
        } else {
            Err(CryptoError::RandomGeneration("switched off".to_string()))
        }
    }
}

fn session() -> GeneratorSession {
    GeneratorSession::new(&GeneratorSettings::default()).unwrap()
}

#[test]
fn test_default_password_scenario() {
    let mut s = session();
    let outcome = s.generate_password().unwrap();

    assert_eq!(outcome.password.chars().count(), 16);
    assert!(outcome.strength.score >= 80);
    assert!(outcome.strength.strength >= Strength::Strong);

    let analysis = outcome.analysis.expect("non-empty password is analyzed");
    assert!((analysis.entropy - 16.0 * 91f64.log2()).abs() < 1e-9);
    assert_eq!(analysis.cracking_time, "Uncrackable before universe ends");

    assert_eq!(s.history().len(), 1);
    assert_eq!(s.history()[0].value, outcome.password);
}

#[test]
fn test_all_classes_disabled() {
    let mut s = session();
    s.set_password_options(PasswordOptions {
        length: 16,
        include_uppercase: false,
        include_lowercase: false,
        include_numbers: false,
        include_symbols: false,
    });

    let outcome = s.generate_password().unwrap();
    assert_eq!(outcome.password, "");
    assert_eq!(outcome.strength.score, 0);
    assert_eq!(outcome.strength.strength, Strength::Weak);
    assert!(outcome.analysis.is_none());
    assert!(s.history().is_empty());
}

#[test]
fn test_options_are_clamped_by_session() {
    let mut s = session();
    s.set_password_options(PasswordOptions {
        length: 1,
        ..PasswordOptions::default()
    });
    assert_eq!(s.password_options().length, 4);

    s.set_uuid_options(UuidOptions {
        quantity: 99,
        uppercase: false,
    });
    assert_eq!(s.uuid_options().quantity, 50);
}

/// A batch of three adds exactly one ledger entry: the first UUID.
#[test]
fn test_uuid_batch_records_first_only() {
    let mut s = session();
    s.set_uuid_options(UuidOptions {
        quantity: 3,
        uppercase: false,
    });

    let uuids = s.generate_uuids().unwrap();
    assert_eq!(uuids.len(), 3);
    assert_eq!(s.history().len(), 1);
    assert_eq!(s.history()[0].value, uuids[0]);
}

#[test]
fn test_generate_dispatches_on_mode() {
    let mut s = session();
    assert!(matches!(
        s.generate(GeneratorMode::Password).unwrap(),
        GenerationOutcome::Password(_)
    ));
    assert!(matches!(
        s.generate(GeneratorMode::Uuid).unwrap(),
        GenerationOutcome::Uuids(ref u) if u.len() == 1
    ));
    assert_eq!(s.history().len(), 2);
}

#[test]
fn test_history_mixes_modes_and_caps_at_five() {
    let mut s = session();
    for _ in 0..4 {
        s.generate_password().unwrap();
    }
    let uuids = s.generate_uuids().unwrap();
    s.generate_password().unwrap();

    assert_eq!(s.history().len(), 5);
    assert_eq!(s.history()[1].value, uuids[0]);
}

#[test]
fn test_failed_source_records_nothing() {
    let settings = GeneratorSettings::default();
    let password_source = Switchable::new();
    let uuid_source = Switchable::new();
    password_source.available.set(false);
    uuid_source.available.set(false);

    let mut s = GeneratorSession::with_sources(password_source, uuid_source, &settings).unwrap();

    assert!(matches!(
        s.generate_password(),
        Err(CryptoError::RandomGeneration(_))
    ));
    assert!(s.generate_uuids().is_err());
    assert!(s.history().is_empty());
}

#[test]
fn test_language_switch_changes_analysis_text() {
    let mut s = session();
    s.set_password_options(PasswordOptions {
        length: 8,
        include_uppercase: false,
        include_lowercase: true,
        include_numbers: false,
        include_symbols: false,
    });
    s.set_language("zh").unwrap();

    let analysis = s.generate_password().unwrap().analysis.unwrap();
    assert_eq!(analysis.cracking_time, "2 秒");
    assert!(s.set_language("xx").is_err());
}

#[test]
fn test_unsupported_language_in_settings_is_an_error() {
    let settings = GeneratorSettings {
        language: "xx".to_string(),
        ..GeneratorSettings::default()
    };
    assert!(GeneratorSession::new(&settings).is_err());
}
