//! Unit tests for the LocalizationEngine over the bundled tables.

use passgen::services::localization_engine::{
    LocalizationEngine, LocalizationEngineTrait, DEFAULT_LOCALE,
};
use passgen::types::analysis::{CrackTime, Strength, Tip};
use passgen::types::errors::LocaleError;
use rstest::rstest;

fn initialized_engine() -> LocalizationEngine {
    let mut engine = LocalizationEngine::new();
    engine.initialize().unwrap();
    engine
}

#[test]
fn test_default_locale_is_english() {
    let engine = initialized_engine();
    assert_eq!(engine.get_locale(), DEFAULT_LOCALE);
    assert_eq!(engine.t("time.instant"), "Instant");
}

#[test]
fn test_set_locale_switches_tables() {
    let mut engine = initialized_engine();
    engine.set_locale("zh").unwrap();
    assert_eq!(engine.get_locale(), "zh");
    assert_eq!(engine.t("time.instant"), "瞬间");
}

#[test]
fn test_set_locale_unsupported() {
    let mut engine = initialized_engine();
    let result = engine.set_locale("fr");
    assert!(matches!(result, Err(LocaleError::UnsupportedLocale(ref l)) if l == "fr"));
    assert_eq!(engine.get_locale(), "en");
}

#[test]
fn test_with_locale_rejects_unsupported() {
    assert!(LocalizationEngine::with_locale("de").is_err());
}

#[test]
fn test_missing_key_returns_key() {
    assert_eq!(initialized_engine().t("nonexistent.key"), "nonexistent.key");
}

#[rstest]
#[case("en", CrackTime::Years(3), "3 years")]
#[case("zh", CrackTime::Years(3), "3 年")]
#[case("en", CrackTime::Seconds(1), "1 seconds")]
#[case("zh", CrackTime::Uncrackable, "宇宙终结前无法破解")]
#[case("zh", CrackTime::Centuries(7), "7 世纪")]
fn test_format_crack_time(#[case] lang: &str, #[case] time: CrackTime, #[case] expected: &str) {
    let engine = LocalizationEngine::with_locale(lang).unwrap();
    assert_eq!(engine.format_crack_time(&time), expected);
}

#[rstest]
#[case("en", Tip::UuidInfo, "UUID v4 is random-based with negligible collision risk")]
#[case("zh", Tip::Perfect, "该密码符合最高安全准则")]
fn test_tip_rendering(#[case] lang: &str, #[case] tip: Tip, #[case] expected: &str) {
    let engine = LocalizationEngine::with_locale(lang).unwrap();
    assert_eq!(engine.tip(&tip), expected);
}

#[rstest]
#[case("en", "No character type selected")]
#[case("zh", "请至少选择一种字符类型")]
fn test_no_class_label(#[case] lang: &str, #[case] expected: &str) {
    let engine = LocalizationEngine::with_locale(lang).unwrap();
    assert_eq!(engine.t("labels.no_class"), expected);
}

#[test]
fn test_strength_labels() {
    let engine = initialized_engine();
    assert_eq!(engine.strength_label(Strength::Legendary), "Legendary");
    let zh = LocalizationEngine::with_locale("zh").unwrap();
    assert_eq!(zh.strength_label(Strength::Weak), "弱");
}
