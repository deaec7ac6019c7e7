use std::collections::HashMap;

use serde_json::Value;

use crate::types::analysis::{CrackTime, Strength, Tip};
use crate::types::errors::LocaleError;

/// Supported locales with their bundled tables.
const BUNDLED_LOCALES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("zh", include_str!("../../locales/zh.json")),
];

/// Default locale when the requested or system locale is not supported.
pub const DEFAULT_LOCALE: &str = "en";

/// Whether a table is bundled for the language code `code`.
pub fn is_supported_locale(code: &str) -> bool {
    BUNDLED_LOCALES.iter().any(|(bundled, _)| *bundled == code)
}

/// Trait defining the localization engine interface.
pub trait LocalizationEngineTrait {
    fn initialize(&mut self) -> Result<(), LocaleError>;
    fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError>;
    fn get_locale(&self) -> &str;
    fn t(&self, key: &str) -> String;
    fn detect_system_locale(&self) -> String;
    fn get_available_locales(&self) -> Vec<String>;
}

/// Localization engine over the bundled locale tables.
#[derive(Debug, Clone)]
pub struct LocalizationEngine {
    current_locale: String,
    locales: HashMap<String, Value>,
}

impl Default for LocalizationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalizationEngine {
    /// Creates an engine with no tables loaded; call `initialize` before use.
    pub fn new() -> Self {
        Self {
            current_locale: DEFAULT_LOCALE.to_string(),
            locales: HashMap::new(),
        }
    }

    /// Creates an initialized engine set to `lang`.
    pub fn with_locale(lang: &str) -> Result<Self, LocaleError> {
        let mut engine = Self::new();
        engine.initialize()?;
        engine.set_locale(lang)?;
        Ok(engine)
    }

    /// Looks up a nested key in a JSON value using dot notation.
    /// For example, "time.days" looks up `value["time"]["days"]`.
    fn lookup_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
        key.split('.').try_fold(data, |current, part| current.get(part))
    }

    /// Renders a crack-time bucket, e.g. `"3 years"` or `"Instant"`.
    pub fn format_crack_time(&self, time: &CrackTime) -> String {
        let (count, unit) = match *time {
            CrackTime::Instant => return self.t("time.instant"),
            CrackTime::Uncrackable => return self.t("time.forever"),
            CrackTime::Seconds(n) => (n, "time.seconds"),
            CrackTime::Minutes(n) => (n, "time.minutes"),
            CrackTime::Hours(n) => (n, "time.hours"),
            CrackTime::Days(n) => (n, "time.days"),
            CrackTime::Years(n) => (n, "time.years"),
            CrackTime::Centuries(n) => (n, "time.centuries"),
        };
        format!("{} {}", count, self.t(unit))
    }

    /// Renders an advisory tip.
    pub fn tip(&self, tip: &Tip) -> String {
        self.t(tip.key())
    }

    /// Renders a strength bucket label.
    pub fn strength_label(&self, strength: Strength) -> String {
        self.t(&format!("strength.{}", strength.as_str()))
    }
}

impl LocalizationEngineTrait for LocalizationEngine {
    /// Parses every bundled locale table.
    fn initialize(&mut self) -> Result<(), LocaleError> {
        for (locale, raw) in BUNDLED_LOCALES {
            let data: Value = serde_json::from_str(raw).map_err(|e| {
                LocaleError::MalformedTable(format!("{}: {}", locale, e))
            })?;
            self.locales.insert(locale.to_string(), data);
        }
        log::debug!("loaded {} locale tables", self.locales.len());
        Ok(())
    }

    /// Switches the active locale. Returns an error if the locale is not loaded.
    fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError> {
        if !self.locales.contains_key(lang) {
            return Err(LocaleError::UnsupportedLocale(lang.to_string()));
        }
        self.current_locale = lang.to_string();
        Ok(())
    }

    fn get_locale(&self) -> &str {
        &self.current_locale
    }

    /// Looks up a translation key using dot notation.
    /// Returns the key itself if the translation is not found.
    fn t(&self, key: &str) -> String {
        self.locales
            .get(&self.current_locale)
            .and_then(|data| Self::lookup_key(data, key))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Detects the system locale from `LANG` (e.g. "zh_CN.UTF-8" → "zh").
    /// Falls back to "en" if the system locale is not supported.
    fn detect_system_locale(&self) -> String {
        std::env::var("LANG")
            .ok()
            .and_then(|lang| {
                let code = lang
                    .split(|c: char| c == '_' || c == '.' || c == '-')
                    .next()?
                    .to_lowercase();
                is_supported_locale(&code).then_some(code)
            })
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }

    /// Loaded language codes, sorted.
    fn get_available_locales(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.locales.keys().cloned().collect();
        codes.sort();
        codes
    }
}
