use serde::{Deserialize, Serialize};

use super::options::{PasswordOptions, UuidOptions};
use crate::services::localization_engine::{is_supported_locale, DEFAULT_LOCALE};

/// Persisted generator defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorSettings {
    pub language: String,
    pub password: PasswordOptions,
    pub uuid: UuidOptions,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LOCALE.to_string(),
            password: PasswordOptions::default(),
            uuid: UuidOptions::default(),
        }
    }
}

impl GeneratorSettings {
    /// Returns a copy whose options are within their caller ranges and whose
    /// language has a bundled table, falling back to the default locale.
    #[must_use]
    pub fn clamped(self) -> Self {
        let language = if is_supported_locale(&self.language) {
            self.language
        } else {
            log::warn!(
                "unsupported language {:?} in settings, using {}",
                self.language,
                DEFAULT_LOCALE
            );
            DEFAULT_LOCALE.to_string()
        };
        Self {
            language,
            password: self.password.clamped(),
            uuid: self.uuid.clamped(),
        }
    }
}
