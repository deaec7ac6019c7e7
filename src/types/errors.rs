use std::fmt;

// === CryptoError ===

/// Errors raised by the secure random source.
///
/// The generators never fall back to a non-secure source, so any of these
/// reaching the caller means no value was produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CryptoError {
    /// The platform random source could not supply bytes.
    RandomGeneration(String),
    /// An index was requested from an empty range.
    InvalidBound(usize),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
            CryptoError::InvalidBound(bound) => {
                write!(f, "Invalid random index bound: {}", bound)
            }
        }
    }
}

impl std::error::Error for CryptoError {}

// === SettingsError ===

/// Failures loading, patching or storing the settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// The file or its directory could not be read or written.
    IoError(String),
    /// The file is not a valid settings document.
    SerializationError(String),
    /// A dot path that names no settings field.
    InvalidKey(String),
    /// A value of the wrong type for its field.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === LocaleError ===

/// Failures selecting or loading display strings.
#[derive(Debug)]
pub enum LocaleError {
    /// No bundled table for this language code.
    UnsupportedLocale(String),
    /// A bundled locale table could not be parsed.
    MalformedTable(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::UnsupportedLocale(locale) => {
                write!(f, "Unsupported locale: {}", locale)
            }
            LocaleError::MalformedTable(msg) => write!(f, "Malformed locale table: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}
