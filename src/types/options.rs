use serde::{Deserialize, Serialize};

/// Shortest password length a caller may request.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Longest password length a caller may request.
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// Smallest UUID batch a caller may request.
pub const MIN_UUID_QUANTITY: usize = 1;

/// Largest UUID batch a caller may request.
pub const MAX_UUID_QUANTITY: usize = 50;

/// Character-class configuration for password generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl PasswordOptions {
    /// Returns a copy with `length` forced into the caller range `[4, 64]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            length: self.length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH),
            ..self
        }
    }

    /// Number of enabled character classes.
    pub fn enabled_class_count(&self) -> usize {
        [
            self.include_uppercase,
            self.include_lowercase,
            self.include_numbers,
            self.include_symbols,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }
}

/// Configuration for a batch of version-4 UUIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidOptions {
    pub quantity: usize,
    pub uppercase: bool,
}

impl Default for UuidOptions {
    fn default() -> Self {
        Self {
            quantity: 1,
            uppercase: false,
        }
    }
}

impl UuidOptions {
    /// Returns a copy with `quantity` forced into `[1, 50]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            quantity: self.quantity.clamp(MIN_UUID_QUANTITY, MAX_UUID_QUANTITY),
            ..self
        }
    }
}

/// Which pipeline a generation request goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorMode {
    Password,
    Uuid,
}
