//! Password Engine for passgen.
//!
//! Builds a password from the enabled character classes. One character is
//! drawn from every enabled class so the result always covers them, the rest
//! is filled from the combined charset, and the whole buffer is shuffled so
//! the guaranteed characters do not sit at predictable positions.

use zeroize::Zeroizing;

use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::types::errors::CryptoError;
use crate::types::options::{PasswordOptions, MAX_PASSWORD_LENGTH};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Trait defining password generation operations.
pub trait PasswordEngineTrait {
    /// Generates a password. Returns an empty string when no class is enabled.
    fn generate(&self, options: &PasswordOptions) -> Result<String, CryptoError>;

    /// Size of the combined charset the options select.
    fn charset_size(&self, options: &PasswordOptions) -> usize;
}

/// Password engine drawing every random decision from a secure source.
#[derive(Debug, Default)]
pub struct PasswordEngine<R = CryptoService> {
    crypto: R,
}

impl PasswordEngine {
    pub fn new() -> Self {
        Self {
            crypto: CryptoService::new(),
        }
    }
}

impl<R: CryptoServiceTrait> PasswordEngine<R> {
    /// Creates an engine over a caller-supplied random source.
    pub fn with_source(crypto: R) -> Self {
        Self { crypto }
    }

    /// Enabled classes in canonical order: uppercase, lowercase, digits, symbols.
    fn enabled_classes(options: &PasswordOptions) -> Vec<&'static str> {
        [
            (options.include_uppercase, UPPERCASE),
            (options.include_lowercase, LOWERCASE),
            (options.include_numbers, DIGITS),
            (options.include_symbols, SYMBOLS),
        ]
        .into_iter()
        .filter_map(|(enabled, class)| enabled.then_some(class))
        .collect()
    }

    fn pick(&self, set: &[u8]) -> Result<char, CryptoError> {
        Ok(set[self.crypto.random_index(set.len())?] as char)
    }

    /// Fisher–Yates shuffle driven by the secure source.
    fn shuffle<T>(&self, items: &mut [T]) -> Result<(), CryptoError> {
        for i in (1..items.len()).rev() {
            let j = self.crypto.random_index(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }
}

impl<R: CryptoServiceTrait> PasswordEngineTrait for PasswordEngine<R> {
    fn generate(&self, options: &PasswordOptions) -> Result<String, CryptoError> {
        let length = options.length.min(MAX_PASSWORD_LENGTH);
        let classes = Self::enabled_classes(options);
        if classes.is_empty() {
            log::debug!("no character class enabled, returning empty password");
            return Ok(String::new());
        }

        let charset: Vec<u8> = classes.iter().flat_map(|c| c.bytes()).collect();
        let mut chars: Zeroizing<Vec<char>> =
            Zeroizing::new(Vec::with_capacity(length.max(classes.len())));

        for class in &classes {
            chars.push(self.pick(class.as_bytes())?);
        }

        let remaining = length.saturating_sub(chars.len());
        for _ in 0..remaining {
            chars.push(self.pick(&charset)?);
        }

        self.shuffle(chars.as_mut_slice())?;

        log::debug!(
            "generated password: {} chars, {} classes, charset {}",
            length.min(chars.len()),
            classes.len(),
            charset.len()
        );
        Ok(chars.iter().take(length).collect())
    }

    fn charset_size(&self, options: &PasswordOptions) -> usize {
        Self::enabled_classes(options).iter().map(|c| c.len()).sum()
    }
}
