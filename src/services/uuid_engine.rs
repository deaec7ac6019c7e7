//! UUID Engine for passgen.
//!
//! Produces batches of version-4 UUIDs from the same secure source the
//! password engine uses. The version and variant bits are fixed masks; the
//! remaining 122 bits come straight from `CryptoServiceTrait::fill_random`.

use uuid::{Builder, Uuid};

use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::types::errors::CryptoError;
use crate::types::options::UuidOptions;

/// Trait defining UUID batch generation.
pub trait UuidEngineTrait {
    /// Generates `options.quantity` UUIDs in canonical hyphenated form.
    fn generate(&self, options: &UuidOptions) -> Result<Vec<String>, CryptoError>;
}

/// Version-4 UUID generator.
#[derive(Debug, Default)]
pub struct UuidEngine<R = CryptoService> {
    crypto: R,
}

impl UuidEngine {
    pub fn new() -> Self {
        Self {
            crypto: CryptoService::new(),
        }
    }
}

impl<R: CryptoServiceTrait> UuidEngine<R> {
    /// Creates an engine over a caller-supplied random source.
    pub fn with_source(crypto: R) -> Self {
        Self { crypto }
    }

    fn next_uuid(&self) -> Result<Uuid, CryptoError> {
        let mut bytes = [0u8; 16];
        self.crypto.fill_random(&mut bytes)?;
        Ok(Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl<R: CryptoServiceTrait> UuidEngineTrait for UuidEngine<R> {
    fn generate(&self, options: &UuidOptions) -> Result<Vec<String>, CryptoError> {
        let options = options.clamped();
        let mut out = Vec::with_capacity(options.quantity);
        for _ in 0..options.quantity {
            let uuid = self.next_uuid()?;
            let mut buf = Uuid::encode_buffer();
            let text = if options.uppercase {
                uuid.hyphenated().encode_upper(&mut buf)
            } else {
                uuid.hyphenated().encode_lower(&mut buf)
            };
            out.push(text.to_string());
        }
        log::debug!(
            "generated {} uuid(s), uppercase={}",
            out.len(),
            options.uppercase
        );
        Ok(out)
    }
}

/// Joins a batch the way "copy all" puts it on the clipboard.
pub fn join_for_copy(uuids: &[String]) -> String {
    uuids.join("\n")
}
