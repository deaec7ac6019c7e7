use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use crate::types::errors::CryptoError;

/// Trait defining the secure randomness every generator draws from.
///
/// Implementations must be backed by a cryptographically secure source and
/// must report failure instead of substituting a weaker one.
pub trait CryptoServiceTrait {
    /// Fills `dest` with cryptographically secure random bytes.
    fn fill_random(&self, dest: &mut [u8]) -> Result<(), CryptoError>;

    /// Draws a uniform 32-bit value.
    fn random_u32(&self) -> Result<u32, CryptoError> {
        let mut buf = [0u8; 4];
        self.fill_random(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Draws an index in `0..bound`.
    ///
    /// A uniform `u32` is reduced modulo `bound`. For the bounds used here
    /// (at most 91) the resulting bias is below 2^-25 per draw and is
    /// accepted rather than corrected by rejection sampling.
    fn random_index(&self, bound: usize) -> Result<usize, CryptoError> {
        if bound == 0 {
            return Err(CryptoError::InvalidBound(bound));
        }
        Ok(self.random_u32()? as usize % bound)
    }

    /// Generates `length` random bytes.
    fn generate_random_bytes(&self, length: usize) -> Result<Vec<u8>, CryptoError> {
        let mut bytes = vec![0u8; length];
        self.fill_random(&mut bytes)?;
        Ok(bytes)
    }

    /// Securely clears sensitive data from memory by overwriting with zeros.
    fn zeroize_memory(&self, data: &mut [u8]) {
        data.zeroize();
    }
}

/// Randomness backed by the operating system via `ring`.
#[derive(Debug)]
pub struct CryptoService {
    rng: SystemRandom,
}

impl CryptoService {
    /// Creates a new CryptoService instance.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for CryptoService {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoServiceTrait for CryptoService {
    fn fill_random(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        let requested = dest.len();
        self.rng.fill(dest).map_err(|_| {
            log::error!("system random source refused {} bytes", requested);
            CryptoError::RandomGeneration("System random source unavailable".to_string())
        })
    }
}

impl<T: CryptoServiceTrait + ?Sized> CryptoServiceTrait for &T {
    fn fill_random(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        (**self).fill_random(dest)
    }
}
