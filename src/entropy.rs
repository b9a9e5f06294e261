use rand::{rngs::OsRng, RngCore};
use tracing::trace;

use crate::error::{Error, Result};

/**
    Anything that can hand out random bytes.

    Implementations either fill the whole buffer or fail; partial
    fills are not allowed.
*/
pub trait EntropySource {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}

/**
    Entropy from the operating system via OsRng
*/
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut osrng = OsRng::new().map_err(|e| Error::Entropy(format!("failed to obtain OS RNG: {}", e)))?;
        osrng.try_fill_bytes(buf).map_err(|e| Error::Entropy(e.to_string()))?;
        trace!(len = buf.len(), "filled buffer from OS RNG");
        Ok(())
    }
}

impl<'a, S: EntropySource + ?Sized> EntropySource for &'a mut S {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }
}

/**
    Generates random bytes using OsRng
*/
pub fn random_bytes(size: usize) -> Result<Vec<u8>> {
    let mut bytes: Vec<u8> = vec![0; size];
    OsEntropy.fill_bytes(&mut bytes)?;
    Ok(bytes)
}
