use rand::{rngs::OsRng, RngCore};

use crate::error::Result;

const CNONCE_BYTES: usize = 8;

/// Generate a client nonce from the OS entropy source.
///
/// Returns 16 lowercase hex characters.
pub fn cnonce() -> Result<String> {
    cnonce_from(&mut OsRng)
}

/// Generate a client nonce from the given random source.
pub fn cnonce_from<R: RngCore + ?Sized>(rng: &mut R) -> Result<String> {
    let mut bytes = [0u8; CNONCE_BYTES];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}
