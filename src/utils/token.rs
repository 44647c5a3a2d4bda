//! Opaque session token generation.

use base64::Engine as _;

/// Random bytes per token; nine bytes encode to twelve base64 characters.
const TOKEN_LENGTH_BYTES: usize = 9;

/// Generates a 12-character URL-safe session token from OS entropy.
///
/// # Errors
///
/// Fails only when the system random source is unavailable.
pub fn generate_token() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];
    getrandom::fill(&mut buffer)?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
