//! Time-based one-time password generation (RFC 6238, HMAC-SHA1).
//!
//! Pure functions of the seed and the clock — no state is kept here.
//! Codes are 6 digits and rotate every 30 seconds.

use chrono::Utc;
use data_encoding::BASE32;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::errors::{PasskeepError, Result};

/// Code rotation period in seconds.
pub const PERIOD: u64 = 30;

/// Number of digits in a generated code.
const DIGITS: u32 = 6;

/// Generate the code for `seed` at the current wall-clock time.
///
/// An empty seed yields an empty string: the entry simply has no OTP
/// configured, which is not an error.
pub fn generate(seed: &str) -> Result<String> {
    code_at(seed, unix_now())
}

/// Generate the code for `seed` at an explicit Unix timestamp.
///
/// 1. Normalize the seed (strip spaces, uppercase, pad to a multiple
///    of 8 base32 characters) and decode it to raw key bytes.
/// 2. HMAC-SHA1 the big-endian 8-byte time counter with the key.
/// 3. Dynamically truncate to a 31-bit integer and reduce mod 10^6.
pub fn code_at(seed: &str, unix_time: u64) -> Result<String> {
    let normalized = normalize_seed(seed);
    if normalized.is_empty() {
        return Ok(String::new());
    }

    let key = BASE32
        .decode(normalized.as_bytes())
        .map_err(|_| PasskeepError::InvalidTotpSeed)?;

    let counter = unix_time / PERIOD;

    let mut mac =
        Hmac::<Sha1>::new_from_slice(&key).map_err(|_| PasskeepError::InvalidTotpSeed)?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // Dynamic truncation: the low nibble of the last byte picks the
    // 4-byte window; the sign bit is masked off.
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let slice: [u8; 4] = digest[offset..offset + 4]
        .try_into()
        .map_err(|_| PasskeepError::InvalidTotpSeed)?;
    let value = (u32::from_be_bytes(slice) & 0x7fff_ffff) % 10u32.pow(DIGITS);

    Ok(format!("{value:0width$}", width = DIGITS as usize))
}

/// Seconds until the current code expires. Always in `[1, 30]`.
pub fn seconds_remaining() -> u64 {
    PERIOD - (unix_now() % PERIOD)
}

/// Strip spaces, uppercase, and pad with `=` to a multiple of 8.
fn normalize_seed(seed: &str) -> String {
    let mut normalized: String = seed
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .map(|ch| ch.to_ascii_uppercase())
        .collect();

    let rem = normalized.len() % 8;
    if rem != 0 {
        normalized.extend(std::iter::repeat('=').take(8 - rem));
    }
    normalized
}

fn unix_now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}
