//! Password-based sealing of opaque byte blobs.
//!
//! Each call to `seal` generates a fresh random salt and IV, derives an
//! AES-256 key from the password via PBKDF2, and encrypts the plaintext
//! in CBC mode with PKCS#7 padding.  `unseal` splits the blob back apart
//! at fixed offsets before decrypting.
//!
//! Layout of the returned byte buffer:
//!   [ 16-byte salt | 16-byte iv | ciphertext ]
//!
//! CBC carries no authentication tag, so tampering and a wrong password
//! are indistinguishable: both surface as a padding failure and are
//! reported as `IncorrectPassword`.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::TryRngCore;
use zeroize::Zeroize;

use crate::errors::{PasskeepError, Result};

use super::kdf::{derive_key, generate_salt, SALT_LEN};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Size of the CBC initialization vector in bytes.
const IV_LEN: usize = 16;

/// Encrypt `plaintext` under a key derived from `password`.
///
/// Returns the salt and IV prepended to the ciphertext
/// (salt || iv || ciphertext) so the caller only stores one blob.
pub fn seal(plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
    // Fresh salt and IV on every call, never reused even for the
    // same password.
    let salt = generate_salt();
    let mut iv = [0u8; IV_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut iv)
        .expect("OS RNG unavailable");

    let mut key = derive_key(password, &salt);

    let cipher = Aes256CbcEnc::new_from_slices(&key, &iv)
        .map_err(|e| PasskeepError::EncryptionFailed(format!("invalid key length: {e}")))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    // The derived key is no longer needed.
    key.zeroize();

    let mut output = Vec::with_capacity(SALT_LEN + IV_LEN + ciphertext.len());
    output.extend_from_slice(&salt);
    output.extend_from_slice(&iv);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt a blob that was produced by `seal`.
///
/// Expects the first 16 bytes to be the salt and the next 16 the IV,
/// followed by the ciphertext.  Fails with `IncorrectPassword` if the
/// blob is too short or the decrypted padding is inconsistent.
pub fn unseal(blob: &[u8], password: &str) -> Result<Vec<u8>> {
    // Make sure we have at least a salt and an IV worth of bytes.
    if blob.len() < SALT_LEN + IV_LEN {
        return Err(PasskeepError::IncorrectPassword);
    }

    let (salt, rest) = blob.split_at(SALT_LEN);
    let (iv, ciphertext) = rest.split_at(IV_LEN);

    let mut key = derive_key(password, salt);

    let cipher = Aes256CbcDec::new_from_slices(&key, iv)
        .map_err(|_| PasskeepError::IncorrectPassword)?;
    let result = cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext);

    key.zeroize();

    // A wrong key decrypts to garbage, which fails the padding check
    // with overwhelming probability.
    result.map_err(|_| PasskeepError::IncorrectPassword)
}
