//! Integration tests for the Passkeep crypto module.

use passkeep::crypto::{derive_key, generate_salt, seal, unseal, SALT_LEN};
use passkeep::errors::PasskeepError;

// ---------------------------------------------------------------------------
// Key derivation
// ---------------------------------------------------------------------------

#[test]
fn derive_key_is_deterministic() {
    let salt = [7u8; SALT_LEN];
    let a = derive_key("hunter2", &salt);
    let b = derive_key("hunter2", &salt);
    assert_eq!(a, b);
}

#[test]
fn derive_key_changes_with_salt() {
    let a = derive_key("hunter2", &[1u8; SALT_LEN]);
    let b = derive_key("hunter2", &[2u8; SALT_LEN]);
    assert_ne!(a, b, "different salts must produce different keys");
}

#[test]
fn derive_key_changes_with_password() {
    let salt = [9u8; SALT_LEN];
    let a = derive_key("hunter2", &salt);
    let b = derive_key("hunter3", &salt);
    assert_ne!(a, b);
}

#[test]
fn generated_salts_differ() {
    assert_ne!(generate_salt(), generate_salt());
}

#[test]
fn generated_salt_is_filled_with_entropy() {
    // A fresh salt is never the zeroed buffer it starts from.
    assert_ne!(generate_salt(), [0u8; SALT_LEN]);
}

// ---------------------------------------------------------------------------
// Seal / unseal round-trip
// ---------------------------------------------------------------------------

#[test]
fn seal_unseal_roundtrip() {
    let plaintext = b"{\"next_id\":1,\"entries\":[]}";
    let blob = seal(plaintext, "Sup3r$ecret!").expect("seal should succeed");

    // Blob carries a 16-byte salt, a 16-byte IV, and padded ciphertext.
    assert!(blob.len() > plaintext.len());
    assert_eq!((blob.len() - 32) % 16, 0, "ciphertext must be block-aligned");

    let recovered = unseal(&blob, "Sup3r$ecret!").expect("unseal should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn seal_roundtrips_empty_and_block_sized_inputs() {
    for plaintext in [&b""[..], &[0x41u8; 16][..], &[0x42u8; 33][..]] {
        let blob = seal(plaintext, "pw").unwrap();
        assert_eq!(unseal(&blob, "pw").unwrap(), plaintext);
    }
}

#[test]
fn seal_produces_different_blobs_each_time() {
    let plaintext = b"same input";

    let blob1 = seal(plaintext, "pw").unwrap();
    let blob2 = seal(plaintext, "pw").unwrap();

    // Fresh salt and IV on every call.
    assert_ne!(blob1, blob2, "two seals of the same plaintext must differ");
    assert_ne!(blob1[..16], blob2[..16], "salts must differ");
    assert_ne!(blob1[16..32], blob2[16..32], "IVs must differ");
}

#[test]
fn unseal_with_wrong_password_fails() {
    let blob = seal(b"secret data", "correct-password").unwrap();
    let result = unseal(&blob, "wrong-password");

    assert!(matches!(result, Err(PasskeepError::IncorrectPassword)));
}

#[test]
fn unseal_truncated_blob_fails() {
    // Anything shorter than salt + IV must be rejected outright.
    let result = unseal(&[0u8; 20], "pw");
    assert!(matches!(result, Err(PasskeepError::IncorrectPassword)));
}

#[test]
fn unseal_with_mangled_ciphertext_fails() {
    let mut blob = seal(b"some secret bytes here", "pw").unwrap();
    // Flip a bit in the last ciphertext block; the padding check
    // rejects it with overwhelming probability.
    let last = blob.len() - 1;
    blob[last] ^= 0x01;

    assert!(unseal(&blob, "pw").is_err());
}
