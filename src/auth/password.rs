//! Password hashing
//!
//! Credentials are stored as `salt:digest`: a random 16-byte salt and a
//! 64-byte scrypt key, both hex-encoded. The salt's hex string (not its raw
//! bytes) feeds the derivation, so a stored hash fully determines how to
//! recompute it.

use rand::Rng;
use scrypt::{scrypt, Params};
use thiserror::Error;

const SALT_LEN: usize = 16;
const KEY_LEN: usize = 64;

// scrypt cost parameters: N = 2^14, r = 8, p = 1
const LOG_N: u8 = 14;
const R: u32 = 8;
const P: u32 = 1;

/// Password hashing errors
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Stored password hash is corrupt")]
    CorruptHash,

    #[error("Key derivation failed: {0}")]
    Derivation(String),
}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt_bytes: [u8; SALT_LEN] = rand::thread_rng().gen();
    let salt = hex::encode(salt_bytes);
    let digest = derive_digest(password, &salt)?;
    Ok(format!("{}:{}", salt, digest))
}

/// Verify a login attempt against a stored `salt:digest` hash.
///
/// Returns `Ok(false)` on a mismatch; a stored value missing either half of
/// the `salt:digest` pair is a data-integrity problem, not a wrong password.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let (salt, digest) = stored.split_once(':').ok_or(PasswordError::CorruptHash)?;
    if salt.is_empty() || digest.is_empty() {
        return Err(PasswordError::CorruptHash);
    }

    let recomputed = derive_digest(password, salt)?;
    Ok(constant_time_eq(recomputed.as_bytes(), digest.as_bytes()))
}

fn derive_digest(password: &str, salt: &str) -> Result<String, PasswordError> {
    let params =
        Params::new(LOG_N, R, P, KEY_LEN).map_err(|e| PasswordError::Derivation(e.to_string()))?;

    let mut key = [0u8; KEY_LEN];
    scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut key)
        .map_err(|e| PasswordError::Derivation(e.to_string()))?;

    Ok(hex::encode(key))
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_shape() {
        let stored = hash_password("secret1").unwrap();
        let (salt, digest) = stored.split_once(':').unwrap();

        assert_eq!(salt.len(), 32);
        assert_eq!(digest.len(), 128);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_round_trip() {
        let stored = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &stored).unwrap());
        assert!(!verify_password("wrong", &stored).unwrap());
        assert!(!verify_password("", &stored).unwrap());
    }

    #[test]
    fn test_same_password_distinct_salts() {
        let a = hash_password("secret1").unwrap();
        let b = hash_password("secret1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_corrupt_stored_hash() {
        for stored in ["nodelimiter", ":digest", "salt:", ""] {
            let result = verify_password("secret1", stored);
            assert!(
                matches!(result, Err(PasswordError::CorruptHash)),
                "{:?}",
                stored
            );
        }
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"short", b"longer"));
    }
}
