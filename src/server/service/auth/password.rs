//! Argon2id password digests in PHC string format.

use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};
#[cfg(test)]
use argon2::{Algorithm, Params, Version};

use crate::server::error::auth::AuthError;

/// Returns the hasher used for every digest.
///
/// Tests use minimal memory and a single iteration. These parameters are weak and only
/// compiled into test builds.
fn argon2_instance() -> Argon2<'static> {
    #[cfg(test)]
    {
        let params = Params::new(1024, 1, 1, None).expect("valid Argon2 params for tests");
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }

    #[cfg(not(test))]
    {
        Argon2::default()
    }
}

/// Hashes `password` with a fresh random salt.
pub fn hash(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    argon2_instance()
        .hash_password(password.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|e| AuthError::Crypto(format!("Failed to hash password: {}", e)))
}

/// Checks `password` against a stored digest.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AuthError::Crypto)` - Stored digest is malformed
pub fn verify(password: &str, digest: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(digest)
        .map_err(|e| AuthError::Crypto(format!("Stored password digest is invalid: {}", e)))?;

    match argon2_instance().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Crypto(format!("Failed to verify password: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let digest = hash("Secret123").unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(verify("Secret123", &digest).unwrap());
        assert!(!verify("Secret124", &digest).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        assert_ne!(hash("Secret123").unwrap(), hash("Secret123").unwrap());
    }

    #[test]
    fn malformed_digest_is_an_error() {
        assert!(matches!(
            verify("Secret123", "not-a-digest"),
            Err(AuthError::Crypto(_))
        ));
    }
}
