//! Secret hashing with Argon2id.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use gatekit_core::DomainError;

/// Hash a secret, returning the PHC string format (algorithm parameters
/// and salt included).
pub fn hash_secret(secret: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::validation(format!("secret hashing failed: {e}")))
}

/// Verify a secret against a PHC-format hash.
///
/// An undecodable hash verifies as false rather than erroring: a corrupt
/// stored hash must behave like a wrong secret.
pub fn verify_secret(secret: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_secret("correct horse battery").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_secret("correct horse battery", &hash));
        assert!(!verify_secret("wrong secret", &hash));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_secret("anything", "not-a-phc-string"));
        assert!(!verify_secret("anything", ""));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_secret("same secret").unwrap();
        let b = hash_secret("same secret").unwrap();
        assert_ne!(a, b);
    }
}
