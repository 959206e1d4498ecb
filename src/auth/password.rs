use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hashes the operator password into an argon2 PHC string.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("hash operator password: {e}"))
}

/// `Ok(false)` on a wrong password; `Err` only when the stored hash is unreadable.
pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| anyhow::anyhow!("configured password hash is not a PHC string: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("eighty-days").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("eighty-days", &hash).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("eighty-days").expect("hashing should succeed");
        assert!(!verify_password("ninety-days", &hash).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_plaintext_in_hash_slot() {
        let err = verify_password("anything", "hunter2").unwrap_err();
        assert!(err.to_string().contains("PHC"));
    }
}
