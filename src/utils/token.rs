use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::{OsRng, RngCore};

/// 32 random bytes, URL-safe base64. Used as the session cookie value.
pub fn new_session_key() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}

/// Argon2 PHC string for a login password, salted per call.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// `Ok(false)` on a wrong password, `Err` only when the stored hash is not a
/// PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_keys_are_unique_and_url_safe() {
        let a = new_session_key();
        let b = new_session_key();
        assert_ne!(a, b);
        assert_eq!(a.len(), 43);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn password_round_trip() {
        let hash = hash_password("test_Pass").unwrap();
        assert!(verify_password("test_Pass", &hash).unwrap());
        assert!(!verify_password("test", &hash).unwrap());
        assert!(verify_password("x", "not a phc string").is_err());
    }
}
