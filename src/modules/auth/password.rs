//! Password hashing and verification using Argon2id.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password into a PHC string with a fresh random salt.
#[allow(unused)]
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::InternalServerError(format!("Error al generar el hash: {err}")))
}

/// Constant-time verification against a stored PHC hash. A malformed stored
/// hash verifies as false rather than erroring, so login failures stay
/// uniform.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_y_verificacion() {
        let hash = hash_password("secreto123").expect("hash");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("secreto123", &hash));
        assert!(!verify_password("otra-cosa", &hash));
    }

    #[test]
    fn hash_invalido_no_verifica() {
        assert!(!verify_password("secreto123", "no-es-un-hash"));
    }
}
