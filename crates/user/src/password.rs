use argon2::{
    ARGON2ID_IDENT, Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::Deserialize;

/// Argon2id cost parameters.
///
/// Defaults follow the OWASP recommendation:
/// - Memory: 65536 KiB (64 MiB)
/// - Iterations: 3
/// - Parallelism: 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PasswordCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordCost {
    fn default() -> Self {
        Self {
            memory_kib: 65536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

impl PasswordCost {
    fn params(&self) -> menuplan_shared::Result<Params> {
        Ok(Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            None,
        )?)
    }
}

/// Hash `password` with Argon2id and a fresh random salt.
///
/// The result is a PHC string (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
/// carrying its own cost parameters.
pub fn hash_password(password: &str, cost: &PasswordCost) -> menuplan_shared::Result<String> {
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, cost.params()?);
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)?
        .to_string();

    Ok(password_hash)
}

/// Verify `password` against a stored PHC string.
///
/// A mismatch, or a hash from any algorithm other than Argon2id, is
/// `Ok(false)`; only a stored value that is not a PHC string at all is an
/// error.
pub fn verify_password(password: &str, hash: &str) -> menuplan_shared::Result<bool> {
    let parsed_hash = PasswordHash::new(hash)?;

    if parsed_hash.algorithm != ARGON2ID_IDENT {
        return Ok(false);
    }

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHEAP: PasswordCost = PasswordCost {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    };

    #[test]
    fn produces_argon2id_phc_string() -> anyhow::Result<()> {
        let hash = hash_password("test_password_123", &CHEAP)?;

        assert!(hash.starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
        Ok(())
    }

    #[test]
    fn verify_correct_and_incorrect() -> anyhow::Result<()> {
        let hash = hash_password("test_password_123", &CHEAP)?;

        assert!(verify_password("test_password_123", &hash)?);
        assert!(!verify_password("wrong_password", &hash)?);
        Ok(())
    }

    #[test]
    fn salts_differ_between_calls() -> anyhow::Result<()> {
        let hash1 = hash_password("test_password_123", &CHEAP)?;
        let hash2 = hash_password("test_password_123", &CHEAP)?;

        assert_ne!(hash1, hash2);
        Ok(())
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("test_password_123", "not a hash").is_err());
    }

    #[test]
    fn other_algorithm_does_not_verify() -> anyhow::Result<()> {
        let foreign = "$pbkdf2-sha256$i=1000$c2FsdHNhbHQ$ZGVhZGJlZWZkZWFkYmVlZg";

        assert!(!verify_password("test_password_123", foreign)?);
        Ok(())
    }

    #[test]
    fn other_argon2_variants_do_not_verify() -> anyhow::Result<()> {
        let params = Params::new(1024, 1, 1, None).map_err(anyhow::Error::msg)?;
        let salt = SaltString::generate(&mut OsRng);

        for algorithm in [Algorithm::Argon2i, Algorithm::Argon2d] {
            let hash = Argon2::new(algorithm, Version::V0x13, params.clone())
                .hash_password(b"test_password_123", &salt)
                .map_err(anyhow::Error::msg)?
                .to_string();

            assert!(!verify_password("test_password_123", &hash)?, "{hash}");
        }
        Ok(())
    }

    #[test]
    fn rejects_impossible_cost() {
        let cost = PasswordCost {
            memory_kib: 1024,
            iterations: 0,
            parallelism: 1,
        };

        assert!(hash_password("test_password_123", &cost).is_err());
    }
}
