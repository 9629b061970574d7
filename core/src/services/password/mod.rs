//! One-way password hashing and verification via bcrypt.

use crate::errors::DomainError;

/// Default bcrypt work factor
pub const DEFAULT_COST: u32 = 12;

/// Credential hasher with a tunable work factor.
///
/// Each `hash` call salts independently, so hashing the same plaintext twice
/// yields different outputs; `verify` recomputes against the salt baked into
/// the stored value.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with an explicit work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    pub fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verify a plaintext candidate against a stored hash.
    ///
    /// A mismatch returns `Ok(false)`; only a malformed stored hash is an
    /// error.
    pub fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, DomainError> {
        bcrypt::verify(plaintext, hashed).map_err(|e| DomainError::Internal {
            message: format!("Malformed password hash: {}", e),
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps these tests fast; production uses DEFAULT_COST.
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = hasher();
        let hash = hasher.hash("pw12345678").unwrap();

        assert_ne!(hash, "pw12345678");
        assert!(hasher.verify("pw12345678", &hash).unwrap());
        assert!(!hasher.verify("pw12345678x", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = hasher();
        let a = hasher.hash("pw12345678").unwrap();
        let b = hasher.hash("pw12345678").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = hasher();
        assert!(hasher.verify("pw12345678", "not-a-bcrypt-hash").is_err());
    }
}
