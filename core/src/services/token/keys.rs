//! RS256 key material for JWT operations.
//!
//! Keys arrive as base64-encoded PEM documents (configuration, not data) and
//! are decoded once at startup; the resulting key handles are read-only for
//! the life of the process.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use jsonwebtoken::{DecodingKey, EncodingKey};

use signet_shared::config::JwtConfig;

use crate::errors::{DomainError, TokenError};

/// One RS256 key pair: private side for signing, public side for verifying.
#[derive(Clone)]
pub struct KeyPair {
    pub(crate) encoding: EncodingKey,
    pub(crate) decoding: DecodingKey,
}

impl KeyPair {
    fn from_pem(private_pem: &[u8], public_pem: &[u8]) -> Result<Self, DomainError> {
        let encoding = EncodingKey::from_rsa_pem(private_pem).map_err(|e| {
            DomainError::Token(TokenError::KeyLoad {
                message: format!("Invalid private key: {}", e),
            })
        })?;
        let decoding = DecodingKey::from_rsa_pem(public_pem).map_err(|e| {
            DomainError::Token(TokenError::KeyLoad {
                message: format!("Invalid public key: {}", e),
            })
        })?;
        Ok(Self { encoding, decoding })
    }
}

/// The full key material: distinct pairs for access and refresh tokens.
#[derive(Clone)]
pub struct TokenKeys {
    pub(crate) access: KeyPair,
    pub(crate) refresh: KeyPair,
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material is never printed
        f.debug_struct("TokenKeys").finish_non_exhaustive()
    }
}

impl TokenKeys {
    /// Load both key pairs from base64-encoded PEM configuration.
    pub fn from_config(config: &JwtConfig) -> Result<Self, DomainError> {
        Ok(Self {
            access: KeyPair::from_pem(
                &decode_base64(&config.access_token_private_key, "access private")?,
                &decode_base64(&config.access_token_public_key, "access public")?,
            )?,
            refresh: KeyPair::from_pem(
                &decode_base64(&config.refresh_token_private_key, "refresh private")?,
                &decode_base64(&config.refresh_token_public_key, "refresh public")?,
            )?,
        })
    }

    /// Build key pairs directly from PEM strings (tests, embedded keys).
    pub fn from_pem_strings(
        access_private: &str,
        access_public: &str,
        refresh_private: &str,
        refresh_public: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            access: KeyPair::from_pem(access_private.as_bytes(), access_public.as_bytes())?,
            refresh: KeyPair::from_pem(refresh_private.as_bytes(), refresh_public.as_bytes())?,
        })
    }
}

fn decode_base64(value: &str, name: &str) -> Result<Vec<u8>, DomainError> {
    BASE64.decode(value.trim()).map_err(|e| {
        DomainError::Token(TokenError::KeyLoad {
            message: format!("Key '{}' is not valid base64: {}", name, e),
        })
    })
}
