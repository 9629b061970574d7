//! Token codec: compact RS256-signed claims tokens.

use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{DomainError, TokenError};

use super::keys::TokenKeys;

/// Selects which key pair an operation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Access token key pair
    Access,
    /// Refresh token key pair
    Refresh,
}

/// Signs and verifies claims tokens with per-kind RS256 keys.
///
/// `verify` collapses every failure mode into `None`; callers treat that
/// uniformly as "unauthenticated" with no expired/invalid distinction.
#[derive(Clone)]
pub struct TokenCodec {
    keys: TokenKeys,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(keys: TokenKeys) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;

        Self { keys, validation }
    }

    /// Sign claims into a compact token with the selected private key.
    ///
    /// Expiry travels inside the claims themselves; the codec only signs.
    pub fn sign<T: Serialize>(&self, claims: &T, kind: KeyKind) -> Result<String, DomainError> {
        let key = match kind {
            KeyKind::Access => &self.keys.access.encoding,
            KeyKind::Refresh => &self.keys.refresh.encoding,
        };
        encode(&Header::new(Algorithm::RS256), claims, key)
            .map_err(|_| DomainError::Token(TokenError::SigningFailed))
    }

    /// Verify a token with the selected public key.
    ///
    /// Returns `None` on bad signature, expiry, malformed input, or wrong
    /// claims shape; the caller must not learn which.
    pub fn verify<T: DeserializeOwned>(&self, token: &str, kind: KeyKind) -> Option<T> {
        let key = match kind {
            KeyKind::Access => &self.keys.access.decoding,
            KeyKind::Refresh => &self.keys.refresh.decoding,
        };
        decode::<T>(token, key, &self.validation)
            .map(|data| data.claims)
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::token::{AccessClaims, RefreshClaims};
    use crate::domain::entities::user::User;
    use uuid::Uuid;

    const ACCESS_PRIVATE_PEM: &str = include_str!("../../../testdata/rsa_private.pem");
    const ACCESS_PUBLIC_PEM: &str = include_str!("../../../testdata/rsa_public.pem");
    const REFRESH_PRIVATE_PEM: &str = include_str!("../../../testdata/rsa_refresh_private.pem");
    const REFRESH_PUBLIC_PEM: &str = include_str!("../../../testdata/rsa_refresh_public.pem");

    fn codec() -> TokenCodec {
        let keys = TokenKeys::from_pem_strings(
            ACCESS_PRIVATE_PEM,
            ACCESS_PUBLIC_PEM,
            REFRESH_PRIVATE_PEM,
            REFRESH_PUBLIC_PEM,
        )
        .unwrap();
        TokenCodec::new(keys)
    }

    #[test]
    fn test_sign_and_verify_access_claims() {
        let codec = codec();
        let user = User::new("a@x.com", "Ada", "Lovelace", "pw12345678");
        let claims = AccessClaims::from_user(&user, 900);

        let token = codec.sign(&claims, KeyKind::Access).unwrap();
        let decoded: AccessClaims = codec.verify(&token, KeyKind::Access).unwrap();

        assert_eq!(decoded.email, "a@x.com");
        assert_eq!(decoded.user_id().unwrap(), user.id);
    }

    #[test]
    fn test_verify_returns_none_on_garbage() {
        let codec = codec();
        let decoded: Option<AccessClaims> = codec.verify("not.a.token", KeyKind::Access);
        assert!(decoded.is_none());
    }

    #[test]
    fn test_expired_token_returns_none() {
        let codec = codec();
        let mut claims = RefreshClaims::new(Uuid::new_v4(), 3600);
        claims.exp = claims.iat - 120;

        let token = codec.sign(&claims, KeyKind::Refresh).unwrap();
        let decoded: Option<RefreshClaims> = codec.verify(&token, KeyKind::Refresh);
        assert!(decoded.is_none());
    }

    #[test]
    fn test_kinds_use_distinct_keys() {
        let codec = codec();
        let claims = RefreshClaims::new(Uuid::new_v4(), 3600);

        let token = codec.sign(&claims, KeyKind::Refresh).unwrap();
        let wrong_kind: Option<RefreshClaims> = codec.verify(&token, KeyKind::Access);
        assert!(wrong_kind.is_none());
    }

    #[test]
    fn test_refresh_token_roundtrip() {
        let codec = codec();
        let session_id = Uuid::new_v4();
        let claims = RefreshClaims::new(session_id, 3600);

        let token = codec.sign(&claims, KeyKind::Refresh).unwrap();
        let decoded: RefreshClaims = codec.verify(&token, KeyKind::Refresh).unwrap();
        assert_eq!(decoded.session_id().unwrap(), session_id);
    }
}
