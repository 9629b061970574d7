//! User entity representing a registered account in the Signet system.

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of generated verification and password-reset codes
const CODE_LENGTH: usize = 21;

/// Generates a random alphanumeric one-time code (verification or reset).
pub fn generate_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// User entity representing a registered account.
///
/// The `password` field holds the bcrypt hash once the entity has passed
/// through the store's pre-persist hook. Between `set_password` and that hook
/// it temporarily holds the plaintext, flagged by `password_dirty`; the hook
/// must run before any persistence call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique across all users, stored lowercase
    pub email: String,

    /// First name (required)
    pub first_name: String,

    /// Last name (required)
    pub last_name: String,

    /// Middle name (optional)
    pub middle_name: Option<String>,

    /// Nickname (optional)
    pub nick_name: Option<String>,

    /// Password hash (plaintext only transiently, see struct docs)
    pub password: String,

    /// Code emailed at registration, proves control of the address
    pub verification_code: String,

    /// Reset code set by forgot-password, cleared on successful reset
    pub password_reset_code: Option<String>,

    /// Whether the email address has been verified
    pub verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Set by `set_password`, cleared by the store's pre-persist hash hook
    #[serde(skip)]
    password_dirty: bool,
}

impl User {
    /// Creates a new unverified user with a fresh verification code.
    ///
    /// The email is case-normalized and the password is held plaintext until
    /// the store hashes it before the first persistence.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into().trim().to_lowercase(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: None,
            nick_name: None,
            password: password.into(),
            verification_code: generate_code(),
            password_reset_code: None,
            verified: false,
            created_at: now,
            updated_at: now,
            password_dirty: true,
        }
    }

    /// Rebuilds a user from persisted fields.
    ///
    /// The password is the stored hash, so the dirty flag starts clear.
    #[allow(clippy::too_many_arguments)]
    pub fn hydrate(
        id: Uuid,
        email: String,
        first_name: String,
        last_name: String,
        middle_name: Option<String>,
        nick_name: Option<String>,
        password: String,
        verification_code: String,
        password_reset_code: Option<String>,
        verified: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
            middle_name,
            nick_name,
            password,
            verification_code,
            password_reset_code,
            verified,
            created_at,
            updated_at,
            password_dirty: false,
        }
    }

    /// Sets the middle name
    pub fn with_middle_name(mut self, middle_name: Option<String>) -> Self {
        self.middle_name = middle_name;
        self
    }

    /// Sets the nickname
    pub fn with_nick_name(mut self, nick_name: Option<String>) -> Self {
        self.nick_name = nick_name;
        self
    }

    /// Replaces the password with a new plaintext and flags it for hashing.
    ///
    /// The store's pre-persist hook hashes exactly the fields flagged dirty;
    /// updating unrelated fields never rehashes.
    pub fn set_password(&mut self, plaintext: impl Into<String>) {
        self.password = plaintext.into();
        self.password_dirty = true;
        self.updated_at = Utc::now();
    }

    /// Whether the password was modified since the last persistence
    pub fn password_is_dirty(&self) -> bool {
        self.password_dirty
    }

    /// Replaces the (dirty) plaintext password with its hash.
    ///
    /// Called by the store wrapper only; see `UserStore`.
    pub(crate) fn apply_password_hash(&mut self, hash: String) {
        self.password = hash;
        self.password_dirty = false;
    }

    /// Marks the email address as verified.
    ///
    /// The verification code is deliberately left in place; `verified` is the
    /// only gate against reuse.
    pub fn verify(&mut self) {
        self.verified = true;
        self.updated_at = Utc::now();
    }

    /// Stores a new password-reset code, overwriting any previous one
    pub fn set_password_reset_code(&mut self, code: String) {
        self.password_reset_code = Some(code);
        self.updated_at = Utc::now();
    }

    /// Clears the password-reset code after a successful reset
    pub fn clear_password_reset_code(&mut self) {
        self.password_reset_code = None;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("A@X.com", "Ada", "Lovelace", "pw12345678");

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.first_name, "Ada");
        assert!(!user.verified);
        assert!(user.password_reset_code.is_none());
        assert!(user.password_is_dirty());
        assert_eq!(user.verification_code.len(), 21);
    }

    #[test]
    fn test_set_password_marks_dirty() {
        let mut user = User::new("a@x.com", "Ada", "Lovelace", "pw12345678");
        user.apply_password_hash("$2b$12$hash".to_string());
        assert!(!user.password_is_dirty());

        user.set_password("newpassword1");
        assert!(user.password_is_dirty());
        assert_eq!(user.password, "newpassword1");
    }

    #[test]
    fn test_verify_keeps_verification_code() {
        let mut user = User::new("a@x.com", "Ada", "Lovelace", "pw12345678");
        let code = user.verification_code.clone();

        user.verify();

        assert!(user.verified);
        assert_eq!(user.verification_code, code);
    }

    #[test]
    fn test_reset_code_lifecycle() {
        let mut user = User::new("a@x.com", "Ada", "Lovelace", "pw12345678");

        user.set_password_reset_code("reset-code".to_string());
        assert_eq!(user.password_reset_code.as_deref(), Some("reset-code"));

        user.clear_password_reset_code();
        assert!(user.password_reset_code.is_none());
    }

    #[test]
    fn test_generate_code_is_random() {
        let a = generate_code();
        let b = generate_code();
        assert_eq!(a.len(), 21);
        assert_ne!(a, b);
    }
}
