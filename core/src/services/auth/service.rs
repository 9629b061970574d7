//! Main authentication workflow implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::session::Session;
use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::domain::entities::user::{generate_code, User};
use crate::domain::value_objects::TokenPair;
use signet_shared::utils::validation::{is_valid_email, is_valid_password, MIN_PASSWORD_LENGTH};

use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{SessionRepository, UserRepository, UserStore};
use crate::services::email::{EmailMessage, Mailer};
use crate::services::password::PasswordHasher;
use crate::services::token::{KeyKind, TokenCodec};

use super::config::AuthServiceConfig;

fn check_password_length(password: &str) -> DomainResult<()> {
    if !is_valid_password(password) {
        return Err(DomainError::Validation {
            message: format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
        });
    }
    Ok(())
}

/// Fields accepted at registration, validated for shape upstream.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub nick_name: Option<String>,
    pub password: String,
}

/// Authentication service orchestrating the account lifecycle.
///
/// Holds no mutable state of its own; the user and session stores are the
/// only serialization points across concurrent requests.
pub struct AuthService<U, S, M>
where
    U: UserRepository,
    S: SessionRepository,
    M: Mailer,
{
    /// User store with the password pre-persist hook
    users: UserStore<U>,
    /// Session repository for login state
    sessions: Arc<S>,
    /// Outbound email delivery
    mailer: Arc<M>,
    /// JWT signing and verification
    tokens: Arc<TokenCodec>,
    /// Password hashing and verification
    hasher: PasswordHasher,
    /// Expiry policy and email link base
    config: AuthServiceConfig,
}

impl<U, S, M> AuthService<U, S, M>
where
    U: UserRepository,
    S: SessionRepository,
    M: Mailer,
{
    pub fn new(
        user_repository: Arc<U>,
        session_repository: Arc<S>,
        mailer: Arc<M>,
        tokens: Arc<TokenCodec>,
        hasher: PasswordHasher,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            users: UserStore::new(user_repository, hasher),
            sessions: session_repository,
            mailer,
            tokens,
            hasher,
            config,
        }
    }

    /// Log in: exchange credentials for an access/refresh token pair.
    ///
    /// Unknown email and wrong password both surface as `InvalidCredentials`;
    /// existence is checked first so either path ends at the same error. No
    /// session row is created on any failure path.
    pub async fn create_session(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self
            .users
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verified {
            return Err(AuthError::NotVerified.into());
        }

        if !self.hasher.verify(password, &user.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let session = self.sessions.create(Session::new(user.id)).await?;

        let access_claims = AccessClaims::from_user(&user, self.config.access_token_ttl_secs);
        let refresh_claims = RefreshClaims::new(session.id, self.config.refresh_token_ttl_secs);

        let pair = TokenPair {
            access_token: self.tokens.sign(&access_claims, KeyKind::Access)?,
            refresh_token: self.tokens.sign(&refresh_claims, KeyKind::Refresh)?,
        };

        info!(user_id = %user.id, session_id = %session.id, "session created");
        Ok(pair)
    }

    /// Exchange a refresh token for a fresh access token.
    ///
    /// Every failure mode (unverifiable token, missing or revoked session,
    /// vanished user) collapses into `InvalidRefreshToken`. The refresh token
    /// itself is never rotated here.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> DomainResult<String> {
        let claims: RefreshClaims = self
            .tokens
            .verify(refresh_token, KeyKind::Refresh)
            .ok_or(AuthError::InvalidRefreshToken)?;

        let session_id = claims
            .session_id()
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .filter(|s| s.valid)
            .ok_or(AuthError::InvalidRefreshToken)?;

        let user = self
            .users
            .find_by_id(session.user_id)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        let access_claims = AccessClaims::from_user(&user, self.config.access_token_ttl_secs);
        self.tokens.sign(&access_claims, KeyKind::Access)
    }

    /// Register a new account and dispatch the verification email.
    ///
    /// The unique-email constraint is enforced by the store and surfaces as
    /// `AlreadyExists`. Email delivery is decoupled from the registration
    /// result; a send failure is logged and the created user is returned
    /// regardless.
    pub async fn register_user(&self, fields: NewUser) -> DomainResult<User> {
        // The boundary validates request shape; these guards hold for
        // callers that skip it
        if !is_valid_email(&fields.email) {
            return Err(DomainError::Validation {
                message: "Invalid email address".to_string(),
            });
        }
        check_password_length(&fields.password)?;

        let user = User::new(
            fields.email,
            fields.first_name,
            fields.last_name,
            fields.password,
        )
        .with_middle_name(fields.middle_name)
        .with_nick_name(fields.nick_name);

        let user = self.users.create(user).await?;
        info!(user_id = %user.id, "user registered");

        let message = self.verification_email(&user);
        if let Err(e) = self.mailer.send(message).await {
            warn!(user_id = %user.id, error = %e, "verification email failed to send");
        }

        Ok(user)
    }

    /// Mark an account's email address as verified.
    pub async fn verify_user(&self, user_id: Uuid, code: &str) -> DomainResult<()> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.verified {
            return Err(AuthError::AlreadyVerified.into());
        }

        if user.verification_code != code {
            return Err(AuthError::InvalidCode.into());
        }

        user.verify();
        self.users.update(user).await?;
        info!(user_id = %user_id, "user verified");
        Ok(())
    }

    /// Start a password reset.
    ///
    /// Deliberately low-information: unknown and unverified addresses take no
    /// action, and every path returns the same success shape. Only the most
    /// recent reset code is ever valid.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        let user = match self.users.find_by_email(&email.trim().to_lowercase()).await? {
            Some(user) if user.verified => user,
            Some(_) => {
                debug!("password reset requested for unverified account");
                return Ok(());
            }
            None => {
                debug!("password reset requested for unknown email");
                return Ok(());
            }
        };

        let mut user = user;
        user.set_password_reset_code(generate_code());
        let user = self.users.update(user).await?;

        let message = self.reset_email(&user);
        if let Err(e) = self.mailer.send(message).await {
            warn!(user_id = %user.id, error = %e, "reset email failed to send");
        }

        Ok(())
    }

    /// Complete a password reset with a previously issued code.
    ///
    /// Missing user, absent code and mismatched code all collapse into
    /// `ResetFailed`. The code is cleared on success, so replaying it fails.
    pub async fn reset_password(
        &self,
        user_id: Uuid,
        code: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        check_password_length(new_password)?;

        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::ResetFailed)?;

        match &user.password_reset_code {
            Some(stored) if stored == code => {}
            _ => return Err(AuthError::ResetFailed.into()),
        }

        user.clear_password_reset_code();
        user.set_password(new_password);
        self.users.update(user).await?;
        info!(user_id = %user_id, "password reset");
        Ok(())
    }

    /// Log out: revoke the session behind a refresh token.
    ///
    /// Verifiable tokens whose session is already gone are treated the same
    /// as unverifiable ones.
    pub async fn destroy_session(&self, refresh_token: &str) -> DomainResult<()> {
        let claims: RefreshClaims = self
            .tokens
            .verify(refresh_token, KeyKind::Refresh)
            .ok_or(AuthError::InvalidRefreshToken)?;

        let session_id = claims
            .session_id()
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        if !self.sessions.invalidate(session_id).await? {
            return Err(AuthError::InvalidRefreshToken.into());
        }

        info!(session_id = %session_id, "session revoked");
        Ok(())
    }

    fn verification_email(&self, user: &User) -> EmailMessage {
        let link = format!(
            "{}/api/users/verify/{}/{}",
            self.config.public_base_url, user.id, user.verification_code
        );
        EmailMessage::new(
            user.email.clone(),
            "Please verify your account",
            format!(
                "Verification code: {}. Id: {}\n\nOpen {} to verify your account.",
                user.verification_code, user.id, link
            ),
        )
    }

    fn reset_email(&self, user: &User) -> EmailMessage {
        // Only called after forgot_password stored a code
        let code = user.password_reset_code.as_deref().unwrap_or_default();
        let link = format!(
            "{}/api/users/reset-password/{}/{}",
            self.config.public_base_url, user.id, code
        );
        EmailMessage::new(
            user.email.clone(),
            "Reset your password",
            format!(
                "Password reset code: {}. Id: {}\n\nOpen {} to choose a new password.",
                code, user.id, link
            ),
        )
    }
}
