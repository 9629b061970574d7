//! Error types for the authentication workflow and token handling.
//!
//! These are returned, never raised as control flow, across the workflow
//! boundary; the HTTP layer maps each variant to a status code and a
//! generic message. Enumeration-resistant operations collapse several
//! internal causes into one variant on purpose.

use thiserror::Error;

/// Authentication workflow errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two are indistinguishable to
    /// the caller to prevent user enumeration
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Login attempted before the email address was verified
    #[error("Please verify your account first")]
    NotVerified,

    /// Refresh token unverifiable, session missing or revoked, or user gone;
    /// all collapsed into one variant
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Unique constraint violation at registration
    #[error("User already exists")]
    AlreadyExists,

    /// No user with the given id
    #[error("User not found")]
    UserNotFound,

    /// Verification attempted on an already-verified account
    #[error("User is already verified")]
    AlreadyVerified,

    /// Verification code mismatch
    #[error("Verification code is invalid")]
    InvalidCode,

    /// Reset failed: user missing, no reset code on file, or code mismatch;
    /// collapsed into one variant
    #[error("Could not reset password")]
    ResetFailed,
}

/// Token codec errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token signing failed")]
    SigningFailed,

    #[error("Key material could not be loaded: {message}")]
    KeyLoad { message: String },
}
