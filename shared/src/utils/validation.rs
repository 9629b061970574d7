//! Field-level validation predicates.
//!
//! These back the domain-level checks in the core services; the HTTP boundary
//! performs its own request-shape validation on top.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Pragmatic email shape check, not full RFC 5322
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Returns true when the input looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true when the password meets the minimum length requirement
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}
