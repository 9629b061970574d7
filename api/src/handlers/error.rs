//! Mapping from workflow errors to HTTP responses.
//!
//! Every variant maps to a status code and a generic body; internal causes
//! (database, token signing) are logged for operators and never leak into
//! the response.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use signet_core::errors::{AuthError, DomainError};
use signet_shared::types::response::ErrorResponse;

/// Convert a workflow error into the HTTP response the client sees.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth) => handle_auth_error(auth),

        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }

        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),

        DomainError::Database { message } => {
            log::error!("Database error: {}", message);
            internal_error()
        }

        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            internal_error()
        }

        DomainError::Token(e) => {
            log::error!("Token error: {}", e);
            internal_error()
        }
    }
}

fn handle_auth_error(error: AuthError) -> HttpResponse {
    let body = ErrorResponse::new(error_code(error), error.to_string());
    match error {
        // Same status for unknown email and wrong password
        AuthError::InvalidCredentials => HttpResponse::NotFound().json(body),
        AuthError::NotVerified => HttpResponse::Unauthorized().json(body),
        AuthError::InvalidRefreshToken => HttpResponse::Unauthorized().json(body),
        AuthError::AlreadyExists => HttpResponse::Conflict().json(body),
        AuthError::UserNotFound => HttpResponse::NotFound().json(body),
        AuthError::AlreadyVerified => HttpResponse::Conflict().json(body),
        AuthError::InvalidCode => HttpResponse::Conflict().json(body),
        AuthError::ResetFailed => HttpResponse::BadRequest().json(body),
    }
}

fn error_code(error: AuthError) -> &'static str {
    match error {
        AuthError::InvalidCredentials => "invalid_credentials",
        AuthError::NotVerified => "not_verified",
        AuthError::InvalidRefreshToken => "invalid_refresh_token",
        AuthError::AlreadyExists => "already_exists",
        AuthError::UserNotFound => "user_not_found",
        AuthError::AlreadyVerified => "already_verified",
        AuthError::InvalidCode => "invalid_code",
        AuthError::ResetFailed => "reset_failed",
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "internal_error",
        "An internal error occurred",
    ))
}

/// Convert DTO validation failures into a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", errors.to_string()))
}
