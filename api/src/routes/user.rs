//! User endpoints: registration, verification, password reset, profile.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use signet_core::repositories::{SessionRepository, UserRepository};
use signet_core::services::auth::NewUser;
use signet_core::services::email::Mailer;
use signet_shared::types::response::MessageResponse;

use crate::dto::user::{
    CreateUserRequest, ForgotPasswordRequest, ResetPasswordRequest, UserResponse,
};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::CurrentUser;

use super::AppState;

/// Handler for POST /api/users
///
/// Registers an account and dispatches the verification email. The response
/// includes the verification code, so environments without a mail relay can
/// still complete the flow.
pub async fn create_user<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let request = request.into_inner();
    let fields = NewUser {
        email: request.email,
        first_name: request.first_name,
        last_name: request.last_name,
        middle_name: request.middle_name,
        nick_name: request.nick_name,
        password: request.password,
    };

    match state.auth_service.register_user(fields).await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(&user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/users/verify/{id}/{code}
pub async fn verify_user<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    path: web::Path<(Uuid, String)>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    let (user_id, code) = path.into_inner();

    match state.auth_service.verify_user(user_id, &code).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("User successfully verified")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/users/forgot-password
///
/// Always answers with the same message; whether an email went out is not
/// observable from the response.
pub async fn forgot_password<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.forgot_password(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(
            "If a user with that email is registered you will receive a password reset email",
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/users/reset-password/{id}/{code}
pub async fn reset_password<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    path: web::Path<(Uuid, String)>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let (user_id, code) = path.into_inner();

    match state
        .auth_service
        .reset_password(user_id, &code, &request.password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Successfully updated password")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/users/me
///
/// Pure read of the claims attached by the identity middleware; rejects
/// with 403 when none are present.
pub async fn current_user(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(user.0)
}
