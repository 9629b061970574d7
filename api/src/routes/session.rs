//! Session endpoints: login, refresh and logout.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use signet_core::errors::AuthError;
use signet_core::repositories::{SessionRepository, UserRepository};
use signet_core::services::email::Mailer;
use signet_shared::types::response::MessageResponse;

use crate::dto::auth::{AccessTokenResponse, CreateSessionRequest, TokenPairResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Refresh and logout read the long-lived token from this header
const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

/// Handler for POST /api/sessions
///
/// Exchanges credentials for a token pair. Unknown email and wrong password
/// produce the same response.
pub async fn create_session<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<CreateSessionRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .create_session(&request.email, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/sessions/refresh
///
/// Issues a fresh access token; the refresh token itself is never rotated.
pub async fn refresh_session<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: HttpRequest,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    let refresh_token = match refresh_token_header(&request) {
        Some(token) => token,
        None => return handle_domain_error(AuthError::InvalidRefreshToken.into()),
    };

    match state.auth_service.refresh_access_token(&refresh_token).await {
        Ok(access_token) => HttpResponse::Ok().json(AccessTokenResponse { access_token }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/sessions
///
/// Revokes the session behind the presented refresh token.
pub async fn destroy_session<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: HttpRequest,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    let refresh_token = match refresh_token_header(&request) {
        Some(token) => token,
        None => return handle_domain_error(AuthError::InvalidRefreshToken.into()),
    };

    match state.auth_service.destroy_session(&refresh_token).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Session revoked")),
        Err(error) => handle_domain_error(error),
    }
}

fn refresh_token_header(request: &HttpRequest) -> Option<String> {
    request
        .headers()
        .get(REFRESH_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
