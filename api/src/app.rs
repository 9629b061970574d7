//! Route registration.
//!
//! Kept generic over the repository and mailer implementations so both the
//! binary and the integration tests register the same tree.

use actix_web::web;

use signet_core::repositories::{SessionRepository, UserRepository};
use signet_core::services::email::Mailer;

use crate::routes;

/// Register every route on the given service config.
///
/// The caller provides `web::Data<AppState<U, S, M>>` separately.
pub fn configure<U, S, M>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    M: Mailer + 'static,
{
    cfg.route("/healthcheck", web::get().to(routes::health::healthcheck))
        .service(
            web::scope("/api")
                .route(
                    "/sessions",
                    web::post().to(routes::session::create_session::<U, S, M>),
                )
                .route(
                    "/sessions/refresh",
                    web::post().to(routes::session::refresh_session::<U, S, M>),
                )
                .route(
                    "/sessions",
                    web::delete().to(routes::session::destroy_session::<U, S, M>),
                )
                .route("/users", web::post().to(routes::user::create_user::<U, S, M>))
                .route(
                    "/users/verify/{id}/{code}",
                    web::post().to(routes::user::verify_user::<U, S, M>),
                )
                .route(
                    "/users/forgot-password",
                    web::post().to(routes::user::forgot_password::<U, S, M>),
                )
                .route(
                    "/users/reset-password/{id}/{code}",
                    web::post().to(routes::user::reset_password::<U, S, M>),
                )
                .route("/users/me", web::get().to(routes::user::current_user)),
        );
}
