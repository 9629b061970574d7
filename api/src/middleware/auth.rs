//! Identity middleware.
//!
//! `DeserializeUser` runs on every request: it looks for an access token in
//! one of the accepted headers, verifies it, and attaches the decoded claims
//! to the request extensions. A missing or unverifiable token is not an
//! error here; only handlers that require identity reject, via the
//! `CurrentUser` extractor.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorForbidden,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use signet_core::domain::entities::token::AccessClaims;
use signet_core::services::token::{KeyKind, TokenCodec};

/// Header names searched for an access token, in priority order
const TOKEN_HEADERS: [&str; 3] = ["x-access-token", "authorization", "x-authorization"];

/// Middleware factory attaching verified access claims to each request.
pub struct DeserializeUser {
    codec: Arc<TokenCodec>,
}

impl DeserializeUser {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for DeserializeUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = DeserializeUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(DeserializeUserMiddleware {
            service: Rc::new(service),
            codec: Arc::clone(&self.codec),
        }))
    }
}

pub struct DeserializeUserMiddleware<S> {
    service: Rc<S>,
    codec: Arc<TokenCodec>,
}

impl<S, B> Service<ServiceRequest> for DeserializeUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(token) = extract_access_token(&req) {
            if let Some(claims) = self.codec.verify::<AccessClaims>(&token, KeyKind::Access) {
                req.extensions_mut().insert(claims);
            }
        }

        let fut = self.service.call(req);
        Box::pin(fut)
    }
}

/// Pull a token from the first accepted header that carries one.
///
/// An optional `Bearer ` prefix is stripped from any of them.
fn extract_access_token(req: &ServiceRequest) -> Option<String> {
    for name in TOKEN_HEADERS {
        if let Some(value) = req.headers().get(name).and_then(|v| v.to_str().ok()) {
            let token = value.strip_prefix("Bearer ").unwrap_or(value);
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }
    None
}

/// Extractor for handlers that require an authenticated caller.
///
/// Rejects with 403 when `DeserializeUser` attached no claims.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AccessClaims);

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AccessClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ErrorForbidden("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_extract_access_token_headers() {
        let req = test::TestRequest::default()
            .insert_header(("x-access-token", "token_a"))
            .to_srv_request();
        assert_eq!(extract_access_token(&req), Some("token_a".to_string()));

        let req = test::TestRequest::default()
            .insert_header(("authorization", "Bearer token_b"))
            .to_srv_request();
        assert_eq!(extract_access_token(&req), Some("token_b".to_string()));

        let req = test::TestRequest::default()
            .insert_header(("x-authorization", "token_c"))
            .to_srv_request();
        assert_eq!(extract_access_token(&req), Some("token_c".to_string()));

        let req = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_access_token(&req), None);
    }

    #[actix_web::test]
    async fn test_x_access_token_wins_over_authorization() {
        let req = test::TestRequest::default()
            .insert_header(("x-access-token", "primary"))
            .insert_header(("authorization", "Bearer secondary"))
            .to_srv_request();
        assert_eq!(extract_access_token(&req), Some("primary".to_string()));
    }
}
