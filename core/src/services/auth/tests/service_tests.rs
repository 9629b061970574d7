//! Workflow tests for the authentication service.

use std::sync::Arc;

use crate::domain::entities::token::AccessClaims;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockSessionRepository, MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig, NewUser};
use crate::services::password::PasswordHasher;
use crate::services::token::{KeyKind, TokenCodec, TokenKeys};

use super::mocks::RecordingMailer;

const ACCESS_PRIVATE_PEM: &str = include_str!("../../../../testdata/rsa_private.pem");
const ACCESS_PUBLIC_PEM: &str = include_str!("../../../../testdata/rsa_public.pem");
const REFRESH_PRIVATE_PEM: &str = include_str!("../../../../testdata/rsa_refresh_private.pem");
const REFRESH_PUBLIC_PEM: &str = include_str!("../../../../testdata/rsa_refresh_public.pem");

struct Harness {
    service: AuthService<MockUserRepository, MockSessionRepository, RecordingMailer>,
    users: Arc<MockUserRepository>,
    mailer: Arc<RecordingMailer>,
    tokens: Arc<TokenCodec>,
}

fn harness() -> Harness {
    harness_with_mailer(RecordingMailer::new())
}

fn harness_with_mailer(mailer: RecordingMailer) -> Harness {
    let keys = TokenKeys::from_pem_strings(
        ACCESS_PRIVATE_PEM,
        ACCESS_PUBLIC_PEM,
        REFRESH_PRIVATE_PEM,
        REFRESH_PUBLIC_PEM,
    )
    .unwrap();
    let tokens = Arc::new(TokenCodec::new(keys));
    let users = Arc::new(MockUserRepository::new());
    let sessions = Arc::new(MockSessionRepository::new());
    let mailer = Arc::new(mailer);

    let service = AuthService::new(
        Arc::clone(&users),
        Arc::clone(&sessions),
        Arc::clone(&mailer),
        Arc::clone(&tokens),
        // Low cost keeps the tests fast
        PasswordHasher::new(4),
        AuthServiceConfig::default(),
    );

    Harness {
        service,
        users,
        mailer,
        tokens,
    }
}

fn registration(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        middle_name: None,
        nick_name: None,
        password: "pw12345678".to_string(),
    }
}

fn assert_auth_err(result: Result<impl std::fmt::Debug, DomainError>, expected: AuthError) {
    match result {
        Err(DomainError::Auth(e)) => assert_eq!(e, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[tokio::test]
async fn test_register_hashes_password_and_sends_email() {
    let h = harness();

    let user = h.service.register_user(registration("a@x.com")).await.unwrap();

    assert_ne!(user.password, "pw12345678");
    assert!(user.password.starts_with("$2"));
    assert!(!user.verified);

    assert_eq!(h.mailer.sent_count(), 1);
    let message = h.mailer.last_message().unwrap();
    assert_eq!(message.to, "a@x.com");
    assert!(message.text.contains(&user.verification_code));
    assert!(message.text.contains(&user.id.to_string()));
}

#[tokio::test]
async fn test_register_rejects_malformed_input() {
    let h = harness();

    let result = h.service.register_user(registration("not-an-email")).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    let mut short_password = registration("a@x.com");
    short_password.password = "short".to_string();
    let result = h.service.register_user(short_password).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    // Neither attempt reached the store or the mailer
    assert!(h.users.find_by_email("a@x.com").await.unwrap().is_none());
    assert_eq!(h.mailer.sent_count(), 0);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let h = harness();
    h.service.register_user(registration("a@x.com")).await.unwrap();

    let result = h.service.register_user(registration("a@x.com")).await;
    assert_auth_err(result, AuthError::AlreadyExists);
}

#[tokio::test]
async fn test_register_survives_mailer_failure() {
    let h = harness_with_mailer(RecordingMailer::failing());

    let user = h.service.register_user(registration("a@x.com")).await.unwrap();

    assert!(h.users.find_by_id(user.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_login_unknown_and_wrong_password_look_alike() {
    let h = harness();
    let user = h.service.register_user(registration("a@x.com")).await.unwrap();
    h.service
        .verify_user(user.id, &user.verification_code)
        .await
        .unwrap();

    let unknown = h.service.create_session("nobody@x.com", "pw12345678").await;
    let wrong = h.service.create_session("a@x.com", "wrongpassword").await;

    assert_auth_err(unknown, AuthError::InvalidCredentials);
    assert_auth_err(wrong, AuthError::InvalidCredentials);
}

#[tokio::test]
async fn test_login_requires_verification() {
    let h = harness();
    h.service.register_user(registration("a@x.com")).await.unwrap();

    let result = h.service.create_session("a@x.com", "pw12345678").await;
    assert_auth_err(result, AuthError::NotVerified);
}

#[tokio::test]
async fn test_register_verify_login_refresh_end_to_end() {
    let h = harness();

    let user = h.service.register_user(registration("a@x.com")).await.unwrap();
    h.service
        .verify_user(user.id, &user.verification_code)
        .await
        .unwrap();

    let pair = h
        .service
        .create_session("a@x.com", "pw12345678")
        .await
        .unwrap();

    let access_token = h
        .service
        .refresh_access_token(&pair.refresh_token)
        .await
        .unwrap();

    let claims: AccessClaims = h.tokens.verify(&access_token, KeyKind::Access).unwrap();
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.user_id().unwrap(), user.id);
}

#[tokio::test]
async fn test_login_is_case_normalized() {
    let h = harness();
    let user = h.service.register_user(registration("a@x.com")).await.unwrap();
    h.service
        .verify_user(user.id, &user.verification_code)
        .await
        .unwrap();

    assert!(h.service.create_session("A@X.com", "pw12345678").await.is_ok());
}

#[tokio::test]
async fn test_verify_wrong_then_right_then_again() {
    let h = harness();
    let user = h.service.register_user(registration("a@x.com")).await.unwrap();

    let wrong = h.service.verify_user(user.id, "not-the-code").await;
    assert_auth_err(wrong, AuthError::InvalidCode);

    h.service
        .verify_user(user.id, &user.verification_code)
        .await
        .unwrap();

    let again = h.service.verify_user(user.id, &user.verification_code).await;
    assert_auth_err(again, AuthError::AlreadyVerified);
}

#[tokio::test]
async fn test_verify_unknown_user() {
    let h = harness();
    let result = h.service.verify_user(uuid::Uuid::new_v4(), "code").await;
    assert_auth_err(result, AuthError::UserNotFound);
}

#[tokio::test]
async fn test_refresh_rejects_garbage_token() {
    let h = harness();
    let result = h.service.refresh_access_token("not.a.token").await;
    assert_auth_err(result, AuthError::InvalidRefreshToken);
}

#[tokio::test]
async fn test_refresh_rejects_revoked_session() {
    let h = harness();
    let user = h.service.register_user(registration("a@x.com")).await.unwrap();
    h.service
        .verify_user(user.id, &user.verification_code)
        .await
        .unwrap();
    let pair = h
        .service
        .create_session("a@x.com", "pw12345678")
        .await
        .unwrap();

    h.service.destroy_session(&pair.refresh_token).await.unwrap();

    let result = h.service.refresh_access_token(&pair.refresh_token).await;
    assert_auth_err(result, AuthError::InvalidRefreshToken);
}

#[tokio::test]
async fn test_second_logout_with_same_token_is_rejected() {
    let h = harness();
    let user = h.service.register_user(registration("a@x.com")).await.unwrap();
    h.service
        .verify_user(user.id, &user.verification_code)
        .await
        .unwrap();
    let pair = h
        .service
        .create_session("a@x.com", "pw12345678")
        .await
        .unwrap();

    h.service.destroy_session(&pair.refresh_token).await.unwrap();

    let again = h.service.destroy_session(&pair.refresh_token).await;
    assert_auth_err(again, AuthError::InvalidRefreshToken);
}

#[tokio::test]
async fn test_forgot_password_is_low_information() {
    let h = harness();
    // Registered but never verified
    h.service.register_user(registration("a@x.com")).await.unwrap();
    let before = h.mailer.sent_count();

    h.service.forgot_password("nobody@x.com").await.unwrap();
    h.service.forgot_password("a@x.com").await.unwrap();

    // Same success shape, and neither case sent an email
    assert_eq!(h.mailer.sent_count(), before);
}

#[tokio::test]
async fn test_forgot_password_emails_verified_user() {
    let h = harness();
    let user = h.service.register_user(registration("a@x.com")).await.unwrap();
    h.service
        .verify_user(user.id, &user.verification_code)
        .await
        .unwrap();

    h.service.forgot_password("a@x.com").await.unwrap();

    let stored = h.users.find_by_id(user.id).await.unwrap().unwrap();
    let code = stored.password_reset_code.expect("reset code stored");

    assert_eq!(h.mailer.sent_count(), 2);
    let message = h.mailer.last_message().unwrap();
    assert!(message.text.contains(&code));
}

#[tokio::test]
async fn test_reset_password_is_single_use() {
    let h = harness();
    let user = h.service.register_user(registration("a@x.com")).await.unwrap();
    h.service
        .verify_user(user.id, &user.verification_code)
        .await
        .unwrap();
    h.service.forgot_password("a@x.com").await.unwrap();

    let code = h
        .users
        .find_by_id(user.id)
        .await
        .unwrap()
        .unwrap()
        .password_reset_code
        .unwrap();

    h.service
        .reset_password(user.id, &code, "newpassword1")
        .await
        .unwrap();

    // Old password no longer works, the new one does
    let old = h.service.create_session("a@x.com", "pw12345678").await;
    assert_auth_err(old, AuthError::InvalidCredentials);
    assert!(h
        .service
        .create_session("a@x.com", "newpassword1")
        .await
        .is_ok());

    // Replaying the consumed code fails
    let replay = h
        .service
        .reset_password(user.id, &code, "anotherpw99")
        .await;
    assert_auth_err(replay, AuthError::ResetFailed);
}

#[tokio::test]
async fn test_reset_password_wrong_code() {
    let h = harness();
    let user = h.service.register_user(registration("a@x.com")).await.unwrap();
    h.service
        .verify_user(user.id, &user.verification_code)
        .await
        .unwrap();
    h.service.forgot_password("a@x.com").await.unwrap();

    let wrong = h
        .service
        .reset_password(user.id, "not-the-code", "newpassword1")
        .await;
    assert_auth_err(wrong, AuthError::ResetFailed);

    let missing = h
        .service
        .reset_password(uuid::Uuid::new_v4(), "any", "newpassword1")
        .await;
    assert_auth_err(missing, AuthError::ResetFailed);
}
