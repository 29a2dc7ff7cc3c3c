mod common;

use calshare::types::error::AppError;
use common::{test_data, TestContext};

#[tokio::test]
async fn test_registration_and_authentication_success() {
    let ctx = TestContext::new().await;

    let payload = test_data::sample_user();
    let uid = ctx.db.create_user(payload).await.expect("create_user failed");

    let user = ctx
        .db
        .authenticate("testuser", "correct horse battery staple")
        .await
        .expect("authenticate failed");

    assert_eq!(user.id, uid);
    assert_eq!(user.name, "Test");
    assert_eq!(user.surname, "User");
    assert_eq!(user.username, "testuser");
}

#[tokio::test]
async fn test_plaintext_password_is_never_stored() {
    let ctx = TestContext::new().await;

    let uid = ctx
        .db
        .create_user(test_data::sample_user())
        .await
        .unwrap();

    let user = ctx.db.get_user_by_id(&uid).await.unwrap();
    assert_ne!(user.password_hash, "correct horse battery staple");
    assert!(!user.password_hash.contains("correct horse battery staple"));
    // argon2 PHC string
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_authenticate_rejects_wrong_password() {
    let ctx = TestContext::new().await;

    ctx.db.create_user(test_data::sample_user()).await.unwrap();

    let result = ctx.db.authenticate("testuser", "not the password").await;
    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[tokio::test]
async fn test_authenticate_rejects_unknown_username() {
    let ctx = TestContext::new().await;

    ctx.db.create_user(test_data::sample_user()).await.unwrap();

    // no such user: a defined failure, and the same one as a bad password
    let result = ctx.db.authenticate("nobody", "whatever").await;
    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let ctx = TestContext::new().await;

    ctx.db
        .create_user(test_data::user_named("taken"))
        .await
        .unwrap();

    let result = ctx.db.create_user(test_data::user_named("taken")).await;
    assert!(matches!(result, Err(AppError::AlreadyExists)));
}

#[tokio::test]
async fn test_empty_fields_are_rejected() {
    let ctx = TestContext::new().await;

    let mut payload = test_data::sample_user();
    payload.password = "".to_string();

    let result = ctx.db.create_user(payload).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_get_user_by_username() {
    let ctx = TestContext::new().await;

    let uid = ctx
        .db
        .create_user(test_data::user_named("lookup"))
        .await
        .unwrap();

    let user = ctx.db.get_user_by_username("lookup").await.unwrap();
    assert_eq!(user.id, uid);

    let missing = ctx.db.get_user_by_username("ghost").await;
    assert!(matches!(missing, Err(AppError::NotFound)));
}
