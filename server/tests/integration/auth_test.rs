use mentorlink_auth::token::validate_token;
use mentorlink_server::error::ServiceError;
use mentorlink_server::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};

use crate::helpers::{InMemoryStore, TEST_JWT_SECRET};

fn register_input(email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

fn login_input(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn register_then_login_yields_a_valid_token() {
    let store = InMemoryStore::new();
    let register = RegisterUseCase {
        repo: store.user_repo(),
    };
    let login = LoginUseCase {
        repo: store.user_repo(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let user_id = register
        .execute(register_input("new@example.com", "hunter2"))
        .await
        .unwrap();

    let token = login
        .execute(login_input("new@example.com", "hunter2"))
        .await
        .unwrap();

    let info = validate_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user_id);
}

#[tokio::test]
async fn register_rejects_a_taken_email() {
    let store = InMemoryStore::new();
    store.seed_user("taken@example.com");
    let register = RegisterUseCase {
        repo: store.user_repo(),
    };

    let result = register
        .execute(register_input("taken@example.com", "hunter2"))
        .await;
    assert!(matches!(result, Err(ServiceError::EmailTaken)));
}

#[tokio::test]
async fn register_rejects_blank_credentials() {
    let store = InMemoryStore::new();
    let register = RegisterUseCase {
        repo: store.user_repo(),
    };

    let result = register.execute(register_input("", "hunter2")).await;
    assert!(matches!(result, Err(ServiceError::MissingCredentials)));

    let result = register.execute(register_input("a@example.com", "")).await;
    assert!(matches!(result, Err(ServiceError::MissingCredentials)));
}

#[tokio::test]
async fn login_rejects_unknown_email_and_wrong_password_alike() {
    let store = InMemoryStore::new();
    let register = RegisterUseCase {
        repo: store.user_repo(),
    };
    let login = LoginUseCase {
        repo: store.user_repo(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    register
        .execute(register_input("known@example.com", "hunter2"))
        .await
        .unwrap();

    let unknown = login
        .execute(login_input("nobody@example.com", "hunter2"))
        .await;
    assert!(matches!(unknown, Err(ServiceError::InvalidCredentials)));

    let wrong = login
        .execute(login_input("known@example.com", "hunter3"))
        .await;
    assert!(matches!(wrong, Err(ServiceError::InvalidCredentials)));
}
