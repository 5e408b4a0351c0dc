use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::Utc;
use rand_core::OsRng;
use uuid::Uuid;

use mentorlink_auth::token::issue_token;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ServiceError;

fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::Internal(anyhow::anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, hash: &str) -> Result<bool, ServiceError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| ServiceError::Internal(anyhow::anyhow!("parse password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

pub struct RegisterUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUseCase<R> {
    pub async fn execute(&self, input: RegisterInput) -> Result<Uuid, ServiceError> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(ServiceError::MissingCredentials);
        }
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ServiceError::EmailTaken);
        }
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            password_hash: hash_password(&input.password)?,
            created_at: Utc::now(),
        };
        self.repo.create(&user).await?;
        Ok(user.id)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    /// Same error for unknown email and wrong password — no account probing.
    pub async fn execute(&self, input: LoginInput) -> Result<String, ServiceError> {
        let user = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !verify_password(&input.password, &user.password_hash)? {
            return Err(ServiceError::InvalidCredentials);
        }

        let (token, _exp) = issue_token(user.id, &self.jwt_secret)
            .map_err(|e| ServiceError::Internal(anyhow::anyhow!("issue token: {e}")))?;
        Ok(token)
    }
}
