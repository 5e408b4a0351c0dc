//! Bearer-token identity extractor.

use axum::extract::{FromRef, FromRequestParts};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::token::validate_token;

/// HMAC secret for access-token validation, pulled out of the application
/// state via `FromRef`.
#[derive(Debug, Clone)]
pub struct JwtSecret(pub String);

/// Caller identity resolved from the `Authorization: Bearer <token>` header.
///
/// Rejections: 401 when the header is absent or not a bearer scheme,
/// 403 when the token fails validation (bad signature, expired, malformed).
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously and return a 'static async move block to
    // avoid E0195 under precise capturing.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let bearer = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::to_owned);

        async move {
            let token = bearer.ok_or(StatusCode::UNAUTHORIZED)?;
            let info =
                validate_token(&token, &secret.0).map_err(|_| StatusCode::FORBIDDEN)?;
            Ok(Self {
                user_id: info.user_id,
            })
        }
    }
}
