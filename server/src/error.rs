use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Service error variants, mapped onto the HTTP taxonomy:
/// validation → 400, forbidden → 403, not found → 404, conflicting
/// transition → 409, storage fault → 500.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("email already exists")]
    EmailTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("email and password are required")]
    MissingCredentials,
    #[error("role must be mentor or mentee")]
    InvalidRole,
    #[error("forbidden")]
    Forbidden,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("request not found")]
    RequestNotFound,
    #[error("request does not allow this transition")]
    InvalidTransition,
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::EmailTaken
            | Self::InvalidCredentials
            | Self::MissingCredentials
            | Self::InvalidRole => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::ProfileNotFound | Self::RequestNotFound => StatusCode::NOT_FOUND,
            Self::InvalidTransition => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — TraceLayer already records method/uri/status for all
        // requests, and 4xx are expected client errors. The anyhow chain stays
        // server-side; the client sees the generic message.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, "internal error");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
