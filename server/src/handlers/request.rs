use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mentorlink_auth::extract::Identity;

use crate::domain::types::Decision;
use crate::error::ServiceError;
use crate::state::AppState;
use crate::usecase::request::{CreateRequestUseCase, DecideRequestUseCase, EndRequestUseCase};

// ── POST /mentorship-requests ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRequestRequest {
    pub mentor_id: Uuid,
}

#[derive(Serialize)]
pub struct CreateRequestResponse {
    pub id: Uuid,
}

pub async fn create_request(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateRequestRequest>,
) -> Result<(StatusCode, Json<CreateRequestResponse>), ServiceError> {
    let usecase = CreateRequestUseCase {
        repo: state.request_repo(),
    };
    let id = usecase.execute(identity.user_id, body.mentor_id).await?;
    Ok((StatusCode::CREATED, Json(CreateRequestResponse { id })))
}

// ── PUT /mentorship-requests/{id}/accept ─────────────────────────────────────

pub async fn accept_request(
    identity: Identity,
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> Result<StatusCode, ServiceError> {
    let usecase = DecideRequestUseCase {
        repo: state.request_repo(),
    };
    usecase
        .execute(request_id, identity.user_id, Decision::Accept)
        .await?;
    Ok(StatusCode::OK)
}

// ── PUT /mentorship-requests/{id}/decline ────────────────────────────────────

pub async fn decline_request(
    identity: Identity,
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> Result<StatusCode, ServiceError> {
    let usecase = DecideRequestUseCase {
        repo: state.request_repo(),
    };
    usecase
        .execute(request_id, identity.user_id, Decision::Decline)
        .await?;
    Ok(StatusCode::OK)
}

// ── PUT /mentorship-requests/{id}/end ────────────────────────────────────────

pub async fn end_request(
    identity: Identity,
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> Result<StatusCode, ServiceError> {
    let usecase = EndRequestUseCase {
        repo: state.request_repo(),
    };
    usecase.execute(request_id, identity.user_id).await?;
    Ok(StatusCode::OK)
}
