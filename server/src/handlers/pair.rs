use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use mentorlink_auth::extract::Identity;

use crate::domain::types::PairView;
use crate::error::ServiceError;
use crate::state::AppState;
use crate::usecase::discovery::ActivePairsUseCase;

// ── GET /mentorship-pairs ────────────────────────────────────────────────────

/// An accepted pair seen from the caller's side, with the counterpart's
/// profile flattened in. `relationship_type` is the caller's role.
#[derive(Serialize)]
pub struct PairResponse {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub status: String,
    #[serde(serialize_with = "mentorlink_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub relationship_type: String,
}

impl From<PairView> for PairResponse {
    fn from(pair: PairView) -> Self {
        Self {
            id: pair.request.id,
            mentor_id: pair.request.mentor_id,
            mentee_id: pair.request.mentee_id,
            status: pair.request.status.as_str().to_owned(),
            created_at: pair.request.created_at,
            name: pair.counterpart.name,
            role: pair.counterpart.role.as_str().to_owned(),
            bio: pair.counterpart.bio,
            skills: pair.counterpart.skills,
            interests: pair.counterpart.interests,
            relationship_type: pair.relationship_type.as_str().to_owned(),
        }
    }
}

pub async fn get_pairs(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<PairResponse>>, ServiceError> {
    let usecase = ActivePairsUseCase {
        requests: state.request_repo(),
        profiles: state.profile_repo(),
    };
    let pairs = usecase.execute(identity.user_id).await?;
    Ok(Json(pairs.into_iter().map(Into::into).collect()))
}
