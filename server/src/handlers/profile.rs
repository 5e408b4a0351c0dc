use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mentorlink_auth::extract::Identity;

use crate::domain::types::Profile;
use crate::error::ServiceError;
use crate::state::AppState;
use crate::usecase::profile::{
    GetProfileUseCase, ListCounterpartsUseCase, UpsertProfileInput, UpsertProfileUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub name: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            role: profile.role.as_str().to_owned(),
            name: profile.name,
            bio: profile.bio,
            skills: profile.skills,
            interests: profile.interests,
        }
    }
}

/// Profile joined with the owning account's email.
#[derive(Serialize)]
pub struct ProfileWithEmailResponse {
    #[serde(flatten)]
    pub profile: ProfileResponse,
    pub email: String,
}

// ── POST /profiles ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpsertProfileRequest {
    pub role: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

pub async fn upsert_profile(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpsertProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), ServiceError> {
    let usecase = UpsertProfileUseCase {
        repo: state.profile_repo(),
    };
    let out = usecase
        .execute(
            identity.user_id,
            UpsertProfileInput {
                role: body.role,
                name: body.name,
                bio: body.bio,
                skills: body.skills,
                interests: body.interests,
            },
        )
        .await?;
    let status = if out.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(out.profile.into())))
}

// ── GET /profile ─────────────────────────────────────────────────────────────

pub async fn get_profile(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<ProfileWithEmailResponse>, ServiceError> {
    let usecase = GetProfileUseCase {
        profiles: state.profile_repo(),
        users: state.user_repo(),
    };
    let out = usecase.execute(identity.user_id).await?;
    Ok(Json(ProfileWithEmailResponse {
        profile: out.profile.into(),
        email: out.email,
    }))
}

// ── GET /profiles ────────────────────────────────────────────────────────────

pub async fn list_profiles(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileWithEmailResponse>>, ServiceError> {
    let usecase = ListCounterpartsUseCase {
        profiles: state.profile_repo(),
        users: state.user_repo(),
    };
    let results = usecase.execute(identity.user_id).await?;
    let items = results
        .into_iter()
        .map(|r| ProfileWithEmailResponse {
            profile: r.profile.into(),
            email: r.email,
        })
        .collect();
    Ok(Json(items))
}
