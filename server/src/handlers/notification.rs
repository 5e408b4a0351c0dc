use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use uuid::Uuid;

use mentorlink_auth::extract::Identity;

use crate::domain::types::{NotificationView, RequestStatus};
use crate::error::ServiceError;
use crate::state::AppState;
use crate::usecase::discovery::LiveNotificationsUseCase;
use crate::usecase::notification::DismissNotificationUseCase;

// ── Response types ───────────────────────────────────────────────────────────

/// A live notification with the counterpart's profile context flattened in.
/// Missing joins render as empty strings; a missing request status defaults
/// to `pending`.
#[derive(Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub request_id: Option<Uuid>,
    pub read: bool,
    #[serde(serialize_with = "mentorlink_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub request_status: String,
}

impl From<NotificationView> for NotificationResponse {
    fn from(view: NotificationView) -> Self {
        let (name, role, bio, skills, interests) = match view.counterpart {
            Some(profile) => (
                profile.name,
                profile.role.as_str().to_owned(),
                profile.bio,
                profile.skills,
                profile.interests,
            ),
            None => Default::default(),
        };
        Self {
            id: view.notification.id,
            message: view.notification.message,
            kind: view.notification.kind.as_str().to_owned(),
            request_id: view.notification.request_id,
            read: view.notification.read,
            created_at: view.notification.created_at,
            name,
            role,
            bio,
            skills,
            interests,
            request_status: view
                .request_status
                .unwrap_or(RequestStatus::Pending)
                .as_str()
                .to_owned(),
        }
    }
}

// ── GET /notifications ───────────────────────────────────────────────────────

pub async fn get_notifications(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<NotificationResponse>>, ServiceError> {
    let usecase = LiveNotificationsUseCase {
        notifications: state.notification_repo(),
        requests: state.request_repo(),
        profiles: state.profile_repo(),
    };
    let views = usecase.execute(identity.user_id).await?;
    Ok(Json(views.into_iter().map(Into::into).collect()))
}

// ── PUT /notifications/{id}/read ─────────────────────────────────────────────

pub async fn read_notification(
    identity: Identity,
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
) -> Result<StatusCode, ServiceError> {
    let usecase = DismissNotificationUseCase {
        repo: state.notification_repo(),
    };
    usecase.execute(notification_id, identity.user_id).await?;
    Ok(StatusCode::OK)
}
