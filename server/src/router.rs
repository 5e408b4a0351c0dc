use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use mentorlink_core::health::{healthz, readyz};
use mentorlink_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{login, register},
    notification::{get_notifications, read_notification},
    pair::get_pairs,
    profile::{get_profile, list_profiles, upsert_profile},
    request::{accept_request, create_request, decline_request, end_request},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/register", post(register))
        .route("/login", post(login))
        // Profiles
        .route("/profiles", post(upsert_profile))
        .route("/profile", get(get_profile))
        .route("/profiles", get(list_profiles))
        // Mentorship requests
        .route("/mentorship-requests", post(create_request))
        .route("/mentorship-requests/{id}/accept", put(accept_request))
        .route("/mentorship-requests/{id}/decline", put(decline_request))
        .route("/mentorship-requests/{id}/end", put(end_request))
        // Pairs
        .route("/mentorship-pairs", get(get_pairs))
        // Notifications
        .route("/notifications", get(get_notifications))
        .route("/notifications/{id}/read", put(read_notification))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
