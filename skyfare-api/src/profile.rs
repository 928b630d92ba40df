use axum::{routing::get, Extension, Json, Router};
use serde::Serialize;
use uuid::Uuid;

use crate::{middleware::auth::AuthUser, state::AppState};

#[derive(Debug, Serialize)]
struct ProfileResponse {
    id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/profile", get(profile))
}

async fn profile(Extension(user): Extension<AuthUser>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        id: user.id,
        email: user.email,
    })
}
