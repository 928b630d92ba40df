use axum::{extract::State, routing::post, Json, Router};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use crate::{error::ApiError, middleware::auth::Claims, state::AppState};

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
    user_id: Uuid,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/guest", post(login_guest))
}

/// Mint a short-lived guest identity. Every guest gets a fresh user id
/// and the token carries it as the subject.
async fn login_guest(State(state): State<AppState>) -> Result<Json<AuthResponse>, ApiError> {
    let user_id = Uuid::new_v4();
    let claims = Claims {
        sub: user_id.to_string(),
        email: None,
        exp: (Utc::now() + Duration::seconds(state.auth.expiration as i64)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )
    .map_err(|e| ApiError::internal(format!("token encoding failed: {}", e)))?;

    Ok(Json(AuthResponse { token, user_id }))
}
