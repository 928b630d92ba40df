use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use skyfare_domain::booking::{Booking, BookingUpdate};

use crate::{error::ApiError, middleware::auth::AuthUser, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings))
        .route(
            "/bookings/{id}",
            get(get_booking).patch(update_booking).delete(cancel_booking),
        )
}

async fn list_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = state.lifecycle.list_bookings(user.id).await?;
    Ok(Json(bookings))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Booking>, ApiError> {
    let booking = state.lifecycle.get_booking(id, user.id).await?;
    Ok(Json(booking))
}

async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(user): Extension<AuthUser>,
    Json(update): Json<BookingUpdate>,
) -> Result<Json<Booking>, ApiError> {
    let booking = state.lifecycle.update_booking(id, user.id, &update).await?;
    Ok(Json(booking))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.lifecycle.cancel_booking(id, user.id).await?;
    Ok(Json(json!({ "status": "cancelled" })))
}
