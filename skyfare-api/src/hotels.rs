use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use skyfare_domain::booking::Booking;
use skyfare_domain::inventory::Hotel;
use skyfare_domain::search::{HotelBookingRequest, HotelSearchRequest};

use crate::{error::ApiError, middleware::auth::AuthUser, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hotels/search", post(search_hotels))
        .route("/hotels/{id}", get(get_hotel))
        .route("/hotels/{id}/book", post(book_hotel))
}

async fn search_hotels(
    State(state): State<AppState>,
    Json(req): Json<HotelSearchRequest>,
) -> Result<Json<Vec<Hotel>>, ApiError> {
    let hotels = state.workflow.search_hotels(&req).await?;
    Ok(Json(hotels))
}

async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Hotel>, ApiError> {
    let hotel = state.workflow.get_hotel(id).await?;
    Ok(Json(hotel))
}

async fn book_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<HotelBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let booking = state.workflow.book_hotel(user.id, id, &req).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}
