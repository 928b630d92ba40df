use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use skyfare_domain::booking::Booking;
use skyfare_domain::inventory::Flight;
use skyfare_domain::search::{FlightBookingRequest, FlightSearchRequest};

use crate::{error::ApiError, middleware::auth::AuthUser, state::AppState};

#[derive(Debug, Deserialize)]
struct ListFlightsQuery {
    origin: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/flights", get(list_flights))
        .route("/flights/search", post(search_flights))
        .route("/flights/{id}", get(get_flight))
        .route("/flights/{id}/book", post(book_flight))
}

async fn list_flights(
    State(state): State<AppState>,
    Query(query): Query<ListFlightsQuery>,
) -> Result<Json<Vec<Flight>>, ApiError> {
    let flights = state.workflow.list_flights(query.origin.as_deref()).await?;
    Ok(Json(flights))
}

async fn search_flights(
    State(state): State<AppState>,
    Json(req): Json<FlightSearchRequest>,
) -> Result<Json<Vec<Flight>>, ApiError> {
    let flights = state.workflow.search_flights(&req).await?;
    Ok(Json(flights))
}

async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Flight>, ApiError> {
    let flight = state.workflow.get_flight(id).await?;
    Ok(Json(flight))
}

async fn book_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<FlightBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let booking = state.workflow.book_flight(user.id, id, &req).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}
