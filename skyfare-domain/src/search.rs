use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::inventory::CabinClass;

/// Flight search criteria. The requested date selects a 24-hour departure
/// window; `return_date` is only validated, round trips are two searches.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchRequest {
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub passengers: u32,
    pub class: CabinClass,
}

/// Hotel search criteria. Guest count is carried for the caller but does
/// not participate in matching.
#[derive(Debug, Clone, Deserialize)]
pub struct HotelSearchRequest {
    pub city: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: u32,
    pub max_price: Option<f64>,
    pub min_rating: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlightBookingRequest {
    pub num_guests: u32,
    #[serde(default)]
    pub special_requests: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelBookingRequest {
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub num_guests: u32,
    #[serde(default)]
    pub special_requests: String,
}
