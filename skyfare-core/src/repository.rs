use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use skyfare_domain::booking::Booking;
use skyfare_domain::inventory::{CabinClass, Flight, Hotel};

use crate::error::StoreError;

/// Search filter resolved by the workflow from a validated request. The
/// departure window is closed on both ends.
#[derive(Debug, Clone)]
pub struct FlightFilter {
    pub departure_city: String,
    pub arrival_city: String,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub min_seats: u32,
    pub class: CabinClass,
}

#[derive(Debug, Clone)]
pub struct HotelFilter {
    pub city: String,
    pub max_price: Option<f64>,
    pub min_rating: Option<f32>,
}

/// Flight persistence. Implementations own durability and query mechanics;
/// concurrency control for the booking unit lives in the workflow.
#[async_trait]
pub trait FlightStore: Send + Sync {
    async fn insert(&self, flight: Flight) -> Result<(), StoreError>;
    async fn find(&self, id: Uuid) -> Result<Option<Flight>, StoreError>;
    async fn update(&self, flight: &Flight) -> Result<(), StoreError>;
    async fn search(&self, filter: &FlightFilter) -> Result<Vec<Flight>, StoreError>;
    async fn list(&self, origin: Option<&str>) -> Result<Vec<Flight>, StoreError>;
}

#[async_trait]
pub trait HotelStore: Send + Sync {
    async fn insert(&self, hotel: Hotel) -> Result<(), StoreError>;
    async fn find(&self, id: Uuid) -> Result<Option<Hotel>, StoreError>;
    async fn update(&self, hotel: &Hotel) -> Result<(), StoreError>;
    async fn search(&self, filter: &HotelFilter) -> Result<Vec<Hotel>, StoreError>;
}

/// The booking ledger. Rows are only ever inserted and updated, never
/// removed.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn insert(&self, booking: Booking) -> Result<(), StoreError>;
    async fn find(&self, id: Uuid) -> Result<Option<Booking>, StoreError>;
    async fn update(&self, booking: &Booking) -> Result<(), StoreError>;
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>, StoreError>;
}
