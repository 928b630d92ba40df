use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use skyfare_core::error::StoreError;
use skyfare_core::repository::{BookingStore, FlightFilter, FlightStore, HotelFilter, HotelStore};
use skyfare_domain::booking::Booking;
use skyfare_domain::inventory::{Flight, Hotel};

/// Rows a [`MemoryTable`] can hold.
pub trait Keyed: Clone + Send + Sync + 'static {
    fn key(&self) -> Uuid;
}

impl Keyed for Flight {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Hotel {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Booking {
    fn key(&self) -> Uuid {
        self.id
    }
}

/// Uuid-keyed table behind an async RwLock, one per entity. The entity
/// stores below are thin wrappers adding their query methods on top.
pub struct MemoryTable<T: Keyed> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T: Keyed> MemoryTable<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, row: T) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let id = row.key();
        if rows.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        rows.insert(id, row);
        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    /// Replace an existing row. The row must already be present.
    pub async fn put(&self, row: &T) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let id = row.key();
        match rows.get_mut(&id) {
            Some(slot) => {
                *slot = row.clone();
                Ok(())
            }
            None => Err(StoreError::MissingId(id)),
        }
    }

    pub async fn scan<F>(&self, keep: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .await
            .values()
            .filter(|row| keep(row))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl<T: Keyed> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct MemoryFlightStore {
    table: MemoryTable<Flight>,
}

impl MemoryFlightStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlightStore for MemoryFlightStore {
    async fn insert(&self, flight: Flight) -> Result<(), StoreError> {
        self.table.insert(flight).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<Flight>, StoreError> {
        Ok(self.table.get(id).await)
    }

    async fn update(&self, flight: &Flight) -> Result<(), StoreError> {
        self.table.put(flight).await
    }

    async fn search(&self, filter: &FlightFilter) -> Result<Vec<Flight>, StoreError> {
        Ok(self
            .table
            .scan(|f| {
                f.departure_city == filter.departure_city
                    && f.arrival_city == filter.arrival_city
                    && f.class == filter.class
                    && f.departure_time >= filter.window_start
                    && f.departure_time <= filter.window_end
                    && i64::from(f.available_seats) >= i64::from(filter.min_seats)
            })
            .await)
    }

    async fn list(&self, origin: Option<&str>) -> Result<Vec<Flight>, StoreError> {
        Ok(self
            .table
            .scan(|f| origin.map_or(true, |o| f.departure_city == o))
            .await)
    }
}

#[derive(Default)]
pub struct MemoryHotelStore {
    table: MemoryTable<Hotel>,
}

impl MemoryHotelStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HotelStore for MemoryHotelStore {
    async fn insert(&self, hotel: Hotel) -> Result<(), StoreError> {
        self.table.insert(hotel).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<Hotel>, StoreError> {
        Ok(self.table.get(id).await)
    }

    async fn update(&self, hotel: &Hotel) -> Result<(), StoreError> {
        self.table.put(hotel).await
    }

    async fn search(&self, filter: &HotelFilter) -> Result<Vec<Hotel>, StoreError> {
        Ok(self
            .table
            .scan(|h| {
                h.city == filter.city
                    && h.available_rooms > 0
                    && filter.max_price.map_or(true, |cap| h.price <= cap)
                    && filter.min_rating.map_or(true, |floor| h.rating >= floor)
            })
            .await)
    }
}

#[derive(Default)]
pub struct MemoryBookingStore {
    table: MemoryTable<Booking>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.table.len().await
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn insert(&self, booking: Booking) -> Result<(), StoreError> {
        self.table.insert(booking).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<Booking>, StoreError> {
        Ok(self.table.get(id).await)
    }

    async fn update(&self, booking: &Booking) -> Result<(), StoreError> {
        self.table.put(booking).await
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>, StoreError> {
        Ok(self.table.scan(|b| b.user_id == user_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use skyfare_domain::inventory::CabinClass;

    fn flight(departure_city: &str, seats: i32, departs_in: Duration) -> Flight {
        Flight {
            id: Uuid::new_v4(),
            flight_number: "SF300".to_string(),
            airline: "Skyfare Air".to_string(),
            departure_city: departure_city.to_string(),
            arrival_city: "Oslo".to_string(),
            departure_time: Utc::now() + departs_in,
            arrival_time: Utc::now() + departs_in + Duration::hours(2),
            available_seats: seats,
            price: 120.0,
            class: CabinClass::Economy,
        }
    }

    fn hotel(city: &str, rooms: i32, price: f64, rating: f32) -> Hotel {
        Hotel {
            id: Uuid::new_v4(),
            name: "Test Hotel".to_string(),
            address: "1 Main Street".to_string(),
            city: city.to_string(),
            country: "Norway".to_string(),
            rating,
            price,
            available_rooms: rooms,
        }
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let store = MemoryFlightStore::new();
        let f = flight("Oslo", 10, Duration::days(3));
        store.insert(f.clone()).await.unwrap();

        let err = store.insert(f).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
    }

    #[tokio::test]
    async fn put_requires_existing_row() {
        let store = MemoryFlightStore::new();
        let f = flight("Oslo", 10, Duration::days(3));
        let err = store.update(&f).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingId(_)));
    }

    #[tokio::test]
    async fn flight_search_applies_window_and_seats() {
        let store = MemoryFlightStore::new();
        let tomorrow = Utc::now() + Duration::days(1);

        let in_window = flight("Bergen", 4, Duration::days(1) + Duration::hours(6));
        let out_of_window = flight("Bergen", 4, Duration::days(3));
        let too_few_seats = flight("Bergen", 1, Duration::days(1) + Duration::hours(6));
        store.insert(in_window.clone()).await.unwrap();
        store.insert(out_of_window).await.unwrap();
        store.insert(too_few_seats).await.unwrap();

        let filter = FlightFilter {
            departure_city: "Bergen".to_string(),
            arrival_city: "Oslo".to_string(),
            window_start: tomorrow,
            window_end: tomorrow + Duration::hours(24),
            min_seats: 2,
            class: CabinClass::Economy,
        };
        let hits = store.search(&filter).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, in_window.id);
    }

    #[tokio::test]
    async fn seat_requirements_beyond_i32_match_nothing() {
        let store = MemoryFlightStore::new();
        let tomorrow = Utc::now() + Duration::days(1);
        let f = flight("Bergen", 300, Duration::days(1) + Duration::hours(6));
        store.insert(f).await.unwrap();

        let filter = FlightFilter {
            departure_city: "Bergen".to_string(),
            arrival_city: "Oslo".to_string(),
            window_start: tomorrow,
            window_end: tomorrow + Duration::hours(24),
            min_seats: u32::MAX,
            class: CabinClass::Economy,
        };
        assert!(store.search(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_filters_by_origin() {
        let store = MemoryFlightStore::new();
        store.insert(flight("Bergen", 4, Duration::days(1))).await.unwrap();
        store.insert(flight("Tromso", 4, Duration::days(1))).await.unwrap();

        assert_eq!(store.list(None).await.unwrap().len(), 2);
        let bergen = store.list(Some("Bergen")).await.unwrap();
        assert_eq!(bergen.len(), 1);
        assert_eq!(bergen[0].departure_city, "Bergen");
    }

    #[tokio::test]
    async fn hotel_search_hides_full_hotels() {
        let store = MemoryHotelStore::new();
        store.insert(hotel("Oslo", 2, 90.0, 4.0)).await.unwrap();
        store.insert(hotel("Oslo", 0, 90.0, 4.8)).await.unwrap();

        let filter = HotelFilter {
            city: "Oslo".to_string(),
            max_price: None,
            min_rating: None,
        };
        let hits = store.search(&filter).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].available_rooms > 0);
    }

    #[tokio::test]
    async fn hotel_search_applies_price_and_rating_bounds() {
        let store = MemoryHotelStore::new();
        store.insert(hotel("Oslo", 2, 90.0, 4.0)).await.unwrap();
        store.insert(hotel("Oslo", 2, 150.0, 4.9)).await.unwrap();
        store.insert(hotel("Oslo", 2, 70.0, 3.1)).await.unwrap();

        let filter = HotelFilter {
            city: "Oslo".to_string(),
            max_price: Some(100.0),
            min_rating: Some(3.5),
        };
        let hits = store.search(&filter).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].price, 90.0);
    }
}
