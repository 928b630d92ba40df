use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use skyfare_domain::booking::{nights_between, Booking};
use skyfare_domain::inventory::{Flight, Hotel};
use skyfare_domain::search::{
    FlightBookingRequest, FlightSearchRequest, HotelBookingRequest, HotelSearchRequest,
};

use crate::error::BookingError;
use crate::locks::ItemLockMap;
use crate::repository::{BookingStore, FlightFilter, FlightStore, HotelFilter, HotelStore};

/// Drives a reservation request from validation to a persisted booking.
///
/// The availability check, the ledger write, and the inventory decrement
/// for one item run under that item's lock: at most one booking can
/// observe and consume a given unit of capacity.
#[derive(Clone)]
pub struct BookingWorkflow {
    flights: Arc<dyn FlightStore>,
    hotels: Arc<dyn HotelStore>,
    bookings: Arc<dyn BookingStore>,
    locks: Arc<ItemLockMap>,
}

impl BookingWorkflow {
    pub fn new(
        flights: Arc<dyn FlightStore>,
        hotels: Arc<dyn HotelStore>,
        bookings: Arc<dyn BookingStore>,
    ) -> Self {
        Self {
            flights,
            hotels,
            bookings,
            locks: Arc::new(ItemLockMap::new()),
        }
    }

    pub async fn search_flights(
        &self,
        req: &FlightSearchRequest,
    ) -> Result<Vec<Flight>, BookingError> {
        if req.departure_date < Utc::now() {
            return Err(BookingError::DepartureInPast);
        }
        if let Some(return_date) = req.return_date {
            if return_date < req.departure_date {
                return Err(BookingError::ReturnBeforeDeparture);
            }
        }

        let filter = FlightFilter {
            departure_city: req.departure_city.clone(),
            arrival_city: req.arrival_city.clone(),
            window_start: req.departure_date,
            // Clamped at the calendar's edge for departures near it.
            window_end: req
                .departure_date
                .checked_add_signed(Duration::hours(24))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            min_seats: req.passengers,
            class: req.class,
        };
        Ok(self.flights.search(&filter).await?)
    }

    pub async fn search_hotels(
        &self,
        req: &HotelSearchRequest,
    ) -> Result<Vec<Hotel>, BookingError> {
        if req.check_in < Utc::now() {
            return Err(BookingError::CheckInInPast);
        }
        if req.check_out < req.check_in {
            return Err(BookingError::CheckOutBeforeCheckIn);
        }

        let filter = HotelFilter {
            city: req.city.clone(),
            max_price: req.max_price,
            min_rating: req.min_rating,
        };
        Ok(self.hotels.search(&filter).await?)
    }

    pub async fn get_flight(&self, id: Uuid) -> Result<Flight, BookingError> {
        self.flights
            .find(id)
            .await?
            .ok_or(BookingError::FlightNotFound(id))
    }

    pub async fn list_flights(&self, origin: Option<&str>) -> Result<Vec<Flight>, BookingError> {
        Ok(self.flights.list(origin).await?)
    }

    pub async fn get_hotel(&self, id: Uuid) -> Result<Hotel, BookingError> {
        self.hotels
            .find(id)
            .await?
            .ok_or(BookingError::HotelNotFound(id))
    }

    pub async fn book_flight(
        &self,
        user_id: Uuid,
        flight_id: Uuid,
        req: &FlightBookingRequest,
    ) -> Result<Booking, BookingError> {
        if req.num_guests < 1 {
            return Err(BookingError::InvalidGuests(req.num_guests));
        }

        let _guard = self.locks.acquire(flight_id).await;

        let mut flight = self
            .flights
            .find(flight_id)
            .await?
            .ok_or(BookingError::FlightNotFound(flight_id))?;

        flight.reserve_seats(req.num_guests).map_err(|e| {
            debug!(
                flight_id = %flight_id,
                requested = e.requested,
                available = e.available,
                "flight booking rejected"
            );
            BookingError::InsufficientCapacity {
                requested: e.requested,
                available: e.available,
            }
        })?;

        let booking =
            Booking::for_flight(user_id, &flight, req.num_guests, req.special_requests.clone());

        // Ledger row first, then the decremented counter.
        self.bookings.insert(booking.clone()).await?;
        self.flights.update(&flight).await?;

        info!(
            booking_id = %booking.id,
            flight_id = %flight_id,
            guests = req.num_guests,
            "flight booking confirmed"
        );
        Ok(booking)
    }

    pub async fn book_hotel(
        &self,
        user_id: Uuid,
        hotel_id: Uuid,
        req: &HotelBookingRequest,
    ) -> Result<Booking, BookingError> {
        if req.num_guests < 1 {
            return Err(BookingError::InvalidGuests(req.num_guests));
        }

        let _guard = self.locks.acquire(hotel_id).await;

        let mut hotel = self
            .hotels
            .find(hotel_id)
            .await?
            .ok_or(BookingError::HotelNotFound(hotel_id))?;

        // Room availability is checked before the stay dates.
        hotel.reserve_room().map_err(|e| {
            debug!(hotel_id = %hotel_id, "hotel booking rejected, no rooms");
            BookingError::InsufficientCapacity {
                requested: e.requested,
                available: e.available,
            }
        })?;

        let nights = nights_between(req.check_in_date, req.check_out_date);
        if nights < 1 {
            return Err(BookingError::InvalidStayDuration { nights });
        }

        let booking = Booking::for_hotel(
            user_id,
            &hotel,
            req.check_in_date,
            req.check_out_date,
            nights,
            req.num_guests,
            req.special_requests.clone(),
        );

        self.bookings.insert(booking.clone()).await?;
        self.hotels.update(&hotel).await?;

        info!(
            booking_id = %booking.id,
            hotel_id = %hotel_id,
            nights,
            "hotel booking confirmed"
        );
        Ok(booking)
    }
}
