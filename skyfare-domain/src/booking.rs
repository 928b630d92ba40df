use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::inventory::{Flight, Hotel};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Flight,
    Hotel,
    Package,
}

/// A reservation against one inventory item, owned by one user.
///
/// Bookings are never deleted; cancellation is a status transition.
/// `booking_date` and `total_price` are fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub booking_type: BookingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<Uuid>,
    #[serde(rename = "vacation_package_id", skip_serializing_if = "Option::is_none")]
    pub package_id: Option<Uuid>,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
    pub total_price: f64,
    pub payment_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<DateTime<Utc>>,
    pub num_guests: u32,
    pub special_requests: String,
}

impl Booking {
    /// A confirmed flight booking priced at `num_guests` seats.
    pub fn for_flight(
        user_id: Uuid,
        flight: &Flight,
        num_guests: u32,
        special_requests: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            booking_type: BookingType::Flight,
            flight_id: Some(flight.id),
            hotel_id: None,
            package_id: None,
            status: BookingStatus::Confirmed,
            booking_date: Utc::now(),
            total_price: num_guests as f64 * flight.price,
            payment_status: "pending".to_string(),
            check_in_date: None,
            check_out_date: None,
            num_guests,
            special_requests,
        }
    }

    /// A confirmed hotel booking priced per night for one room.
    pub fn for_hotel(
        user_id: Uuid,
        hotel: &Hotel,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
        nights: i64,
        num_guests: u32,
        special_requests: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            booking_type: BookingType::Hotel,
            flight_id: None,
            hotel_id: Some(hotel.id),
            package_id: None,
            status: BookingStatus::Confirmed,
            booking_date: Utc::now(),
            total_price: nights as f64 * hotel.price,
            payment_status: "pending".to_string(),
            check_in_date: Some(check_in),
            check_out_date: Some(check_out),
            num_guests,
            special_requests,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    /// Apply the whitelisted fields of a partial update.
    pub fn apply(&mut self, update: &BookingUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(payment_status) = &update.payment_status {
            self.payment_status = payment_status.clone();
        }
        if let Some(special_requests) = &update.special_requests {
            self.special_requests = special_requests.clone();
        }
    }
}

/// Caller-supplied partial update. Only these fields may change after
/// creation; anything else in the request body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingUpdate {
    pub status: Option<BookingStatus>,
    pub payment_status: Option<String>,
    pub special_requests: Option<String>,
}

/// Whole nights between check-in and check-out: the hour difference
/// divided by 24, truncated. Same-day or inverted stays yield < 1.
pub fn nights_between(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    (check_out - check_in).num_hours() / 24
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::CabinClass;
    use chrono::Duration;

    fn flight(price: f64) -> Flight {
        Flight {
            id: Uuid::new_v4(),
            flight_number: "SF200".to_string(),
            airline: "Skyfare Air".to_string(),
            departure_city: "Berlin".to_string(),
            arrival_city: "Madrid".to_string(),
            departure_time: Utc::now() + Duration::days(10),
            arrival_time: Utc::now() + Duration::days(10) + Duration::hours(3),
            available_seats: 50,
            price,
            class: CabinClass::Economy,
        }
    }

    fn hotel(price: f64) -> Hotel {
        Hotel {
            id: Uuid::new_v4(),
            name: "Casa Blanca".to_string(),
            address: "12 Gran Via".to_string(),
            city: "Madrid".to_string(),
            country: "Spain".to_string(),
            rating: 4.0,
            price,
            available_rooms: 10,
        }
    }

    #[test]
    fn flight_booking_prices_per_guest() {
        let f = flight(100.0);
        let booking = Booking::for_flight(Uuid::new_v4(), &f, 2, String::new());
        assert_eq!(booking.total_price, 200.0);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.payment_status, "pending");
        assert_eq!(booking.booking_type, BookingType::Flight);
        assert_eq!(booking.flight_id, Some(f.id));
        assert!(booking.check_in_date.is_none());
    }

    #[test]
    fn hotel_booking_prices_per_night() {
        let h = hotel(80.0);
        let check_in = Utc::now() + Duration::days(30);
        let check_out = check_in + Duration::days(3);
        let nights = nights_between(check_in, check_out);
        let booking = Booking::for_hotel(Uuid::new_v4(), &h, check_in, check_out, nights, 2, String::new());
        assert_eq!(booking.total_price, 240.0);
        assert_eq!(booking.hotel_id, Some(h.id));
        assert_eq!(booking.check_in_date, Some(check_in));
    }

    #[test]
    fn nights_truncate_partial_days() {
        let start = Utc::now();
        assert_eq!(nights_between(start, start + Duration::hours(69)), 2);
        assert_eq!(nights_between(start, start + Duration::hours(24)), 1);
        assert_eq!(nights_between(start, start + Duration::hours(23)), 0);
        assert_eq!(nights_between(start, start), 0);
        assert!(nights_between(start, start - Duration::days(2)) < 1);
    }

    #[test]
    fn apply_touches_only_whitelisted_fields() {
        let f = flight(100.0);
        let mut booking = Booking::for_flight(Uuid::new_v4(), &f, 1, "window seat".to_string());
        let original_price = booking.total_price;
        let original_date = booking.booking_date;

        booking.apply(&BookingUpdate {
            status: Some(BookingStatus::Pending),
            payment_status: Some("paid".to_string()),
            special_requests: None,
        });

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.payment_status, "paid");
        assert_eq!(booking.special_requests, "window seat");
        assert_eq!(booking.total_price, original_price);
        assert_eq!(booking.booking_date, original_date);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
    }

    #[test]
    fn package_reference_serializes_as_vacation_package_id() {
        let f = flight(100.0);
        let mut booking = Booking::for_flight(Uuid::new_v4(), &f, 1, String::new());
        booking.package_id = Some(Uuid::new_v4());

        let json = serde_json::to_value(&booking).unwrap();
        assert!(json.get("vacation_package_id").is_some());
        assert!(json.get("package_id").is_none());
    }
}
