use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cabin class, matched exactly during flight search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    Economy,
    Business,
    First,
}

/// A bookable flight with a finite seat count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: Uuid,
    pub flight_number: String,
    pub airline: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub available_seats: i32,
    pub price: f64,
    pub class: CabinClass,
}

/// A bookable hotel with a finite room count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub rating: f32,
    #[serde(rename = "price_per_night")]
    pub price: f64,
    pub available_rooms: i32,
}

#[derive(Debug, thiserror::Error)]
#[error("insufficient capacity: requested {requested}, available {available}")]
pub struct CapacityError {
    pub requested: u32,
    pub available: i32,
}

impl Flight {
    /// Consume `count` seats, or fail without touching the counter.
    pub fn reserve_seats(&mut self, count: u32) -> Result<(), CapacityError> {
        // Compared in i64: a count above i32::MAX must fail, not wrap.
        if i64::from(self.available_seats) < i64::from(count) {
            return Err(CapacityError {
                requested: count,
                available: self.available_seats,
            });
        }
        // A count that passed the check fits in i32.
        self.available_seats -= count as i32;
        Ok(())
    }
}

impl Hotel {
    /// Consume one room. A booking takes a single room regardless of the
    /// size of the party.
    pub fn reserve_room(&mut self) -> Result<(), CapacityError> {
        if self.available_rooms < 1 {
            return Err(CapacityError {
                requested: 1,
                available: self.available_rooms,
            });
        }
        self.available_rooms -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn flight(seats: i32) -> Flight {
        Flight {
            id: Uuid::new_v4(),
            flight_number: "SF100".to_string(),
            airline: "Skyfare Air".to_string(),
            departure_city: "Amsterdam".to_string(),
            arrival_city: "Lisbon".to_string(),
            departure_time: Utc::now() + Duration::days(7),
            arrival_time: Utc::now() + Duration::days(7) + Duration::hours(3),
            available_seats: seats,
            price: 100.0,
            class: CabinClass::Economy,
        }
    }

    fn hotel(rooms: i32) -> Hotel {
        Hotel {
            id: Uuid::new_v4(),
            name: "Harbor View".to_string(),
            address: "1 Quay Street".to_string(),
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            rating: 4.2,
            price: 80.0,
            available_rooms: rooms,
        }
    }

    #[test]
    fn reserve_seats_decrements() {
        let mut f = flight(5);
        f.reserve_seats(3).unwrap();
        assert_eq!(f.available_seats, 2);
    }

    #[test]
    fn reserve_seats_down_to_zero() {
        let mut f = flight(2);
        f.reserve_seats(2).unwrap();
        assert_eq!(f.available_seats, 0);
    }

    #[test]
    fn reserve_seats_rejects_oversell() {
        let mut f = flight(1);
        let err = f.reserve_seats(2).unwrap_err();
        assert_eq!(err.requested, 2);
        assert_eq!(err.available, 1);
        // counter untouched on failure
        assert_eq!(f.available_seats, 1);
    }

    #[test]
    fn reserve_seats_rejects_counts_beyond_i32() {
        let mut f = flight(5);
        let err = f.reserve_seats(u32::MAX).unwrap_err();
        assert_eq!(err.requested, u32::MAX);
        assert_eq!(err.available, 5);
        assert_eq!(f.available_seats, 5);
    }

    #[test]
    fn reserve_room_takes_exactly_one() {
        let mut h = hotel(3);
        h.reserve_room().unwrap();
        assert_eq!(h.available_rooms, 2);
    }

    #[test]
    fn reserve_room_rejects_full_hotel() {
        let mut h = hotel(0);
        assert!(h.reserve_room().is_err());
        assert_eq!(h.available_rooms, 0);
    }
}
