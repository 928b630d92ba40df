use chrono::{Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use skyfare_core::error::StoreError;
use skyfare_core::repository::{FlightStore, HotelStore};
use skyfare_domain::inventory::{CabinClass, Flight, Hotel};

/// Demo inventory for local runs. Departures sit a few days out so a
/// search for the near future returns results.
pub fn demo_flights() -> Vec<Flight> {
    let base = Utc::now();
    vec![
        Flight {
            id: Uuid::new_v4(),
            flight_number: "SF101".to_string(),
            airline: "Skyfare Air".to_string(),
            departure_city: "Amsterdam".to_string(),
            arrival_city: "Lisbon".to_string(),
            departure_time: base + Duration::days(2) + Duration::hours(8),
            arrival_time: base + Duration::days(2) + Duration::hours(11),
            available_seats: 120,
            price: 89.0,
            class: CabinClass::Economy,
        },
        Flight {
            id: Uuid::new_v4(),
            flight_number: "SF102".to_string(),
            airline: "Skyfare Air".to_string(),
            departure_city: "Amsterdam".to_string(),
            arrival_city: "Lisbon".to_string(),
            departure_time: base + Duration::days(2) + Duration::hours(17),
            arrival_time: base + Duration::days(2) + Duration::hours(20),
            available_seats: 8,
            price: 219.0,
            class: CabinClass::Business,
        },
        Flight {
            id: Uuid::new_v4(),
            flight_number: "SF210".to_string(),
            airline: "Nordlys Airways".to_string(),
            departure_city: "Oslo".to_string(),
            arrival_city: "Reykjavik".to_string(),
            departure_time: base + Duration::days(3) + Duration::hours(9),
            arrival_time: base + Duration::days(3) + Duration::hours(12),
            available_seats: 60,
            price: 140.0,
            class: CabinClass::Economy,
        },
        Flight {
            id: Uuid::new_v4(),
            flight_number: "SF550".to_string(),
            airline: "Skyfare Air".to_string(),
            departure_city: "Lisbon".to_string(),
            arrival_city: "Amsterdam".to_string(),
            departure_time: base + Duration::days(6) + Duration::hours(7),
            arrival_time: base + Duration::days(6) + Duration::hours(10),
            available_seats: 120,
            price: 95.0,
            class: CabinClass::Economy,
        },
    ]
}

pub fn demo_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: Uuid::new_v4(),
            name: "Harbor View".to_string(),
            address: "1 Quay Street".to_string(),
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            rating: 4.2,
            price: 110.0,
            available_rooms: 18,
        },
        Hotel {
            id: Uuid::new_v4(),
            name: "Pensao Central".to_string(),
            address: "44 Rua Augusta".to_string(),
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            rating: 3.6,
            price: 62.0,
            available_rooms: 7,
        },
        Hotel {
            id: Uuid::new_v4(),
            name: "Fjord Lodge".to_string(),
            address: "9 Bryggen".to_string(),
            city: "Reykjavik".to_string(),
            country: "Iceland".to_string(),
            rating: 4.7,
            price: 180.0,
            available_rooms: 4,
        },
    ]
}

/// Load the demo inventory into the given stores.
pub async fn load(flights: &dyn FlightStore, hotels: &dyn HotelStore) -> Result<(), StoreError> {
    let demo_f = demo_flights();
    let demo_h = demo_hotels();
    debug!(flights = demo_f.len(), hotels = demo_h.len(), "loading demo inventory");

    for flight in demo_f {
        flights.insert(flight).await?;
    }
    for hotel in demo_h {
        hotels.insert(hotel).await?;
    }
    Ok(())
}
