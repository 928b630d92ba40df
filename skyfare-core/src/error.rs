use uuid::Uuid;

/// Failure class, for callers that route on the kind of error rather than
/// the exact variant. Every [`BookingError`] maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InsufficientCapacity,
    InvalidDate,
    InvalidReturnDate,
    InvalidDuration,
    InvalidGuests,
    Forbidden,
    InvalidState,
    CancellationWindowClosed,
    Store,
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("flight not found: {0}")]
    FlightNotFound(Uuid),

    #[error("hotel not found: {0}")]
    HotelNotFound(Uuid),

    #[error("booking not found: {0}")]
    BookingNotFound(Uuid),

    #[error("insufficient capacity: requested {requested}, available {available}")]
    InsufficientCapacity { requested: u32, available: i32 },

    #[error("departure date must be in the future")]
    DepartureInPast,

    #[error("return date must be after departure date")]
    ReturnBeforeDeparture,

    #[error("check-in date must be in the future")]
    CheckInInPast,

    #[error("check-out date must be after check-in date")]
    CheckOutBeforeCheckIn,

    #[error("invalid stay duration: {nights} nights")]
    InvalidStayDuration { nights: i64 },

    #[error("invalid number of guests: {0}")]
    InvalidGuests(u32),

    #[error("booking {0} does not belong to the requesting user")]
    NotOwner(Uuid),

    #[error("cannot update cancelled booking")]
    BookingCancelled,

    #[error("booking cannot be cancelled within {window_hours} hours of check-in")]
    CancellationWindowClosed { window_hours: i64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BookingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::FlightNotFound(_)
            | BookingError::HotelNotFound(_)
            | BookingError::BookingNotFound(_) => ErrorKind::NotFound,
            BookingError::InsufficientCapacity { .. } => ErrorKind::InsufficientCapacity,
            BookingError::DepartureInPast | BookingError::CheckInInPast => ErrorKind::InvalidDate,
            BookingError::ReturnBeforeDeparture | BookingError::CheckOutBeforeCheckIn => {
                ErrorKind::InvalidReturnDate
            }
            BookingError::InvalidStayDuration { .. } => ErrorKind::InvalidDuration,
            BookingError::InvalidGuests(_) => ErrorKind::InvalidGuests,
            BookingError::NotOwner(_) => ErrorKind::Forbidden,
            BookingError::BookingCancelled => ErrorKind::InvalidState,
            BookingError::CancellationWindowClosed { .. } => ErrorKind::CancellationWindowClosed,
            BookingError::Store(_) => ErrorKind::Store,
        }
    }
}

/// Persistence failure surfaced through the store traits. The core never
/// retries; these reach the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate id: {0}")]
    DuplicateId(Uuid),

    #[error("no record with id: {0}")]
    MissingId(Uuid),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_not_found_variant_shares_a_kind() {
        let id = Uuid::new_v4();
        assert_eq!(BookingError::FlightNotFound(id).kind(), ErrorKind::NotFound);
        assert_eq!(BookingError::HotelNotFound(id).kind(), ErrorKind::NotFound);
        assert_eq!(BookingError::BookingNotFound(id).kind(), ErrorKind::NotFound);
    }

    #[test]
    fn capacity_error_carries_context() {
        let err = BookingError::InsufficientCapacity {
            requested: 3,
            available: 1,
        };
        assert_eq!(err.kind(), ErrorKind::InsufficientCapacity);
        assert_eq!(err.to_string(), "insufficient capacity: requested 3, available 1");
    }

    #[test]
    fn store_errors_pass_through() {
        let id = Uuid::new_v4();
        let err: BookingError = StoreError::DuplicateId(id).into();
        assert_eq!(err.kind(), ErrorKind::Store);
    }
}
