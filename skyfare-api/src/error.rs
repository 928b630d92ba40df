use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use skyfare_core::{BookingError, ErrorKind};

/// Error shape returned to clients: an HTTP status, a stable machine
/// code, and a human-readable message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            code: "UNAUTHENTICATED",
            message: message.into(),
        }
    }

    pub fn too_many_requests() -> Self {
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            code: "RATE_LIMITED",
            message: "rate limit exceeded".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL",
            message: message.into(),
        }
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        let (status, code) = match err.kind() {
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::InsufficientCapacity => (StatusCode::CONFLICT, "INSUFFICIENT_CAPACITY"),
            ErrorKind::InvalidDate => (StatusCode::BAD_REQUEST, "INVALID_DATE"),
            ErrorKind::InvalidReturnDate => (StatusCode::BAD_REQUEST, "INVALID_RETURN_DATE"),
            ErrorKind::InvalidDuration => (StatusCode::BAD_REQUEST, "INVALID_DURATION"),
            ErrorKind::InvalidGuests => (StatusCode::BAD_REQUEST, "INVALID_GUESTS"),
            ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::InvalidState => (StatusCode::CONFLICT, "INVALID_STATE"),
            ErrorKind::CancellationWindowClosed => {
                (StatusCode::CONFLICT, "CANCELLATION_WINDOW_CLOSED")
            }
            ErrorKind::Store => {
                tracing::error!("storage failure: {}", err);
                return Self::internal("internal server error");
            }
        };

        Self {
            status,
            code,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "code": self.code,
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyfare_core::StoreError;
    use uuid::Uuid;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(BookingError::FlightNotFound(Uuid::new_v4()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "NOT_FOUND");
    }

    #[test]
    fn capacity_conflicts_map_to_409() {
        let err = ApiError::from(BookingError::InsufficientCapacity {
            requested: 2,
            available: 1,
        });
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, "INSUFFICIENT_CAPACITY");
    }

    #[test]
    fn validation_failures_map_to_400() {
        let err = ApiError::from(BookingError::DepartureInPast);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "INVALID_DATE");

        let err = ApiError::from(BookingError::InvalidGuests(0));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "INVALID_GUESTS");
    }

    #[test]
    fn store_failures_hide_detail() {
        let err = ApiError::from(BookingError::Store(StoreError::Backend("boom".to_string())));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, "INTERNAL");
        assert_eq!(err.message, "internal server error");
    }
}
