use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use skyfare_domain::booking::{Booking, BookingStatus, BookingUpdate};

use crate::error::BookingError;
use crate::repository::BookingStore;

/// Post-creation booking operations: ownership-checked reads, whitelisted
/// partial updates, and cancellation inside the allowed window.
#[derive(Clone)]
pub struct BookingLifecycle {
    bookings: Arc<dyn BookingStore>,
    cancellation_window: Duration,
}

impl BookingLifecycle {
    pub fn new(bookings: Arc<dyn BookingStore>, cancellation_window: Duration) -> Self {
        Self {
            bookings,
            cancellation_window,
        }
    }

    pub async fn list_bookings(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        Ok(self.bookings.list_for_user(user_id).await?)
    }

    /// Every read goes through the ownership check; a booking surfaces only
    /// to the user it belongs to.
    pub async fn get_booking(&self, id: Uuid, user_id: Uuid) -> Result<Booking, BookingError> {
        let booking = self
            .bookings
            .find(id)
            .await?
            .ok_or(BookingError::BookingNotFound(id))?;
        if booking.user_id != user_id {
            return Err(BookingError::NotOwner(id));
        }
        Ok(booking)
    }

    /// Apply a partial update. Cancelled bookings are frozen; any other
    /// status accepts the whitelisted fields, including a status change.
    pub async fn update_booking(
        &self,
        id: Uuid,
        user_id: Uuid,
        update: &BookingUpdate,
    ) -> Result<Booking, BookingError> {
        let mut booking = self.get_booking(id, user_id).await?;
        if booking.is_cancelled() {
            return Err(BookingError::BookingCancelled);
        }

        booking.apply(update);
        self.bookings.update(&booking).await?;
        Ok(booking)
    }

    pub async fn cancel_booking(&self, id: Uuid, user_id: Uuid) -> Result<(), BookingError> {
        let mut booking = self.get_booking(id, user_id).await?;

        // A booking without a check-in date has no open window and can
        // never be cancelled.
        let window_open = booking
            .check_in_date
            .map(|check_in| check_in - Utc::now() >= self.cancellation_window)
            .unwrap_or(false);
        if !window_open {
            return Err(BookingError::CancellationWindowClosed {
                window_hours: self.cancellation_window.num_hours(),
            });
        }

        booking.status = BookingStatus::Cancelled;
        // Inventory is not restored; the seats or rooms stay consumed.
        self.bookings.update(&booking).await?;

        info!(booking_id = %id, "booking cancelled");
        Ok(())
    }
}
