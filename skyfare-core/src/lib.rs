pub mod error;
pub mod lifecycle;
pub mod locks;
pub mod repository;
pub mod workflow;

pub use error::{BookingError, ErrorKind, StoreError};
pub use lifecycle::BookingLifecycle;
pub use workflow::BookingWorkflow;
