use std::sync::Arc;

use skyfare_core::{BookingLifecycle, BookingWorkflow};

use crate::middleware::rate_limit::FixedWindowLimiter;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub workflow: BookingWorkflow,
    pub lifecycle: BookingLifecycle,
    pub limiter: Arc<FixedWindowLimiter>,
    pub auth: AuthConfig,
}
