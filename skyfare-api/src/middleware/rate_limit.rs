//! Fixed-window rate limiting keyed by client address.
//!
//! The limiter is owned by [`AppState`](crate::state::AppState) and
//! shared across handlers; nothing here is global.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

// Evict stale windows once the table grows past this many clients.
const EVICT_HIGH_WATER: usize = 1024;

struct Window {
    started: Instant,
    count: u32,
}

/// Per-key request counter. Each key gets `max_requests` per window; the
/// count resets when its window elapses.
pub struct FixedWindowLimiter {
    windows: Mutex<HashMap<String, Window>>,
    max_requests: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            max_requests,
            window,
        }
    }

    /// Count one request against `key`. Returns false when the key is
    /// over its quota for the current window.
    pub async fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now()).await
    }

    async fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().await;

        if windows.len() > EVICT_HIGH_WATER {
            let window = self.window;
            windows.retain(|_, w| now.duration_since(w.started) < window);
        }

        let entry = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });
        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }
        entry.count += 1;
        entry.count <= self.max_requests
    }
}

pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let key = addr.ip().to_string();

    if !state.limiter.check(&key).await {
        warn!(client = %key, "rate limit exceeded");
        return Err(ApiError::too_many_requests());
    }

    Ok(next.run(req).await)
}
