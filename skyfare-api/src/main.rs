use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skyfare_api::middleware::rate_limit::FixedWindowLimiter;
use skyfare_api::{
    app,
    state::{AppState, AuthConfig},
};
use skyfare_core::{BookingLifecycle, BookingWorkflow};
use skyfare_store::{
    app_config::Config, seed, MemoryBookingStore, MemoryFlightStore, MemoryHotelStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "skyfare_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("failed to load config")?;
    tracing::info!("starting Skyfare API on port {}", config.server.port);

    let flights = Arc::new(MemoryFlightStore::new());
    let hotels = Arc::new(MemoryHotelStore::new());
    let bookings = Arc::new(MemoryBookingStore::new());

    if config.server.seed_demo_data {
        seed::load(flights.as_ref(), hotels.as_ref())
            .await
            .context("failed to seed demo inventory")?;
    }

    let workflow = BookingWorkflow::new(flights.clone(), hotels.clone(), bookings.clone());
    let lifecycle = BookingLifecycle::new(
        bookings.clone(),
        chrono::Duration::hours(config.booking_rules.cancellation_window_hours),
    );
    let limiter = Arc::new(FixedWindowLimiter::new(
        config.rate_limit.max_requests,
        Duration::from_secs(config.rate_limit.window_seconds),
    ));

    let app_state = AppState {
        workflow,
        lifecycle,
        limiter,
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
