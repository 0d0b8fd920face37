//! meteo-exporter
//!
//! - Pollers: Open-Meteo weather + air-quality `current` conditions
//! - Gauges named `<prefix>_<field>` (`t_` weather, `a_` air quality)
//! - Prometheus endpoint: GET /metrics

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meteo_core::error::{MeteoError, Result};
use meteo_exporter::{
    app_state::AppState,
    config::{self, EnvSource, FlagArgs},
    poller::{Fetch, HttpFetcher},
    router,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(code = e.code(), error = %e, "meteo-exporter exiting");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let flags = FlagArgs::parse_normalized(std::env::args_os().map(|a| a.to_string_lossy().into_owned()));
    let cfg = config::load(&flags, &EnvSource::process())?;
    let listen = cfg.listen_addr()?;

    tracing::info!(
        %listen,
        latitude = %cfg.latitude,
        longitude = %cfg.longitude,
        timezone = %cfg.timezone,
        weather_fields = %cfg.weather_fields,
        air_quality_fields = %cfg.air_quality_fields,
        "meteo-exporter starting, serving /metrics"
    );

    let state = AppState::new(cfg);
    let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new()?);
    for poller in state.pollers(fetcher) {
        poller.spawn();
    }

    let app = router::build_router(state);
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MeteoError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| MeteoError::Internal(format!("server failed: {e}")))
}
