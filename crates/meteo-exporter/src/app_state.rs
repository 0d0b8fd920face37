//! Shared application state for the exporter.
//!
//! Holds the resolved config, the process-wide Prometheus registry, and one
//! gauge registry per source. Created once at startup and never torn down.

use std::sync::Arc;

use prometheus::Registry;

use meteo_core::Source;

use crate::config::ExporterConfig;
use crate::obs::GaugeRegistry;
use crate::poller::{Fetch, Poller};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    exposition: Registry,
    weather: Arc<GaugeRegistry>,
    air_quality: Arc<GaugeRegistry>,
}

impl AppState {
    pub fn new(cfg: ExporterConfig) -> Self {
        let exposition = Registry::new();
        let weather = Arc::new(GaugeRegistry::new(Source::Weather.prefix(), exposition.clone()));
        let air_quality = Arc::new(GaugeRegistry::new(Source::AirQuality.prefix(), exposition.clone()));

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                exposition,
                weather,
                air_quality,
            }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn exposition(&self) -> &Registry {
        &self.inner.exposition
    }

    pub fn registry(&self, source: Source) -> Arc<GaugeRegistry> {
        match source {
            Source::Weather => Arc::clone(&self.inner.weather),
            Source::AirQuality => Arc::clone(&self.inner.air_quality),
        }
    }

    /// One poller per source, all sharing `fetcher`.
    pub fn pollers(&self, fetcher: Arc<dyn Fetch>) -> Vec<Poller> {
        Source::ALL
            .into_iter()
            .map(|source| Poller::new(source, self.cfg(), self.registry(source), Arc::clone(&fetcher)))
            .collect()
    }
}
