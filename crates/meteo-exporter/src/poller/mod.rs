//! Source poller.
//!
//! One poller per upstream source, each running forever in its own task:
//! - GET the templated URL
//! - decode the body into an open JSON value
//! - record every numeric entry of `current` into the source's registry
//! - sleep, repeat
//!
//! Backoff is asymmetric: a transport failure pauses for `retry_pause`,
//! while body-read and decode failures restart the iteration immediately.

pub mod fetch;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use meteo_core::error::MeteoError;
use meteo_core::{current_readings, decode_body, Source};

use crate::config::ExporterConfig;
use crate::obs::GaugeRegistry;

pub use fetch::{Fetch, HttpFetcher};

const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);
const DEFAULT_RETRY_PAUSE: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Sleep after a completed cycle.
    pub interval: Duration,
    /// Sleep after a transport failure.
    pub retry_pause: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            retry_pause: DEFAULT_RETRY_PAUSE,
        }
    }
}

impl Schedule {
    pub fn pause_after(&self, cycle: Cycle) -> Duration {
        match cycle {
            Cycle::Updated { .. } | Cycle::NoCurrent => self.interval,
            Cycle::TransportFailed => self.retry_pause,
            Cycle::BodyFailed | Cycle::DecodeFailed => Duration::ZERO,
        }
    }
}

/// Outcome of one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// `current` was present; `recorded` numeric fields were written.
    Updated { recorded: usize },
    /// Body decoded but had no `current` object.
    NoCurrent,
    TransportFailed,
    BodyFailed,
    DecodeFailed,
}

pub struct Poller {
    source: Source,
    url: String,
    registry: Arc<GaugeRegistry>,
    fetcher: Arc<dyn Fetch>,
    schedule: Schedule,
}

impl Poller {
    pub fn new(
        source: Source,
        cfg: &ExporterConfig,
        registry: Arc<GaugeRegistry>,
        fetcher: Arc<dyn Fetch>,
    ) -> Self {
        let url = source.request_url(&cfg.location(), cfg.fields(source));
        Self {
            source,
            url,
            registry,
            fetcher,
            schedule: Schedule::default(),
        }
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run a single fetch/decode/record iteration.
    pub async fn poll_once(&self) -> Cycle {
        let body = match self.fetcher.fetch(&self.url).await {
            Ok(body) => body,
            Err(e @ MeteoError::Body(_)) => {
                tracing::warn!(source = %self.source, error = %e, "error reading response");
                return Cycle::BodyFailed;
            }
            Err(e) => {
                tracing::warn!(source = %self.source, error = %e, "error fetching data");
                return Cycle::TransportFailed;
            }
        };

        let doc = match decode_body(&body) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(source = %self.source, error = %e, "error parsing response");
                return Cycle::DecodeFailed;
            }
        };

        let cycle = match current_readings(&doc) {
            None => Cycle::NoCurrent,
            Some(readings) => {
                let mut recorded = 0;
                for r in readings {
                    match self.registry.record_field(r.field, r.value, &self.source.help(r.field)) {
                        Ok(_) => recorded += 1,
                        Err(e) => {
                            tracing::warn!(source = %self.source, field = r.field, error = %e, "field skipped");
                        }
                    }
                }
                Cycle::Updated { recorded }
            }
        };

        tracing::info!(source = %self.source, "metrics updated");
        cycle
    }

    /// Poll forever. Iterations never overlap.
    pub async fn run(self) {
        tracing::info!(source = %self.source, url = %self.url, "poller started");
        loop {
            let cycle = self.poll_once().await;
            let pause = self.schedule.pause_after(cycle);
            if pause.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(pause).await;
            }
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
