//! Per-source gauge registry.
//!
//! Each source owns one `GaugeRegistry` keyed by derived metric name. Gauges
//! are created lazily on first observation, registered once with the shared
//! Prometheus registry for scrape-time enumeration, and updated in place
//! afterwards. Nothing is ever removed.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use prometheus::{Gauge, Opts, Registry};

use meteo_core::error::{MeteoError, Result};
use meteo_core::metric_name;

pub struct GaugeRegistry {
    prefix: &'static str,
    gauges: DashMap<String, Gauge>,
    exposition: Registry,
}

impl GaugeRegistry {
    pub fn new(prefix: &'static str, exposition: Registry) -> Self {
        Self {
            prefix,
            gauges: DashMap::new(),
            exposition,
        }
    }

    /// Create or update the gauge for `field`. Returns the metric name.
    pub fn record_field(&self, field: &str, value: f64, help: &str) -> Result<String> {
        let name = metric_name(self.prefix, field);
        match self.gauges.entry(name) {
            Entry::Occupied(e) => {
                e.get().set(value);
                Ok(e.key().clone())
            }
            Entry::Vacant(e) => {
                let gauge = Gauge::with_opts(Opts::new(e.key().as_str(), help))
                    .map_err(|err| MeteoError::Metric(format!("{}: {err}", e.key())))?;
                gauge.set(value);
                self.exposition
                    .register(Box::new(gauge.clone()))
                    .map_err(|err| MeteoError::Metric(format!("{}: {err}", e.key())))?;
                let name = e.key().clone();
                e.insert(gauge);
                Ok(name)
            }
        }
    }

    /// Current value by metric name.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.gauges.get(name).map(|g| g.get())
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.gauges.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }
}
