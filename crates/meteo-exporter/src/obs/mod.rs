//! Metrics state backed by the `prometheus` crate.
//!
//! Gauges are stored per source in a [`registry::GaugeRegistry`] and all of
//! them are enumerated through one shared `prometheus::Registry` when the
//! `/metrics` handler renders.

pub mod registry;

use prometheus::{Encoder, Registry, TextEncoder};

use meteo_core::error::{MeteoError, Result};

pub use registry::GaugeRegistry;

/// Render every registered gauge in Prometheus text exposition format.
/// Returns `(content_type, body)`.
pub fn render(exposition: &Registry) -> Result<(String, String)> {
    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    encoder
        .encode(&exposition.gather(), &mut buf)
        .map_err(|e| MeteoError::Internal(format!("encode metrics failed: {e}")))?;
    let body = String::from_utf8(buf).map_err(|e| MeteoError::Internal(e.to_string()))?;
    Ok((encoder.format_type().to_string(), body))
}
