//! Shared error type across meteo crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, MeteoError>;

/// Unified error type used by core and exporter.
///
/// The poller distinguishes `Transport` from `Body` and `Decode` because the
/// loop pauses after the former and retries immediately after the latter two.
#[derive(Debug, Error)]
pub enum MeteoError {
    #[error("config: {0}")]
    Config(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("reading response body: {0}")]
    Body(String),
    #[error("parsing JSON: {0}")]
    Decode(String),
    #[error("metric: {0}")]
    Metric(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MeteoError {
    /// Stable code for log fields.
    pub fn code(&self) -> &'static str {
        match self {
            MeteoError::Config(_) => "CONFIG",
            MeteoError::Transport(_) => "TRANSPORT",
            MeteoError::Body(_) => "BODY",
            MeteoError::Decode(_) => "DECODE",
            MeteoError::Metric(_) => "METRIC",
            MeteoError::Internal(_) => "INTERNAL",
        }
    }
}
