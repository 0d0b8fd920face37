//! meteo core: transport-agnostic primitives shared by the exporter.
//!
//! This crate defines the upstream data sources (prefix, endpoint, help text),
//! metric-name derivation, the `current` projection over decoded JSON, and the
//! error surface. It carries no runtime or HTTP dependencies so the projection
//! rules can be tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed upstream payloads surface as `MeteoError` or as an empty
//! projection, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod projection;
pub mod source;

/// Shared result type.
pub use error::{MeteoError, Result};
pub use projection::{current_readings, decode_body, metric_name, Reading};
pub use source::{Location, Source};
