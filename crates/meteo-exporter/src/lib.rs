//! meteo exporter library entry.
//!
//! This crate wires configuration, the per-source pollers, the gauge
//! registries, and the `/metrics` endpoint into one process. It is consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod poller;
pub mod router;
