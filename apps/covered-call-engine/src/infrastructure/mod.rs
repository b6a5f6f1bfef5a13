//! Infrastructure Layer
//!
//! Adapters around the pure core: YAML configuration, tracing setup and the
//! JSON backup format.

pub mod backup;
pub mod config;
pub mod telemetry;
