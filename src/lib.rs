//! fizzbuzz-server Library
//!
//! This module exposes the fizzbuzz-server components for use in integration
//! tests and as a library.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::inbound::ApiServer;
pub use adapters::outbound::DashMapMetricsStore;
pub use application::{FizzBuzzService, ServiceError};
pub use config::load_config;
pub use domain::entities::{FizzBuzzRequest, MetricsEntry};
pub use domain::ports::{MetricsError, MetricsStore};
pub use infrastructure::ShutdownController;
