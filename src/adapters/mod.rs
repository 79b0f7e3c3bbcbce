//! Adapters Layer
//!
//! Inbound adapters drive the application, outbound adapters implement ports.

pub mod inbound;
pub mod outbound;
