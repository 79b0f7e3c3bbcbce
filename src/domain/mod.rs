//! Domain Layer
//!
//! Entities, ports and pure services. No I/O happens here.

pub mod entities;
pub mod ports;
pub mod services;
