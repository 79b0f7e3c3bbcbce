//! Application Layer
//!
//! Use cases that orchestrate domain logic through ports.

mod fizzbuzz_service;

pub use fizzbuzz_service::{FizzBuzzService, ServiceError};
