//! FizzBuzz Service - Main application use case
//!
//! Orchestrates a computation request: guard the input, record the
//! signature in the metrics store, then run the domain computation.

use crate::domain::entities::{FizzBuzzRequest, MetricsEntry};
use crate::domain::ports::{MetricsError, MetricsStore};
use crate::domain::services::fizzbuzz;
use std::sync::Arc;

/// Errors raised by the application service before any work is done.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("limit must not exceed {max} (got {limit})")]
    LimitTooLarge { limit: i64, max: i64 },
}

/// FizzBuzz service - main application use case.
///
/// Holds the metrics store as an injected port; the inbound adapter
/// only ever talks to this type.
pub struct FizzBuzzService {
    metrics: Arc<dyn MetricsStore>,
    max_limit: Option<i64>,
}

impl FizzBuzzService {
    /// Create a new fizzbuzz service.
    ///
    /// # Arguments
    /// * `metrics` - Store counting requests by signature
    /// * `max_limit` - Largest `limit` accepted by [`FizzBuzzService::fizzbuzz`],
    ///   `None` for no cap
    pub fn new(metrics: Arc<dyn MetricsStore>, max_limit: Option<i64>) -> Self {
        Self { metrics, max_limit }
    }

    pub fn max_limit(&self) -> Option<i64> {
        self.max_limit
    }

    /// Record `request` and compute its sequence.
    ///
    /// A request rejected here is not counted.
    pub fn fizzbuzz(&self, request: FizzBuzzRequest) -> Result<Vec<String>, ServiceError> {
        if let Some(max) = self.max_limit {
            if request.limit > max {
                return Err(ServiceError::LimitTooLarge {
                    limit: request.limit,
                    max,
                });
            }
        }

        self.metrics.record(&request);

        Ok(fizzbuzz(
            request.int1,
            request.int2,
            request.limit,
            &request.str1,
            &request.str2,
        ))
    }

    /// Most frequently requested signature.
    pub fn top_hit(&self) -> Result<MetricsEntry, MetricsError> {
        self.metrics.top_hit()
    }

    /// Every recorded signature with its hit count.
    pub fn list(&self) -> Vec<MetricsEntry> {
        self.metrics.list()
    }

    /// Number of distinct signatures recorded.
    pub fn tracked_requests(&self) -> usize {
        self.metrics.len()
    }
}
