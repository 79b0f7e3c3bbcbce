//! Metrics Store Port
//!
//! Defines the interface for counting fizzbuzz requests by signature.

use crate::domain::entities::{FizzBuzzRequest, MetricsEntry};

/// Errors returned by a metrics store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    #[error("no requests have been recorded yet")]
    NotFound,
}

/// Store for per-signature request counts.
///
/// This is an outbound port. Implementations are shared across request
/// handlers and must never lose an increment under concurrent `record` calls.
pub trait MetricsStore: Send + Sync {
    /// Count one more hit for `request`, creating its entry on first sight.
    fn record(&self, request: &FizzBuzzRequest);

    /// All entries, in the order their signatures were first recorded.
    fn list(&self) -> Vec<MetricsEntry>;

    /// The entry with the most hits.
    ///
    /// When several signatures share the maximum, the one recorded first wins.
    fn top_hit(&self) -> Result<MetricsEntry, MetricsError>;

    /// Number of distinct signatures seen.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
