//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the fizzbuzz domain.
//! They have no external dependencies beyond serde and contain only data.

use serde::{Deserialize, Serialize};

/// The full parameter set of a fizzbuzz computation.
///
/// Two requests are the same signature when all five fields are equal.
/// This is the key the metrics store counts hits against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FizzBuzzRequest {
    /// First divisor
    pub int1: i64,
    /// Second divisor
    pub int2: i64,
    /// Upper bound (inclusive) of the generated sequence
    pub limit: i64,
    /// Replacement for multiples of `int1`
    pub str1: String,
    /// Replacement for multiples of `int2`
    pub str2: String,
}

impl FizzBuzzRequest {
    /// Create a new request signature.
    pub fn new(
        int1: i64,
        int2: i64,
        limit: i64,
        str1: impl Into<String>,
        str2: impl Into<String>,
    ) -> Self {
        Self {
            int1,
            int2,
            limit,
            str1: str1.into(),
            str2: str2.into(),
        }
    }
}

impl std::fmt::Display for FizzBuzzRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "int1={} int2={} limit={} str1={:?} str2={:?}",
            self.int1, self.int2, self.limit, self.str1, self.str2
        )
    }
}

/// A request signature together with how many times it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsEntry {
    pub request: FizzBuzzRequest,
    pub hits: u64,
}

impl MetricsEntry {
    pub fn new(request: FizzBuzzRequest, hits: u64) -> Self {
        Self { request, hits }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn classic() -> FizzBuzzRequest {
        FizzBuzzRequest::new(3, 5, 10, "Fizz", "Buzz")
    }

    #[test]
    fn test_request_structural_equality() {
        assert_eq!(classic(), classic());
        assert_ne!(classic(), FizzBuzzRequest::new(3, 5, 11, "Fizz", "Buzz"));
        assert_ne!(classic(), FizzBuzzRequest::new(3, 5, 10, "Fizz", "Bazz"));
    }

    #[test]
    fn test_request_hash_dedupes_equal_signatures() {
        let mut set = HashSet::new();
        set.insert(classic());
        set.insert(classic());
        set.insert(FizzBuzzRequest::new(2, 4, 10, "Fizz", "Buzz"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_request_serializes_field_names() {
        let json = serde_json::to_value(classic()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "int1": 3,
                "int2": 5,
                "limit": 10,
                "str1": "Fizz",
                "str2": "Buzz"
            })
        );
    }

    #[test]
    fn test_request_display() {
        let s = classic().to_string();
        assert_eq!(s, r#"int1=3 int2=5 limit=10 str1="Fizz" str2="Buzz""#);
    }

    #[test]
    fn test_metrics_entry_serialization() {
        let entry = MetricsEntry::new(classic(), 7);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["hits"], 7);
        assert_eq!(json["request"]["str1"], "Fizz");
        assert_eq!(json["request"]["limit"], 10);
    }
}
