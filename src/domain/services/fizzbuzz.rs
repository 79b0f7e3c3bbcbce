//! FizzBuzz Computation
//!
//! Pure domain logic: maps the five request parameters to a token sequence.

/// Upper bound on up-front allocation; longer sequences grow as they go.
const MAX_PREALLOC: usize = 1 << 16;

/// Generate the fizzbuzz sequence for `1..=limit`.
///
/// Multiples of both divisors become `str1 + str2`, multiples of one divisor
/// become its replacement string, everything else is the number itself.
/// A zero divisor never divides anything. A non-positive `limit` yields
/// an empty sequence.
///
/// # Examples
/// ```
/// use fizzbuzz_server::domain::services::fizzbuzz;
///
/// assert_eq!(fizzbuzz(2, 3, 6, "a", "b"), vec!["1", "a", "b", "a", "5", "ab"]);
/// ```
pub fn fizzbuzz(int1: i64, int2: i64, limit: i64, str1: &str, str2: &str) -> Vec<String> {
    if limit <= 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(usize::try_from(limit).map_or(0, |n| n.min(MAX_PREALLOC)));
    for i in 1..=limit {
        let token = match (divides(int1, i), divides(int2, i)) {
            (true, true) => format!("{str1}{str2}"),
            (true, false) => str1.to_string(),
            (false, true) => str2.to_string(),
            (false, false) => i.to_string(),
        };
        out.push(token);
    }
    out
}

fn divides(divisor: i64, n: i64) -> bool {
    // checked_rem is None for a zero divisor
    n.checked_rem(divisor) == Some(0)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_classic_fizzbuzz() {
        assert_eq!(
            fizzbuzz(3, 5, 10, "Fizz", "Buzz"),
            vec!["1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz"]
        );
    }

    #[test]
    fn test_combined_token_at_common_multiple() {
        let out = fizzbuzz(3, 5, 15, "Fizz", "Buzz");
        assert_eq!(out.len(), 15);
        assert_eq!(out[14], "FizzBuzz");
    }

    #[test]
    fn test_same_divisors_always_combined() {
        assert_eq!(fizzbuzz(2, 2, 4, "a", "b"), vec!["1", "ab", "3", "ab"]);
    }

    #[test]
    fn test_divisor_one_replaces_everything() {
        assert_eq!(fizzbuzz(1, 7, 3, "x", "y"), vec!["x", "x", "x"]);
    }

    #[test]
    fn test_zero_limit_is_empty() {
        assert!(fizzbuzz(3, 5, 0, "Fizz", "Buzz").is_empty());
    }

    #[test]
    fn test_negative_limit_is_empty() {
        assert!(fizzbuzz(3, 5, -4, "Fizz", "Buzz").is_empty());
    }

    #[test]
    fn test_zero_divisor_never_divides() {
        assert_eq!(fizzbuzz(0, 2, 4, "Fizz", "Buzz"), vec!["1", "Buzz", "3", "Buzz"]);
        assert_eq!(fizzbuzz(0, 0, 3, "Fizz", "Buzz"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_negative_divisor_uses_magnitude() {
        assert_eq!(
            fizzbuzz(-3, 5, 6, "Fizz", "Buzz"),
            fizzbuzz(3, 5, 6, "Fizz", "Buzz")
        );
    }

    #[test]
    fn test_multibyte_strings() {
        assert_eq!(fizzbuzz(1, 1, 1, "fï", "bü"), vec!["fïbü"]);
    }
}
