//! Contract code allocation.
//!
//! Codes are `CT-` plus the row-count successor, zero-padded to at least
//! four digits. Allocation is count-based with no lock; two concurrent
//! creations can observe the same count. The schema's unique index on the
//! code column makes the loser fail its transaction rather than persist a
//! duplicate.

use chrono::Utc;
use log::error;

use crate::constants::{CONTRACT_CODE_MIN_DIGITS, CONTRACT_CODE_PREFIX};
use crate::errors::Result;

/// Formats the nth contract code. Width expands past 9999.
pub fn format_code(n: i64) -> String {
    let digits = n.to_string().len().max(CONTRACT_CODE_MIN_DIGITS);
    format!("{}{:0width$}", CONTRACT_CODE_PREFIX, n, width = digits)
}

/// Degraded-mode code from the last four digits of the unix timestamp.
/// Best effort only; not guaranteed unique.
pub fn fallback_code() -> String {
    let ts = Utc::now().timestamp();
    format!("{}{:04}", CONTRACT_CODE_PREFIX, ts % 10_000)
}

/// Computes the next code from a row-count lookup, falling back to a
/// timestamp-derived code when the count itself cannot be read.
pub fn next_code<F>(count_rows: F) -> String
where
    F: FnOnce() -> Result<i64>,
{
    match count_rows() {
        Ok(count) => format_code(count + 1),
        Err(e) => {
            error!("Failed to count contracts for code allocation: {}", e);
            fallback_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DatabaseError, Error};
    use proptest::prelude::*;

    #[test]
    fn pads_to_four_digits() {
        assert_eq!(format_code(1), "CT-0001");
        assert_eq!(format_code(42), "CT-0042");
        assert_eq!(format_code(9999), "CT-9999");
    }

    #[test]
    fn width_expands_past_9999() {
        assert_eq!(format_code(10_000), "CT-10000");
        assert_eq!(format_code(123_456), "CT-123456");
    }

    #[test]
    fn next_code_is_count_successor() {
        assert_eq!(next_code(|| Ok(0)), "CT-0001");
        assert_eq!(next_code(|| Ok(7)), "CT-0008");
    }

    #[test]
    fn falls_back_on_count_failure() {
        let code = next_code(|| {
            Err(Error::Database(DatabaseError::QueryFailed(
                "boom".to_string(),
            )))
        });
        assert!(code.starts_with("CT-"));
        assert_eq!(code.len(), "CT-".len() + 4);
        assert!(code["CT-".len()..].chars().all(|c| c.is_ascii_digit()));
    }

    proptest! {
        #[test]
        fn codes_are_strictly_increasing_and_parse_back(n in 1i64..5_000_000) {
            let code = format_code(n);
            prop_assert!(code.starts_with("CT-"));
            let numeric: i64 = code["CT-".len()..].parse().unwrap();
            prop_assert_eq!(numeric, n);
            prop_assert!(code.len() >= "CT-".len() + 4);

            let next = format_code(n + 1);
            let next_numeric: i64 = next["CT-".len()..].parse().unwrap();
            prop_assert!(next_numeric > numeric);
        }
    }
}
