//! Contract balance computation.
//!
//! A contract may activate only when the incoming value (Side A plus
//! incoming payment conditions) matches the outgoing value (Side B plus
//! outgoing payment conditions) within a one-cent tolerance. Items being
//! unbalanced is fine as long as the payment conditions settle the gap.

use crate::constants::BALANCE_TOLERANCE;
use crate::contracts::contracts_model::PaymentDirection;

/// Signed settlement balance.
///
/// `sideA' = sideA + Σ incoming; sideB' = sideB + Σ outgoing;
/// balance = sideA' − sideB'`.
pub fn balance<I>(side_a_total: f64, side_b_total: f64, conditions: I) -> f64
where
    I: IntoIterator<Item = (f64, PaymentDirection)>,
{
    let mut side_a = side_a_total;
    let mut side_b = side_b_total;
    for (value, direction) in conditions {
        match direction {
            PaymentDirection::In => side_a += value,
            PaymentDirection::Out => side_b += value,
        }
    }
    side_a - side_b
}

/// Whether a balance is close enough to zero for activation.
pub fn can_activate(balance: f64) -> bool {
    balance.abs() <= BALANCE_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn balanced_items_with_no_conditions() {
        let b = balance(100_000.0, 100_000.0, std::iter::empty());
        assert_eq!(b, 0.0);
        assert!(can_activate(b));
    }

    #[test]
    fn conditions_settle_an_item_gap() {
        // Side A gives 100k of assets, Side B gives 80k plus a 20k outgoing
        // payment. That is intentional design: the payment is the settlement.
        let b = balance(
            100_000.0,
            80_000.0,
            vec![(20_000.0, PaymentDirection::Out)],
        );
        assert_eq!(b, 0.0);
        assert!(can_activate(b));
    }

    #[test]
    fn incoming_conditions_raise_side_a() {
        let b = balance(
            0.0,
            120_000.0,
            vec![(120_000.0, PaymentDirection::In)],
        );
        assert_eq!(b, 0.0);
    }

    #[test]
    fn tolerance_boundary() {
        assert!(can_activate(0.0099));
        assert!(can_activate(-0.0099));
        assert!(can_activate(0.01));
        assert!(!can_activate(0.0101));
        assert!(!can_activate(-0.0101));
    }

    proptest! {
        #[test]
        fn activation_iff_within_tolerance(
            side_a in 0.0f64..1_000_000.0,
            side_b in 0.0f64..1_000_000.0,
            values in proptest::collection::vec((0.01f64..100_000.0, proptest::bool::ANY), 0..6),
        ) {
            let conditions: Vec<(f64, PaymentDirection)> = values
                .into_iter()
                .map(|(v, incoming)| {
                    (v, if incoming { PaymentDirection::In } else { PaymentDirection::Out })
                })
                .collect();

            let expected = {
                let inflow: f64 = conditions
                    .iter()
                    .filter(|(_, d)| *d == PaymentDirection::In)
                    .map(|(v, _)| v)
                    .sum();
                let outflow: f64 = conditions
                    .iter()
                    .filter(|(_, d)| *d == PaymentDirection::Out)
                    .map(|(v, _)| v)
                    .sum();
                (side_a + inflow) - (side_b + outflow)
            };

            let b = balance(side_a, side_b, conditions);
            prop_assert!((b - expected).abs() < 1e-6);
            prop_assert_eq!(can_activate(b), b.abs() <= 0.01);
        }
    }
}
