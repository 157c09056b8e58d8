//! Crate-wide constants.

/// Prefix for human-readable contract codes.
pub const CONTRACT_CODE_PREFIX: &str = "CT-";

/// Minimum digit width of the numeric part of a contract code. The width
/// grows automatically once the sequence passes 9999.
pub const CONTRACT_CODE_MIN_DIGITS: usize = 4;

/// Absolute tolerance, in currency units, under which a contract balance is
/// considered settled. Covers float rounding on 2-decimal currency values.
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// Suffix letter for receivable installment codes (`{code}-R{NN}`).
pub const RECEIVABLE_SUFFIX: char = 'R';

/// Suffix letter for payable installment codes (`{code}-P{NN}`).
pub const PAYABLE_SUFFIX: char = 'P';
