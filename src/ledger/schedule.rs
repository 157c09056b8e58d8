//! Due-date projection for installment schedules.

use chrono::{Days, Months, NaiveDate};

use crate::contracts::contracts_model::Frequency;

/// Calendar due date of the `index`-th installment counted from `start`.
///
/// Index 0 (or no frequency) is the start date itself. Month-based
/// frequencies use calendar month arithmetic, so Jan 31 + 1 month lands on
/// the last day of February rather than 30 days later.
pub fn due_date(start: NaiveDate, index: u32, frequency: Option<Frequency>) -> NaiveDate {
    let frequency = match frequency {
        Some(f) if index > 0 => f,
        _ => return start,
    };

    match frequency {
        Frequency::Weekly => start
            .checked_add_days(Days::new(7 * index as u64))
            .unwrap_or(start),
        Frequency::Monthly => add_months(start, index),
        Frequency::Quarterly => add_months(start, 3 * index),
        Frequency::Semiannual => add_months(start, 6 * index),
        Frequency::Annual => add_months(start, 12 * index),
    }
}

fn add_months(start: NaiveDate, months: u32) -> NaiveDate {
    start
        .checked_add_months(Months::new(months))
        .unwrap_or(start)
}
