//! Work-calendar model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The resolved work calendar for one month.
///
/// Carries the legally established working days and total working hours of
/// the month, against which attendance is prorated and hourly rates derived.
/// Calendar generation (weekends, movable holidays) happens outside the
/// engine; the engine only consumes the resolved counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCalendar {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1–12).
    pub month: u32,
    /// Number of working days in the month.
    pub working_days: u32,
    /// Total working hours in the month.
    pub working_hours: Decimal,
}
