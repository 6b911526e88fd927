//! Leave-day compensation.
//!
//! Absence days are compensated from the timesheet's absence codes: codes
//! in the annual-leave range are paid at the employee's average daily rate,
//! codes in the sick-leave range at 70% of that rate for at most the first
//! three days of the month. The remainder of statutory sick leave is funded
//! externally and never appears in this engine.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;

use crate::calculation::rounding::{round_money, round_ratio};
use crate::models::{DayKind, PayrollLine, Timesheet};

/// Absence codes compensated as employer-paid annual leave.
pub const ANNUAL_LEAVE_CODES: RangeInclusive<u16> = 10..=19;

/// Absence codes compensated as employer-funded sick leave.
pub const SICK_LEAVE_CODES: RangeInclusive<u16> = 40..=49;

/// Employer-funded sick days per month; later days are funded externally.
pub const EMPLOYER_SICK_DAY_CAP: u32 = 3;

/// Percentage of the average daily rate paid for employer-funded sick days.
pub const SICK_PAY_PERCENT: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

/// Calculates the leave-compensation earning lines for a month.
///
/// `daily` is the employee's average daily rate: the full-time-equivalent
/// earned base divided by the month's working days. Absence days without a
/// code, or with a code outside both ranges, earn nothing here.
pub fn calculate_leave_pay(timesheet: &Timesheet, daily: Decimal) -> Vec<PayrollLine> {
    let mut annual_days = 0u32;
    let mut sick_days = 0u32;

    for day in &timesheet.days {
        if day.kind != DayKind::Absence {
            continue;
        }
        let Some(code) = day.absence_code else {
            continue;
        };
        if ANNUAL_LEAVE_CODES.contains(&code) {
            annual_days += 1;
        } else if SICK_LEAVE_CODES.contains(&code) {
            sick_days += 1;
        }
    }

    let mut lines = Vec::new();

    if annual_days > 0 {
        let quantity = Decimal::from(annual_days);
        let amount = round_money(quantity * daily);
        lines.push(PayrollLine::per_unit(
            "annual_leave",
            "Paid annual leave",
            quantity,
            daily,
            amount,
        ));
    }

    if sick_days > 0 {
        let paid_days = sick_days.min(EMPLOYER_SICK_DAY_CAP);
        let rate = round_ratio(daily * SICK_PAY_PERCENT / Decimal::ONE_HUNDRED);
        let quantity = Decimal::from(paid_days);
        let amount = round_money(quantity * rate);
        lines.push(PayrollLine::per_unit(
            "sick_leave_employer",
            "Employer-funded sick leave",
            quantity,
            rate,
            amount,
        ));
    }

    lines
}
