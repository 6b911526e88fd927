//! Overtime and night-work premiums.
//!
//! Overtime hours are bucketed by the kind of day they were worked on and
//! paid an additive surcharge on top of the already-paid base: 50% of the
//! hourly rate on ordinary workdays, 75% on weekends, 100% on official
//! holidays. Night hours earn a separate 14.3% surcharge. The hourly rate
//! is derived from the full-time-equivalent earned base, not the prorated
//! month.

use rust_decimal::Decimal;

use crate::calculation::rounding::{percent_of, round_money, round_ratio};
use crate::models::{Contract, DayKind, PayrollLine, Timesheet};

/// Overtime surcharge on ordinary workdays.
pub const WORKDAY_OVERTIME_PREMIUM: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Overtime surcharge on weekend days.
pub const WEEKEND_OVERTIME_PREMIUM: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Overtime surcharge on official holidays.
pub const HOLIDAY_OVERTIME_PREMIUM: Decimal = Decimal::from_parts(100, 0, 0, false, 2);

/// Surcharge per hour worked during the legal night interval.
pub const NIGHT_WORK_PREMIUM: Decimal = Decimal::from_parts(143, 0, 0, false, 3);

/// Returns the full-time-equivalent earned base for the month: the full
/// base salary plus the full seniority bonus, before any proration.
///
/// Dividing this amount by the calendar's working hours or working days
/// gives the hourly and daily rates used for premiums and leave pay.
pub fn earned_rate_base(contract: &Contract) -> Decimal {
    let bonus = if contract.seniority_percent > Decimal::ZERO {
        percent_of(contract.base_salary, contract.seniority_percent)
    } else {
        Decimal::ZERO
    };
    contract.base_salary + bonus
}

/// Calculates the premium earning lines for a month's extra hours.
///
/// Emits one line per nonzero overtime bucket (workday, weekend, holiday)
/// and one line for night hours; zero buckets are omitted.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_work_premiums;
/// use payroll_engine::models::{DayKind, DayRecord, Timesheet};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let timesheet = Timesheet {
///     year: 2021,
///     month: 3,
///     days: vec![DayRecord {
///         date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
///         kind: DayKind::Workday,
///         worked_hours: Decimal::from_str("8").unwrap(),
///         overtime_hours: Decimal::from_str("2").unwrap(),
///         night_hours: Decimal::ZERO,
///         absence_code: None,
///     }],
/// };
/// let hourly = Decimal::from_str("13.880952").unwrap();
///
/// let lines = calculate_work_premiums(&timesheet, hourly);
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].code, "overtime_workday");
/// assert_eq!(lines[0].amount, Decimal::from_str("13.88").unwrap());
/// ```
pub fn calculate_work_premiums(timesheet: &Timesheet, hourly: Decimal) -> Vec<PayrollLine> {
    let buckets = [
        (
            DayKind::Workday,
            WORKDAY_OVERTIME_PREMIUM,
            "overtime_workday",
            "Overtime on workdays",
        ),
        (
            DayKind::Weekend,
            WEEKEND_OVERTIME_PREMIUM,
            "overtime_weekend",
            "Overtime on weekends",
        ),
        (
            DayKind::Holiday,
            HOLIDAY_OVERTIME_PREMIUM,
            "overtime_holiday",
            "Overtime on official holidays",
        ),
    ];

    let mut lines = Vec::new();
    for (kind, premium, code, name) in buckets {
        let hours = timesheet.overtime_hours_for(kind);
        if hours > Decimal::ZERO {
            let rate = round_ratio(hourly * premium);
            let amount = round_money(hours * rate);
            lines.push(PayrollLine::per_unit(code, name, hours, rate, amount));
        }
    }

    let night_hours = timesheet.total_night_hours();
    if night_hours > Decimal::ZERO {
        let rate = round_ratio(hourly * NIGHT_WORK_PREMIUM);
        let amount = round_money(night_hours * rate);
        lines.push(PayrollLine::per_unit(
            "night_work",
            "Night work premium",
            night_hours,
            rate,
            amount,
        ));
    }

    lines
}
