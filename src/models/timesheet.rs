//! Timesheet model and related types.
//!
//! This module defines the resolved monthly timesheet the engine consumes:
//! one record per calendar day with the day classification, attended and
//! extra hours, and the absence code for days not worked.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a single timesheet day.
///
/// The classification drives both base-salary proration (only `Workday`
/// entries count as attendance) and the premium multiplier applied to any
/// overtime hours logged on the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// An ordinary working day the employee attended.
    Workday,
    /// A weekend day.
    Weekend,
    /// An official public holiday.
    Holiday,
    /// A working day the employee was absent; carries an absence code.
    Absence,
}

/// One day of a resolved timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// The day classification.
    pub kind: DayKind,
    /// Hours worked within the regular schedule.
    #[serde(default)]
    pub worked_hours: Decimal,
    /// Overtime hours worked beyond the regular schedule.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Hours worked during the legal night interval.
    #[serde(default)]
    pub night_hours: Decimal,
    /// Absence code for `Absence` days; selects the compensation rule.
    #[serde(default)]
    pub absence_code: Option<u16>,
}

/// A resolved monthly timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    /// The year the timesheet covers.
    pub year: i32,
    /// The month the timesheet covers (1–12).
    pub month: u32,
    /// Daily entries for the month.
    pub days: Vec<DayRecord>,
}

impl Timesheet {
    /// Returns the number of days the employee attended work.
    ///
    /// Only `Workday` entries count; weekend or holiday attendance is paid
    /// through overtime premiums, not through base-salary proration.
    pub fn worked_days(&self) -> u32 {
        self.days
            .iter()
            .filter(|d| d.kind == DayKind::Workday)
            .count() as u32
    }

    /// Returns the total worked hours across all entries.
    pub fn total_worked_hours(&self) -> Decimal {
        self.days.iter().map(|d| d.worked_hours).sum()
    }

    /// Returns the total overtime hours logged on days of the given kind.
    pub fn overtime_hours_for(&self, kind: DayKind) -> Decimal {
        self.days
            .iter()
            .filter(|d| d.kind == kind)
            .map(|d| d.overtime_hours)
            .sum()
    }

    /// Returns the total overtime hours across all entries.
    pub fn total_overtime_hours(&self) -> Decimal {
        self.days.iter().map(|d| d.overtime_hours).sum()
    }

    /// Returns the total night hours across all entries.
    pub fn total_night_hours(&self) -> Decimal {
        self.days.iter().map(|d| d.night_hours).sum()
    }

    /// Returns the number of absence days in the month.
    pub fn absence_days(&self) -> u32 {
        self.days
            .iter()
            .filter(|d| d.kind == DayKind::Absence)
            .count() as u32
    }
}
