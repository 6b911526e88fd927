//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar;
mod employee;
mod garnishment;
mod identity;
mod input;
mod legislation;
mod snapshot;
mod timesheet;

pub use calendar::MonthCalendar;
pub use employee::{Contract, EmployeeProfile};
pub use garnishment::{Garnishment, GarnishmentKind};
pub use identity::{PensionCohort, birth_date_from_egn, pension_cohort_from_egn};
pub use input::{CalculationInput, DeductionItem, EarningItem};
pub use legislation::{ContributionSchedule, IncomeThreshold, LegalRates, SplitRate};
pub use snapshot::{LineKind, PayrollLine, PayrollSnapshot, TimesheetSummary};
pub use timesheet::{DayKind, DayRecord, Timesheet};
