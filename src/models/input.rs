//! Calculation input bundle.
//!
//! The caller resolves every fact the computation needs (contract,
//! attendance, calendar, legislation rows, ad-hoc items, garnishments)
//! and freezes them into a [`CalculationInput`] before invoking the
//! engine. The engine never reaches outside this bundle.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    Contract, ContributionSchedule, EmployeeProfile, Garnishment, IncomeThreshold, LegalRates,
    MonthCalendar, Timesheet,
};

/// A pre-resolved ad-hoc pay item for the month (bonus, premium, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningItem {
    /// Short code identifying the item type.
    pub code: String,
    /// Display name used on the earning line.
    pub name: String,
    /// The resolved amount to pay.
    pub amount: Decimal,
}

/// A pre-resolved ad-hoc deduction for the month (advance, fee, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionItem {
    /// Short code identifying the item type.
    pub code: String,
    /// Display name used on the deduction line.
    pub name: String,
    /// The resolved amount to withhold.
    pub amount: Decimal,
}

/// The complete, frozen input for one employee's monthly calculation.
///
/// Built once per call and never mutated. Referential consistency (the
/// timesheet matching the calendar month, rates being effective for the
/// period) is the caller's responsibility; the engine assumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The employee being computed.
    pub employee: EmployeeProfile,
    /// The employment contract in force for the month.
    pub contract: Contract,
    /// The resolved monthly timesheet.
    pub timesheet: Timesheet,
    /// The resolved work calendar for the month.
    pub calendar: MonthCalendar,
    /// Legislated national rates effective for the month.
    pub rates: LegalRates,
    /// Contribution schedule resolved for the employee's insured type and cohort.
    pub contributions: ContributionSchedule,
    /// Minimum insurable income for the employee's personnel group, if one applies.
    #[serde(default)]
    pub threshold: Option<IncomeThreshold>,
    /// Ad-hoc pay items valid for this month.
    #[serde(default)]
    pub earnings: Vec<EarningItem>,
    /// Ad-hoc deductions valid for this month.
    #[serde(default)]
    pub deductions: Vec<DeductionItem>,
    /// Active garnishments against the employee's salary.
    #[serde(default)]
    pub garnishments: Vec<Garnishment>,
}
