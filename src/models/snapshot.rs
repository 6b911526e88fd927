//! Payroll line and snapshot models.
//!
//! This module contains the [`PayrollLine`] row type and the immutable
//! [`PayrollSnapshot`] the engine produces. A snapshot is never recomputed
//! in place; a correction produces a new snapshot, and the facts embedded
//! in it remain the ground truth for the month regardless of later changes
//! to the source records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Contract, ContributionSchedule, EmployeeProfile, LegalRates};

/// How a payroll line's amount was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// A pre-resolved fixed amount, taken verbatim.
    Fixed,
    /// A percentage of a base amount.
    Percent,
    /// Derived by a calculation rule (proration, garnishment allocation).
    Calculated,
    /// A quantity multiplied by a unit rate.
    PerUnit,
}

/// One row of a payroll computation. Pure data, no behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// Short code identifying the line type.
    pub code: String,
    /// Display name for payslips and reports.
    pub name: String,
    /// How the amount was derived.
    pub kind: LineKind,
    /// The base amount a percentage or proration was applied to.
    #[serde(default)]
    pub base: Option<Decimal>,
    /// The percentage or unit rate applied.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// The quantity (days, hours) the rate was applied to.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// The final amount, rounded to monetary scale.
    pub amount: Decimal,
    /// Identifier of the originating record, e.g. the garnishment a
    /// withholding line was allocated for.
    #[serde(default)]
    pub source_id: Option<Uuid>,
}

impl PayrollLine {
    /// Creates a line for a pre-resolved fixed amount.
    pub fn fixed(code: &str, name: &str, amount: Decimal) -> Self {
        PayrollLine {
            code: code.to_string(),
            name: name.to_string(),
            kind: LineKind::Fixed,
            base: None,
            rate: None,
            quantity: None,
            amount,
            source_id: None,
        }
    }

    /// Creates a line for a percentage of a base amount.
    pub fn percent(code: &str, name: &str, base: Decimal, rate: Decimal, amount: Decimal) -> Self {
        PayrollLine {
            code: code.to_string(),
            name: name.to_string(),
            kind: LineKind::Percent,
            base: Some(base),
            rate: Some(rate),
            quantity: None,
            amount,
            source_id: None,
        }
    }

    /// Creates a line for a quantity at a unit rate.
    pub fn per_unit(
        code: &str,
        name: &str,
        quantity: Decimal,
        rate: Decimal,
        amount: Decimal,
    ) -> Self {
        PayrollLine {
            code: code.to_string(),
            name: name.to_string(),
            kind: LineKind::PerUnit,
            base: None,
            rate: Some(rate),
            quantity: Some(quantity),
            amount,
            source_id: None,
        }
    }

    /// Creates a line whose amount was derived by a calculation rule.
    pub fn calculated(code: &str, name: &str, amount: Decimal) -> Self {
        PayrollLine {
            code: code.to_string(),
            name: name.to_string(),
            kind: LineKind::Calculated,
            base: None,
            rate: None,
            quantity: None,
            amount,
            source_id: None,
        }
    }

    /// Attaches the base amount the line was derived from.
    pub fn with_base(mut self, base: Decimal) -> Self {
        self.base = Some(base);
        self
    }

    /// Attaches the quantity the line was derived from.
    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Attaches the identifier of the originating record.
    pub fn with_source(mut self, source_id: Uuid) -> Self {
        self.source_id = Some(source_id);
        self
    }
}

/// The attendance facts a snapshot preserves from the resolved timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetSummary {
    /// Working days in the month per the calendar.
    pub working_days: u32,
    /// Total working hours in the month per the calendar.
    pub working_hours: Decimal,
    /// Days the employee attended work.
    pub worked_days: u32,
    /// Total overtime hours across the month.
    pub overtime_hours: Decimal,
    /// Total night hours across the month.
    pub night_hours: Decimal,
    /// Days the employee was absent.
    pub absence_days: u32,
}

/// The immutable result of one employee's monthly payroll computation.
///
/// Embeds verbatim copies of the facts it was computed from, so the record
/// is self-contained and reproducible forever regardless of later rate or
/// contract changes elsewhere in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSnapshot {
    /// The employee the snapshot belongs to.
    pub employee_id: String,
    /// The computed year.
    pub year: i32,
    /// The computed month (1–12).
    pub month: u32,
    /// Earning lines: base pay, bonuses, premiums, leave pay, ad-hoc items.
    pub earnings: Vec<PayrollLine>,
    /// Deduction lines: employee insurance, income tax, ad-hoc items,
    /// garnishment withholdings.
    pub deductions: Vec<PayrollLine>,
    /// Employer-side contribution lines; informational, not withheld.
    pub employer_contributions: Vec<PayrollLine>,
    /// Sum of all earning lines.
    pub gross_salary: Decimal,
    /// Gross salary clamped to the legislated insurable-income bounds.
    pub insurable_income: Decimal,
    /// Total employee-side social insurance.
    pub employee_insurance: Decimal,
    /// The income-tax base after insurance and exemptions.
    pub tax_base: Decimal,
    /// The withheld income tax.
    pub income_tax: Decimal,
    /// Sum of all deduction lines including garnishments.
    pub total_deductions: Decimal,
    /// The amount payable to the employee.
    pub net_salary: Decimal,
    /// Total employer-side social insurance.
    pub employer_insurance: Decimal,
    /// Gross salary plus employer insurance.
    pub employer_cost: Decimal,
    /// Verbatim copy of the employee profile used.
    pub employee: EmployeeProfile,
    /// Verbatim copy of the contract facts used.
    pub contract: Contract,
    /// Verbatim copy of the legislated rates used.
    pub rates: LegalRates,
    /// Verbatim copy of the contribution schedule used.
    pub contributions: ContributionSchedule,
    /// The attendance facts the computation used.
    pub timesheet: TimesheetSummary,
}
