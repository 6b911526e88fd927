//! Legislated rate models.
//!
//! These types carry the legislation facts effective for the computed
//! month: national wage bounds and tax rates, the social-insurance
//! contribution schedule resolved for the employee's insured type and
//! pension cohort, and the optional minimum-insurable-income threshold for
//! the employee's personnel group.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Nationally legislated rates effective for the computed month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalRates {
    /// Minimum monthly wage; also the protected-income floor for garnishment.
    pub minimum_wage: Decimal,
    /// Maximum monthly insurable income.
    pub max_insurable_income: Decimal,
    /// Flat income-tax rate as a percentage.
    pub flat_tax_percent: Decimal,
    /// Monthly tax-base exemption for employees with reduced working
    /// capacity, when one is legislated.
    #[serde(default)]
    pub disability_exemption: Option<Decimal>,
}

/// A contribution percentage split between employer and employee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRate {
    /// The employer-side percentage.
    pub employer: Decimal,
    /// The employee-side percentage.
    pub employee: Decimal,
}

impl SplitRate {
    /// A zero rate on both sides.
    pub const ZERO: SplitRate = SplitRate {
        employer: Decimal::ZERO,
        employee: Decimal::ZERO,
    };

    /// Returns the combined employer + employee percentage.
    pub fn total(&self) -> Decimal {
        self.employer + self.employee
    }
}

/// The social-insurance contribution schedule resolved for one employee.
///
/// Rates are resolved by the caller (or the [`crate::config`] layer) for
/// the employee's insured-type code and pension cohort. A zero
/// [`supplementary_pension`](Self::supplementary_pension) rate encodes
/// cohort ineligibility; the engine emits no line for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionSchedule {
    /// Statutory pension insurance.
    pub pension: SplitRate,
    /// Sickness and maternity insurance.
    pub sickness: SplitRate,
    /// Unemployment insurance.
    pub unemployment: SplitRate,
    /// Supplementary (universal fund) pension insurance.
    pub supplementary_pension: SplitRate,
    /// Health insurance.
    pub health: SplitRate,
    /// Occupational-accident insurance; employer-only.
    pub accident_percent: Decimal,
    /// Special pension-fund surcharge for particular insured-type codes;
    /// employer-only, absent for ordinary contracts.
    #[serde(default)]
    pub pension_surcharge_percent: Option<Decimal>,
}

/// Minimum monthly insurable income for a personnel group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeThreshold {
    /// The personnel-group code the threshold applies to.
    pub personnel_group: String,
    /// The minimum monthly insurable income.
    pub minimum_income: Decimal,
}
