//! Insurable income and social-insurance contributions.
//!
//! The insurable income is the gross salary clamped to the legislated
//! bounds: floored at the minimum insurable income for the employee's
//! personnel group (when one is configured) and capped at the national
//! maximum. Employee- and employer-side contributions are percentages of
//! that clamped income, one payroll line per nonzero rate.

use rust_decimal::Decimal;

use crate::calculation::rounding::percent_of;
use crate::models::{ContributionSchedule, IncomeThreshold, PayrollLine};

/// The contribution lines for one side of the schedule, with their sum.
#[derive(Debug, Clone)]
pub struct InsuranceResult {
    /// One payroll line per contribution with a nonzero rate.
    pub lines: Vec<PayrollLine>,
    /// The sum of all line amounts.
    pub total: Decimal,
}

/// Clamps the gross salary to the legislated insurable-income bounds.
///
/// The floor applies first, then the cap, so a threshold above the national
/// maximum still yields an income within the legal bound.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::clamp_insurable_income;
/// use payroll_engine::models::IncomeThreshold;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let threshold = IncomeThreshold {
///     personnel_group: "engineer".to_string(),
///     minimum_income: Decimal::from_str("1000.00").unwrap(),
/// };
/// let max = Decimal::from_str("3000.00").unwrap();
///
/// let clamped = clamp_insurable_income(
///     Decimal::from_str("800.00").unwrap(),
///     Some(&threshold),
///     max,
/// );
/// assert_eq!(clamped, Decimal::from_str("1000.00").unwrap());
/// ```
pub fn clamp_insurable_income(
    gross: Decimal,
    threshold: Option<&IncomeThreshold>,
    max_insurable: Decimal,
) -> Decimal {
    let mut income = gross;
    if let Some(threshold) = threshold {
        if income < threshold.minimum_income {
            income = threshold.minimum_income;
        }
    }
    if income > max_insurable {
        income = max_insurable;
    }
    income
}

/// Calculates the employee-side contribution deduction lines.
///
/// Emits pension, sickness, unemployment, supplementary-pension, and health
/// lines for every nonzero rate. A zero supplementary rate encodes cohort
/// ineligibility and produces no line.
pub fn employee_insurance(insurable: Decimal, schedule: &ContributionSchedule) -> InsuranceResult {
    let entries = [
        ("pension_employee", "Pension insurance", schedule.pension.employee),
        (
            "sickness_employee",
            "Sickness and maternity insurance",
            schedule.sickness.employee,
        ),
        (
            "unemployment_employee",
            "Unemployment insurance",
            schedule.unemployment.employee,
        ),
        (
            "supplementary_pension_employee",
            "Supplementary pension fund",
            schedule.supplementary_pension.employee,
        ),
        ("health_employee", "Health insurance", schedule.health.employee),
    ];

    collect_lines(insurable, &entries)
}

/// Calculates the employer-side contribution lines.
///
/// Mirrors [`employee_insurance`] with the employer-side rates and adds the
/// occupational-accident contribution and, when configured, the special
/// pension-fund surcharge.
pub fn employer_insurance(insurable: Decimal, schedule: &ContributionSchedule) -> InsuranceResult {
    let surcharge = schedule.pension_surcharge_percent.unwrap_or(Decimal::ZERO);
    let entries = [
        ("pension_employer", "Pension insurance", schedule.pension.employer),
        (
            "sickness_employer",
            "Sickness and maternity insurance",
            schedule.sickness.employer,
        ),
        (
            "unemployment_employer",
            "Unemployment insurance",
            schedule.unemployment.employer,
        ),
        (
            "supplementary_pension_employer",
            "Supplementary pension fund",
            schedule.supplementary_pension.employer,
        ),
        ("health_employer", "Health insurance", schedule.health.employer),
        (
            "accident_employer",
            "Occupational accident insurance",
            schedule.accident_percent,
        ),
        (
            "pension_surcharge_employer",
            "Special pension fund surcharge",
            surcharge,
        ),
    ];

    collect_lines(insurable, &entries)
}

fn collect_lines(insurable: Decimal, entries: &[(&str, &str, Decimal)]) -> InsuranceResult {
    let mut lines = Vec::new();
    let mut total = Decimal::ZERO;

    for &(code, name, rate) in entries {
        if rate <= Decimal::ZERO {
            continue;
        }
        let amount = percent_of(insurable, rate);
        total += amount;
        lines.push(PayrollLine::percent(code, name, insurable, rate, amount));
    }

    InsuranceResult { lines, total }
}
