//! Base-salary proration and seniority bonus.
//!
//! The monthly base salary is owed in full when the employee attended every
//! working day of the month; otherwise it is prorated by attended days. The
//! seniority bonus is a percentage of the base salary and prorates the same
//! way.

use rust_decimal::Decimal;

use crate::calculation::rounding::{percent_of, round_money};
use crate::models::{Contract, PayrollLine};

/// Prorates a monthly amount by attended days.
///
/// Attendance at or above the month's working days yields the full amount;
/// a month with zero working days yields zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::prorate_by_days;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = Decimal::from_str("2200.00").unwrap();
/// assert_eq!(
///     prorate_by_days(base, 19, 21),
///     Decimal::from_str("1990.48").unwrap(),
/// );
/// assert_eq!(prorate_by_days(base, 21, 21), base);
/// ```
pub fn prorate_by_days(amount: Decimal, worked_days: u32, working_days: u32) -> Decimal {
    if working_days == 0 {
        return Decimal::ZERO;
    }
    if worked_days >= working_days {
        return round_money(amount);
    }
    round_money(amount * Decimal::from(worked_days) / Decimal::from(working_days))
}

/// Calculates the base-salary earning line for the month.
pub fn calculate_base_pay(contract: &Contract, worked_days: u32, working_days: u32) -> PayrollLine {
    let amount = prorate_by_days(contract.base_salary, worked_days, working_days);
    PayrollLine::calculated("base_salary", "Base salary", amount)
        .with_base(contract.base_salary)
        .with_quantity(Decimal::from(worked_days))
}

/// Calculates the seniority-bonus earning line, if the contract grants one.
///
/// Returns `None` when the contract carries no positive seniority percent.
pub fn calculate_seniority_bonus(
    contract: &Contract,
    worked_days: u32,
    working_days: u32,
) -> Option<PayrollLine> {
    if contract.seniority_percent <= Decimal::ZERO {
        return None;
    }
    let full_bonus = percent_of(contract.base_salary, contract.seniority_percent);
    let amount = prorate_by_days(full_bonus, worked_days, working_days);
    Some(
        PayrollLine::percent(
            "seniority_bonus",
            "Seniority bonus",
            contract.base_salary,
            contract.seniority_percent,
            amount,
        )
        .with_quantity(Decimal::from(worked_days)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineKind;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn contract(base: &str, seniority: &str) -> Contract {
        Contract {
            base_salary: dec(base),
            seniority_percent: dec(seniority),
            personnel_group: "clerk".to_string(),
            insured_type: "01".to_string(),
        }
    }

    #[test]
    fn test_full_attendance_pays_full_salary() {
        let line = calculate_base_pay(&contract("3000.00", "0"), 22, 22);
        assert_eq!(line.amount, dec("3000.00"));
        assert_eq!(line.kind, LineKind::Calculated);
        assert_eq!(line.base, Some(dec("3000.00")));
    }

    #[test]
    fn test_partial_attendance_prorates_and_rounds() {
        // 2200 * 19 / 21 = 1990.4761..., rounded half-up.
        let line = calculate_base_pay(&contract("2200.00", "0"), 19, 21);
        assert_eq!(line.amount, dec("1990.48"));
        assert_eq!(line.quantity, Some(dec("19")));
    }

    #[test]
    fn test_attendance_above_working_days_caps_at_full_salary() {
        let line = calculate_base_pay(&contract("3000.00", "0"), 23, 22);
        assert_eq!(line.amount, dec("3000.00"));
    }

    #[test]
    fn test_zero_working_days_pays_zero() {
        let line = calculate_base_pay(&contract("3000.00", "0"), 0, 0);
        assert_eq!(line.amount, Decimal::ZERO);
    }

    #[test]
    fn test_seniority_bonus_absent_without_percent() {
        assert!(calculate_seniority_bonus(&contract("3000.00", "0"), 22, 22).is_none());
    }

    #[test]
    fn test_seniority_bonus_full_month() {
        let line = calculate_seniority_bonus(&contract("2200.00", "6.0"), 21, 21).unwrap();
        assert_eq!(line.amount, dec("132.00"));
        assert_eq!(line.rate, Some(dec("6.0")));
        assert_eq!(line.base, Some(dec("2200.00")));
    }

    #[test]
    fn test_seniority_bonus_prorates_like_base_pay() {
        // Full bonus 132.00, prorated 19/21 = 119.4285... -> 119.43.
        let line = calculate_seniority_bonus(&contract("2200.00", "6.0"), 19, 21).unwrap();
        assert_eq!(line.amount, dec("119.43"));
    }

    #[test]
    fn test_seniority_bonus_zero_working_days_pays_zero() {
        let line = calculate_seniority_bonus(&contract("2200.00", "6.0"), 0, 0).unwrap();
        assert_eq!(line.amount, Decimal::ZERO);
    }

    #[test]
    fn test_negative_seniority_percent_is_treated_as_absent() {
        assert!(calculate_seniority_bonus(&contract("2200.00", "-1.0"), 21, 21).is_none());
    }
}
