//! Income-tax base and flat tax.

use rust_decimal::Decimal;

use crate::calculation::rounding::percent_of;
use crate::models::PayrollLine;

/// Calculates the income-tax base for the month.
///
/// The base is the gross salary minus the employee-side insurance, further
/// reduced by the disability exemption when the employee carries the flag
/// and an exemption is legislated, and floored at zero.
pub fn calculate_tax_base(
    gross: Decimal,
    employee_insurance: Decimal,
    disabled: bool,
    exemption: Option<Decimal>,
) -> Decimal {
    let mut base = gross - employee_insurance;
    if disabled {
        if let Some(exemption) = exemption {
            base -= exemption;
        }
    }
    base.max(Decimal::ZERO)
}

/// Calculates the income-tax deduction line at the flat rate.
pub fn calculate_income_tax(tax_base: Decimal, flat_percent: Decimal) -> PayrollLine {
    let amount = percent_of(tax_base, flat_percent);
    PayrollLine::percent("income_tax", "Income tax", tax_base, flat_percent, amount)
}
