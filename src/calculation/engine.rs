//! The payroll calculation engine.
//!
//! [`calculate`] turns one employee's frozen monthly facts into an
//! immutable [`PayrollSnapshot`] by running a fixed sequence of steps:
//! base pay and seniority bonus, overtime and night premiums, leave
//! compensation, ad-hoc earnings, insurable income and employee insurance,
//! income tax, ad-hoc deductions, garnishment distribution, and employer
//! contributions. The function is pure and deterministic: identical input
//! yields an identical snapshot, forever.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculation::base_pay::{calculate_base_pay, calculate_seniority_bonus};
use crate::calculation::garnishment::distribute;
use crate::calculation::insurance::{
    clamp_insurable_income, employee_insurance, employer_insurance,
};
use crate::calculation::leave::calculate_leave_pay;
use crate::calculation::premiums::{calculate_work_premiums, earned_rate_base};
use crate::calculation::rounding::{daily_rate, hourly_rate, round_money};
use crate::calculation::tax::{calculate_income_tax, calculate_tax_base};
use crate::error::EngineResult;
use crate::models::{CalculationInput, PayrollLine, PayrollSnapshot, TimesheetSummary};

/// Computes one employee's monthly payroll snapshot.
///
/// The input bundle must be fully resolved and internally consistent; the
/// engine validates nothing beyond the zero-denominator guards that are
/// legitimate business cases (a month without working days). A failure is
/// fatal to this single employee only; a batch orchestrator is expected to
/// catch it and continue with the next employee.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::calculation::calculate;
/// # fn input() -> payroll_engine::models::CalculationInput { unimplemented!() }
///
/// let snapshot = calculate(&input()).unwrap();
/// assert_eq!(snapshot.net_salary, snapshot.gross_salary - snapshot.total_deductions);
/// ```
pub fn calculate(input: &CalculationInput) -> EngineResult<PayrollSnapshot> {
    let contract = &input.contract;
    let calendar = &input.calendar;
    let working_days = calendar.working_days;
    let worked_days = input.timesheet.worked_days();

    // Steps 1-2: base salary and seniority bonus, prorated by attendance.
    let mut earnings = Vec::new();
    earnings.push(calculate_base_pay(contract, worked_days, working_days));
    if let Some(line) = calculate_seniority_bonus(contract, worked_days, working_days) {
        earnings.push(line);
    }

    // Step 3: hourly and daily rates from the full-time-equivalent base.
    let rate_base = earned_rate_base(contract);
    let hourly = hourly_rate(rate_base, calendar.working_hours);
    let daily = daily_rate(rate_base, working_days);
    debug!(%rate_base, %hourly, %daily, "derived premium rates");

    // Steps 4-6: premiums, leave compensation, ad-hoc earnings.
    earnings.extend(calculate_work_premiums(&input.timesheet, hourly));
    earnings.extend(calculate_leave_pay(&input.timesheet, daily));
    for item in &input.earnings {
        earnings.push(PayrollLine::fixed(&item.code, &item.name, item.amount));
    }

    // Step 7: gross salary.
    let gross = round_money(earnings.iter().map(|line| line.amount).sum());

    // Step 8: insurable income and employee-side insurance.
    let insurable = clamp_insurable_income(
        gross,
        input.threshold.as_ref(),
        input.rates.max_insurable_income,
    );
    let employee_side = employee_insurance(insurable, &input.contributions);

    // Steps 9-10: tax base and income tax.
    let tax_base = calculate_tax_base(
        gross,
        employee_side.total,
        input.employee.disabled,
        input.rates.disability_exemption,
    );
    let tax_line = calculate_income_tax(tax_base, input.rates.flat_tax_percent);
    let income_tax = tax_line.amount;

    // Step 11: ad-hoc deductions.
    let mut deductions = employee_side.lines;
    let employee_insurance_total = employee_side.total;
    deductions.push(tax_line);
    let mut other_deductions = Decimal::ZERO;
    for item in &input.deductions {
        other_deductions += item.amount;
        deductions.push(PayrollLine::fixed(&item.code, &item.name, item.amount));
    }

    // Step 12: net before garnishment.
    let pre_garnishment_net =
        round_money(gross - (employee_insurance_total + income_tax + other_deductions));

    // Step 13: garnishment distribution.
    let mut garnishment_total = Decimal::ZERO;
    for allocation in distribute(
        &input.garnishments,
        pre_garnishment_net,
        input.rates.minimum_wage,
    ) {
        garnishment_total += allocation.amount;
        deductions.push(
            PayrollLine::calculated("garnishment", &allocation.name, allocation.amount)
                .with_source(allocation.garnishment_id),
        );
    }

    // Step 14: final net and total deductions.
    let net = round_money(pre_garnishment_net - garnishment_total);
    let total_deductions = round_money(
        employee_insurance_total + income_tax + other_deductions + garnishment_total,
    );

    // Step 15: employer-side contributions.
    let employer_side = employer_insurance(insurable, &input.contributions);
    let employer_cost = round_money(gross + employer_side.total);

    info!(
        employee = %input.employee.id,
        year = input.timesheet.year,
        month = input.timesheet.month,
        %gross,
        %net,
        "payroll computed"
    );

    // Step 16: freeze the snapshot with the facts it was computed from.
    Ok(PayrollSnapshot {
        employee_id: input.employee.id.clone(),
        year: input.timesheet.year,
        month: input.timesheet.month,
        earnings,
        deductions,
        employer_contributions: employer_side.lines,
        gross_salary: gross,
        insurable_income: insurable,
        employee_insurance: employee_insurance_total,
        tax_base,
        income_tax,
        total_deductions,
        net_salary: net,
        employer_insurance: employer_side.total,
        employer_cost,
        employee: input.employee.clone(),
        contract: input.contract.clone(),
        rates: input.rates.clone(),
        contributions: input.contributions.clone(),
        timesheet: TimesheetSummary {
            working_days,
            working_hours: calendar.working_hours,
            worked_days,
            overtime_hours: input.timesheet.total_overtime_hours(),
            night_hours: input.timesheet.total_night_hours(),
            absence_days: input.timesheet.absence_days(),
        },
    })
}
