//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for deriving a monthly
//! payroll: fixed-point rounding policy, base-salary proration, seniority
//! bonus, overtime and night premiums, leave-day compensation, insurable
//! income clamping with employee and employer contributions, income tax,
//! garnishment distribution, and the orchestrating engine.

mod base_pay;
mod engine;
mod garnishment;
mod insurance;
mod leave;
mod premiums;
mod rounding;
mod tax;

pub use base_pay::{calculate_base_pay, calculate_seniority_bonus, prorate_by_days};
pub use engine::calculate;
pub use garnishment::{GarnishmentDeduction, distribute, garnishable_amount};
pub use insurance::{
    InsuranceResult, clamp_insurable_income, employee_insurance, employer_insurance,
};
pub use leave::{
    ANNUAL_LEAVE_CODES, EMPLOYER_SICK_DAY_CAP, SICK_LEAVE_CODES, SICK_PAY_PERCENT,
    calculate_leave_pay,
};
pub use premiums::{
    HOLIDAY_OVERTIME_PREMIUM, NIGHT_WORK_PREMIUM, WEEKEND_OVERTIME_PREMIUM,
    WORKDAY_OVERTIME_PREMIUM, calculate_work_premiums, earned_rate_base,
};
pub use rounding::{
    MONEY_SCALE, RATIO_SCALE, daily_rate, hourly_rate, percent_of, round_money, round_ratio,
};
pub use tax::{calculate_income_tax, calculate_tax_base};
