//! Garnishment distribution.
//!
//! Given the month's pre-garnishment net salary and the legal minimum wage,
//! the distributor decides how much each active garnishment receives,
//! respecting the protected-income tiers of civil-procedure law, the
//! alimony exemption from those tiers, and the priority ordering among
//! enforcement claims.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::rounding::round_money;
use crate::models::{Garnishment, GarnishmentKind};

/// Protected-wage multiple kept from high earners without dependents.
const PROTECTED_WAGE_MULTIPLE: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Protected-wage multiple kept from high earners with dependents.
const PROTECTED_WAGE_MULTIPLE_DEPENDENTS: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// One garnishment's share of this month's withholding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarnishmentDeduction {
    /// The garnishment the amount was allocated for.
    pub garnishment_id: Uuid,
    /// Display name carried onto the deduction line.
    pub name: String,
    /// The amount withheld this month.
    pub amount: Decimal,
}

/// Computes the legally garnishable portion of a net salary.
///
/// The tiers follow the ratio of net salary to the minimum wage:
///
/// * at or below the minimum wage: fully protected, nothing garnishable;
/// * below twice the minimum wage: one third garnishable (one quarter when
///   the debtor supports dependents);
/// * from twice up to four times: one half (one third with dependents);
/// * at four times and above: everything beyond twice the minimum wage
///   (beyond 2.5 times with dependents).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::garnishable_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let net = Decimal::from_str("1500.00").unwrap();
/// let min_wage = Decimal::from_str("933.00").unwrap();
/// assert_eq!(
///     garnishable_amount(net, min_wage, false),
///     Decimal::from_str("500.00").unwrap(),
/// );
/// ```
pub fn garnishable_amount(net: Decimal, minimum_wage: Decimal, has_dependents: bool) -> Decimal {
    if net <= minimum_wage {
        return Decimal::ZERO;
    }

    let twice = minimum_wage * Decimal::TWO;
    let four_times = twice * Decimal::TWO;

    let amount = if net < twice {
        if has_dependents {
            net / Decimal::from(4)
        } else {
            net / Decimal::from(3)
        }
    } else if net < four_times {
        if has_dependents {
            net / Decimal::from(3)
        } else {
            net / Decimal::TWO
        }
    } else if has_dependents {
        net - minimum_wage * PROTECTED_WAGE_MULTIPLE_DEPENDENTS
    } else {
        net - minimum_wage * PROTECTED_WAGE_MULTIPLE
    };

    round_money(amount)
}

/// Distributes this month's withholding across the active garnishments.
///
/// Alimony claims are served first and take their fixed monthly amount from
/// the remaining net regardless of the garnishable cap, but shrink the cap
/// left for the enforcement claims that follow. Enforcement claims are
/// served in ascending priority order, each taking the smaller of the
/// remaining cap and its remaining debt, until the cap is exhausted.
///
/// Only nonzero allocations are returned. Inactive garnishments, claims
/// with no debt remaining, and alimony records without a monthly amount are
/// skipped. An empty garnishment list or a non-positive net salary yields
/// an empty result.
pub fn distribute(
    garnishments: &[Garnishment],
    net_salary: Decimal,
    minimum_wage: Decimal,
) -> Vec<GarnishmentDeduction> {
    if garnishments.is_empty() || net_salary <= Decimal::ZERO {
        return Vec::new();
    }

    // The protection is a property of the debtor, not of a single debt:
    // one flagged garnishment raises the floor for all of them.
    let has_dependents = garnishments
        .iter()
        .any(|g| g.active && g.supports_dependents);

    let mut cap = garnishable_amount(net_salary, minimum_wage, has_dependents);
    let mut remaining_net = net_salary;

    let mut ordered: Vec<&Garnishment> = garnishments.iter().filter(|g| g.active).collect();
    ordered.sort_by_key(|g| (g.kind.rank(), g.priority));

    let mut allocations = Vec::new();

    for garnishment in ordered {
        if remaining_net <= Decimal::ZERO {
            break;
        }

        let amount = match garnishment.kind {
            GarnishmentKind::Alimony => {
                let due = garnishment.monthly_amount.unwrap_or(Decimal::ZERO);
                let taken = due.min(remaining_net);
                if taken > Decimal::ZERO {
                    cap = (cap - taken).max(Decimal::ZERO);
                }
                taken
            }
            GarnishmentKind::JudicialEnforcement | GarnishmentKind::PublicEnforcement => {
                if cap <= Decimal::ZERO {
                    break;
                }
                let taken = match garnishment.remaining_debt() {
                    Some(debt) if debt <= Decimal::ZERO => continue,
                    Some(debt) => cap.min(debt),
                    None => cap,
                };
                cap -= taken;
                taken
            }
        };

        if amount > Decimal::ZERO {
            remaining_net -= amount;
            allocations.push(GarnishmentDeduction {
                garnishment_id: garnishment.id,
                name: garnishment.name.clone(),
                amount,
            });
        }
    }

    allocations
}
