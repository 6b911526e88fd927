//! Wage-garnishment models.
//!
//! A garnishment is a court- or authority-ordered claim on an employee's
//! net salary. The engine only reads these records; incrementing
//! `paid_amount` and deactivating settled debts happens in the period-close
//! process that consumes the snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The legal category of a garnishment.
///
/// Alimony claims are satisfied before all other garnishments and are not
/// limited by the protected-income cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarnishmentKind {
    /// Court-ordered maintenance payments; fixed monthly amount.
    Alimony,
    /// Private enforcement under a court writ.
    JudicialEnforcement,
    /// Enforcement of public receivables (taxes, fines).
    PublicEnforcement,
}

impl GarnishmentKind {
    /// Returns the allocation-order rank of the category.
    ///
    /// Alimony ranks first; all other categories share a rank and are
    /// ordered among themselves by their numeric priority.
    pub fn rank(&self) -> u8 {
        match self {
            GarnishmentKind::Alimony => 0,
            GarnishmentKind::JudicialEnforcement | GarnishmentKind::PublicEnforcement => 1,
        }
    }
}

/// An active claim on an employee's net salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garnishment {
    /// Unique identifier; carried into the resulting deduction line so the
    /// closing process can post the withheld amount back onto this record.
    pub id: Uuid,
    /// Display name used on the deduction line.
    pub name: String,
    /// The legal category of the claim.
    pub kind: GarnishmentKind,
    /// Total debt to collect; open-ended claims (typically alimony) omit it.
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    /// Amount withheld so far. Never exceeds `total_amount` once set.
    #[serde(default)]
    pub paid_amount: Decimal,
    /// Fixed monthly amount; alimony only.
    #[serde(default)]
    pub monthly_amount: Option<Decimal>,
    /// Priority rank among non-alimony garnishments; lower is served first.
    pub priority: u32,
    /// Whether the debtor supports dependents; raises the protected-income
    /// floor for the employee as a whole.
    #[serde(default)]
    pub supports_dependents: bool,
    /// Whether the garnishment is still being collected. A fully paid
    /// garnishment is deactivated by the closing process.
    pub active: bool,
}

impl Garnishment {
    /// Returns the debt still to be collected, floored at zero.
    ///
    /// `None` means the claim is open-ended and never exhausts.
    pub fn remaining_debt(&self) -> Option<Decimal> {
        self.total_amount
            .map(|total| (total - self.paid_amount).max(Decimal::ZERO))
    }

    /// Returns true when a bounded claim has been collected in full.
    pub fn is_settled(&self) -> bool {
        self.total_amount
            .is_some_and(|total| self.paid_amount >= total)
    }
}
