//! Configuration types for legislation data.
//!
//! This module contains the strongly-typed structures that are
//! deserialized from the YAML legislation files, one file per calendar
//! year.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{ContributionSchedule, LegalRates};

/// Contribution schedules for one insured-type code, split by pension
/// cohort.
///
/// Employees born after the universal-fund cutoff use the `universal`
/// schedule; older cohorts use `statutory_only`, which carries a zero
/// supplementary-pension rate.
#[derive(Debug, Clone, Deserialize)]
pub struct CohortSchedules {
    /// Schedule for employees insured in a universal pension fund.
    pub universal: ContributionSchedule,
    /// Schedule for employees on statutory pension insurance only.
    pub statutory_only: ContributionSchedule,
}

/// The legislation data effective for one calendar year.
#[derive(Debug, Clone, Deserialize)]
pub struct YearLegislation {
    /// The calendar year the data applies to.
    pub year: i32,
    /// National wage bounds and tax rates.
    pub rates: LegalRates,
    /// Contribution schedules keyed by insured-type code.
    pub contributions: HashMap<String, CohortSchedules>,
    /// Minimum monthly insurable income keyed by personnel-group code.
    #[serde(default)]
    pub thresholds: HashMap<String, Decimal>,
}
