//! Legislation configuration for the payroll engine.
//!
//! This module loads legislated rates, contribution schedules, and
//! minimum-insurable-income thresholds from YAML files and resolves the
//! rows effective for a given year. The engine itself never reads
//! configuration; callers use this layer to build a
//! [`crate::models::CalculationInput`].

mod loader;
mod types;

pub use loader::LegislationLoader;
pub use types::{CohortSchedules, YearLegislation};
