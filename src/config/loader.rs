//! Legislation loading functionality.
//!
//! This module provides the [`LegislationLoader`] type for loading
//! legislated rates, contribution schedules, and thresholds from YAML
//! files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{IncomeThreshold, LegalRates, PensionCohort};

use super::types::YearLegislation;

/// Loads and provides access to legislation data.
///
/// The `LegislationLoader` reads YAML files from a directory, one file per
/// calendar year, and resolves the rates, contribution schedule, and
/// threshold rows effective for a given year. Resolution failures are the
/// missing-resolution errors of the engine's error taxonomy: fatal for the
/// affected employee, never silently defaulted.
///
/// # Directory Structure
///
/// ```text
/// legislation/
/// ├── 2020.yaml
/// └── 2021.yaml
/// ```
///
/// Each file holds one [`YearLegislation`] document:
///
/// ```yaml
/// year: 2021
/// rates:
///   minimum_wage: "650.00"
///   max_insurable_income: "3000.00"
///   flat_tax_percent: "10.0"
///   disability_exemption: "660.00"
/// contributions:
///   "01":
///     universal:
///       pension: { employer: "8.22", employee: "6.58" }
///       sickness: { employer: "2.1", employee: "1.4" }
///       unemployment: { employer: "0.6", employee: "0.4" }
///       supplementary_pension: { employer: "2.8", employee: "2.2" }
///       health: { employer: "4.8", employee: "3.2" }
///       accident_percent: "0.7"
///     statutory_only:
///       pension: { employer: "10.92", employee: "8.78" }
///       sickness: { employer: "2.1", employee: "1.4" }
///       unemployment: { employer: "0.6", employee: "0.4" }
///       supplementary_pension: { employer: "0", employee: "0" }
///       health: { employer: "4.8", employee: "3.2" }
///       accident_percent: "0.7"
/// thresholds:
///   engineer: "1000.00"
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::LegislationLoader;
/// use payroll_engine::models::PensionCohort;
///
/// let loader = LegislationLoader::load("./legislation").unwrap();
/// let rates = loader.rates_for(2021).unwrap();
/// let schedule = loader
///     .contributions_for(2021, "01", PensionCohort::Universal)
///     .unwrap();
/// println!("minimum wage: {}", rates.minimum_wage);
/// println!("employee pension rate: {}", schedule.pension.employee);
/// ```
#[derive(Debug, Clone)]
pub struct LegislationLoader {
    years: HashMap<i32, YearLegislation>,
}

impl LegislationLoader {
    /// Loads legislation data from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the directory holding one YAML file per year
    ///
    /// # Returns
    ///
    /// Returns a `LegislationLoader` on success, or an error if the
    /// directory is missing, contains no YAML files, or any file fails to
    /// parse.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(EngineError::ConfigNotFound { path: path_str });
        }

        let entries = fs::read_dir(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut years = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;

            let file_path = entry.path();
            if file_path.extension().is_some_and(|ext| ext == "yaml") {
                let legislation = Self::load_yaml(&file_path)?;
                years.insert(legislation.year, legislation);
            }
        }

        if years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no legislation files found)", path_str),
            });
        }

        Ok(Self { years })
    }

    /// Loads and parses a single YAML legislation file.
    fn load_yaml(path: &Path) -> EngineResult<YearLegislation> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the national rates effective for a year.
    pub fn rates_for(&self, year: i32) -> EngineResult<&LegalRates> {
        self.years
            .get(&year)
            .map(|legislation| &legislation.rates)
            .ok_or(EngineError::RatesNotFound { year })
    }

    /// Returns the contribution schedule for an insured type and cohort.
    pub fn contributions_for(
        &self,
        year: i32,
        insured_type: &str,
        cohort: PensionCohort,
    ) -> EngineResult<&crate::models::ContributionSchedule> {
        let legislation = self
            .years
            .get(&year)
            .ok_or(EngineError::RatesNotFound { year })?;

        let schedules = legislation.contributions.get(insured_type).ok_or_else(|| {
            EngineError::ContributionsNotFound {
                year,
                insured_type: insured_type.to_string(),
            }
        })?;

        Ok(match cohort {
            PensionCohort::Universal => &schedules.universal,
            PensionCohort::StatutoryOnly => &schedules.statutory_only,
        })
    }

    /// Returns the minimum-insurable-income threshold for a personnel
    /// group, or `None` when the year or group has none configured.
    pub fn threshold_for(&self, year: i32, personnel_group: &str) -> Option<IncomeThreshold> {
        self.years
            .get(&year)
            .and_then(|legislation| legislation.thresholds.get(personnel_group))
            .map(|minimum_income| IncomeThreshold {
                personnel_group: personnel_group.to_string(),
                minimum_income: *minimum_income,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use std::str::FromStr;

    const YEAR_2021: &str = r#"
year: 2021
rates:
  minimum_wage: "650.00"
  max_insurable_income: "3000.00"
  flat_tax_percent: "10.0"
  disability_exemption: "660.00"
contributions:
  "01":
    universal:
      pension: { employer: "8.22", employee: "6.58" }
      sickness: { employer: "2.1", employee: "1.4" }
      unemployment: { employer: "0.6", employee: "0.4" }
      supplementary_pension: { employer: "2.8", employee: "2.2" }
      health: { employer: "4.8", employee: "3.2" }
      accident_percent: "0.7"
    statutory_only:
      pension: { employer: "10.92", employee: "8.78" }
      sickness: { employer: "2.1", employee: "1.4" }
      unemployment: { employer: "0.6", employee: "0.4" }
      supplementary_pension: { employer: "0", employee: "0" }
      health: { employer: "4.8", employee: "3.2" }
      accident_percent: "0.7"
thresholds:
  engineer: "1000.00"
"#;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll_engine_legislation_{}_{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_fixture(name: &str) -> PathBuf {
        let dir = fixture_dir(name);
        fs::write(dir.join("2021.yaml"), YEAR_2021).unwrap();
        dir
    }

    #[test]
    fn test_load_resolves_rates_for_year() {
        let dir = write_fixture("rates");
        let loader = LegislationLoader::load(&dir).unwrap();

        let rates = loader.rates_for(2021).unwrap();
        assert_eq!(rates.minimum_wage, dec("650.00"));
        assert_eq!(rates.max_insurable_income, dec("3000.00"));
        assert_eq!(rates.disability_exemption, Some(dec("660.00")));
    }

    #[test]
    fn test_missing_year_returns_rates_not_found() {
        let dir = write_fixture("missing_year");
        let loader = LegislationLoader::load(&dir).unwrap();

        match loader.rates_for(2019).unwrap_err() {
            EngineError::RatesNotFound { year } => assert_eq!(year, 2019),
            other => panic!("Expected RatesNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_contributions_resolved_by_cohort() {
        let dir = write_fixture("cohorts");
        let loader = LegislationLoader::load(&dir).unwrap();

        let universal = loader
            .contributions_for(2021, "01", PensionCohort::Universal)
            .unwrap();
        assert_eq!(universal.pension.employee, dec("6.58"));
        assert_eq!(universal.supplementary_pension.employee, dec("2.2"));

        let statutory = loader
            .contributions_for(2021, "01", PensionCohort::StatutoryOnly)
            .unwrap();
        assert_eq!(statutory.pension.employee, dec("8.78"));
        assert_eq!(statutory.supplementary_pension.employee, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_insured_type_returns_contributions_not_found() {
        let dir = write_fixture("insured_type");
        let loader = LegislationLoader::load(&dir).unwrap();

        match loader
            .contributions_for(2021, "99", PensionCohort::Universal)
            .unwrap_err()
        {
            EngineError::ContributionsNotFound { year, insured_type } => {
                assert_eq!(year, 2021);
                assert_eq!(insured_type, "99");
            }
            other => panic!("Expected ContributionsNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_threshold_resolved_for_known_group() {
        let dir = write_fixture("threshold");
        let loader = LegislationLoader::load(&dir).unwrap();

        let threshold = loader.threshold_for(2021, "engineer").unwrap();
        assert_eq!(threshold.personnel_group, "engineer");
        assert_eq!(threshold.minimum_income, dec("1000.00"));
    }

    #[test]
    fn test_threshold_absent_for_unknown_group_or_year() {
        let dir = write_fixture("threshold_absent");
        let loader = LegislationLoader::load(&dir).unwrap();

        assert!(loader.threshold_for(2021, "director").is_none());
        assert!(loader.threshold_for(2019, "engineer").is_none());
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let dir = std::env::temp_dir().join("payroll_engine_legislation_does_not_exist");
        match LegislationLoader::load(&dir).unwrap_err() {
            EngineError::ConfigNotFound { .. } => {}
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_directory_returns_config_not_found() {
        let dir = fixture_dir("empty");
        match LegislationLoader::load(&dir).unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("no legislation files"))
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = fixture_dir("invalid");
        fs::write(dir.join("2021.yaml"), "year: [not a year").unwrap();

        match LegislationLoader::load(&dir).unwrap_err() {
            EngineError::ConfigParseError { path, .. } => assert!(path.contains("2021.yaml")),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_multiple_year_files_all_loaded() {
        let dir = write_fixture("multi_year");
        let second = YEAR_2021.replace("year: 2021", "year: 2020").replace(
            "minimum_wage: \"650.00\"",
            "minimum_wage: \"610.00\"",
        );
        fs::write(dir.join("2020.yaml"), second).unwrap();

        let loader = LegislationLoader::load(&dir).unwrap();
        assert_eq!(loader.rates_for(2020).unwrap().minimum_wage, dec("610.00"));
        assert_eq!(loader.rates_for(2021).unwrap().minimum_wage, dec("650.00"));
    }
}
