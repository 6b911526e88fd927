//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving legislation data
//! and computing payroll.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. A failure is
/// always fatal to the single employee's calculation; a batch orchestrator
/// is expected to catch it, skip the employee, and continue the run.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/legislation".to_string(),
/// };
/// assert_eq!(error.to_string(), "Legislation file not found: /missing/legislation");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Legislation file was not found at the specified path.
    #[error("Legislation file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Legislation file could not be parsed.
    #[error("Failed to parse legislation file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No legislated rates are configured for the requested year.
    #[error("No legislated rates found for year {year}")]
    RatesNotFound {
        /// The year for which rates were requested.
        year: i32,
    },

    /// No contribution schedule exists for the insured-type code and year.
    #[error("No contribution schedule found for insured type '{insured_type}' in year {year}")]
    ContributionsNotFound {
        /// The year for which the schedule was requested.
        year: i32,
        /// The insured-type code that was not found.
        insured_type: String,
    },

    /// A national identifier could not be decoded into a birth date.
    #[error("Invalid national identifier '{egn}': {message}")]
    InvalidNationalId {
        /// The identifier that failed to decode.
        egn: String,
        /// A description of what made the identifier invalid.
        message: String,
    },

    /// An input fact was malformed or inconsistent.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/legislation".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Legislation file not found: /missing/legislation"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/legislation/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse legislation file '/legislation/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_rates_not_found_displays_year() {
        let error = EngineError::RatesNotFound { year: 2019 };
        assert_eq!(error.to_string(), "No legislated rates found for year 2019");
    }

    #[test]
    fn test_contributions_not_found_displays_type_and_year() {
        let error = EngineError::ContributionsNotFound {
            year: 2021,
            insured_type: "02".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No contribution schedule found for insured type '02' in year 2021"
        );
    }

    #[test]
    fn test_invalid_national_id_displays_id_and_message() {
        let error = EngineError::InvalidNationalId {
            egn: "99".to_string(),
            message: "too short".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid national identifier '99': too short"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "base_salary".to_string(),
            message: "cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'base_salary': cannot be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_rates_not_found() -> EngineResult<()> {
            Err(EngineError::RatesNotFound { year: 2018 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_rates_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
