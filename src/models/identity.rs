//! National-identifier decoding.
//!
//! The first six digits of an EGN-style identifier encode the birth date as
//! `YYMMDD`, with the month field offset to disambiguate the century: months
//! 01–12 mean the 1900s, 21–32 the 1800s, and 41–52 the 2000s. The decoded
//! birth date classifies the employee into a supplementary-pension cohort.
//! The heuristic lives behind these two functions so it can be swapped
//! without touching the engine.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Employees born after this year contribute to a universal supplementary
/// pension fund; older cohorts stay on the statutory pension alone.
const UNIVERSAL_FUND_CUTOFF_YEAR: i32 = 1959;

/// The supplementary-pension eligibility cohort of an employee.
///
/// The resolved contribution schedule for a `StatutoryOnly` employee carries
/// a zero supplementary-pension rate; the engine never consults the cohort
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PensionCohort {
    /// Born after 1959; insured in a universal supplementary pension fund.
    Universal,
    /// Born in or before 1959; statutory pension insurance only.
    StatutoryOnly,
}

/// Decodes the birth date embedded in a national identifier.
///
/// # Arguments
///
/// * `egn` - The identifier; at least six digits, `YYMMDD` prefix.
///
/// # Returns
///
/// The decoded birth date, or [`EngineError::InvalidNationalId`] when the
/// prefix is too short, non-numeric, uses an unknown month offset, or names
/// a day that does not exist in the decoded month.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::models::birth_date_from_egn;
///
/// let date = birth_date_from_egn("8503157300").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(1985, 3, 15).unwrap());
/// ```
pub fn birth_date_from_egn(egn: &str) -> EngineResult<NaiveDate> {
    let digits = egn.as_bytes();
    if digits.len() < 6 || !digits[..6].iter().all(u8::is_ascii_digit) {
        return Err(EngineError::InvalidNationalId {
            egn: egn.to_string(),
            message: "expected at least six leading digits".to_string(),
        });
    }

    let field = |from: usize| -> u32 {
        (digits[from] - b'0') as u32 * 10 + (digits[from + 1] - b'0') as u32
    };
    let year = field(0) as i32;
    let month = field(2);
    let day = field(4);

    // Month offsets +20 and +40 select the 1800s and 2000s respectively.
    let (year, month) = match month {
        1..=12 => (1900 + year, month),
        21..=32 => (1800 + year, month - 20),
        41..=52 => (2000 + year, month - 40),
        _ => {
            return Err(EngineError::InvalidNationalId {
                egn: egn.to_string(),
                message: format!("month field {month} outside known century offsets"),
            });
        }
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| EngineError::InvalidNationalId {
        egn: egn.to_string(),
        message: format!("no such calendar date {year}-{month:02}-{day:02}"),
    })
}

/// Classifies an employee into a supplementary-pension cohort from the
/// national identifier.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PensionCohort, pension_cohort_from_egn};
///
/// assert_eq!(
///     pension_cohort_from_egn("8503157300").unwrap(),
///     PensionCohort::Universal,
/// );
/// assert_eq!(
///     pension_cohort_from_egn("5502154421").unwrap(),
///     PensionCohort::StatutoryOnly,
/// );
/// ```
pub fn pension_cohort_from_egn(egn: &str) -> EngineResult<PensionCohort> {
    let birth_date = birth_date_from_egn(egn)?;
    if chrono::Datelike::year(&birth_date) > UNIVERSAL_FUND_CUTOFF_YEAR {
        Ok(PensionCohort::Universal)
    } else {
        Ok(PensionCohort::StatutoryOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_month_decodes_as_1900s() {
        let date = birth_date_from_egn("8503157300").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1985, 3, 15).unwrap());
    }

    #[test]
    fn test_month_offset_20_decodes_as_1800s() {
        let date = birth_date_from_egn("9523010000").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1895, 3, 1).unwrap());
    }

    #[test]
    fn test_month_offset_40_decodes_as_2000s() {
        let date = birth_date_from_egn("0441107080").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2004, 1, 10).unwrap());
    }

    #[test]
    fn test_december_boundary_of_each_offset() {
        assert_eq!(
            birth_date_from_egn("9912315555").unwrap(),
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()
        );
        assert_eq!(
            birth_date_from_egn("9932315555").unwrap(),
            NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()
        );
        assert_eq!(
            birth_date_from_egn("9952315555").unwrap(),
            NaiveDate::from_ymd_opt(2099, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_month_in_offset_gap_is_rejected() {
        let result = birth_date_from_egn("8513150000");
        match result.unwrap_err() {
            EngineError::InvalidNationalId { egn, .. } => assert_eq!(egn, "8513150000"),
            other => panic!("Expected InvalidNationalId, got {:?}", other),
        }
    }

    #[test]
    fn test_too_short_identifier_is_rejected() {
        assert!(birth_date_from_egn("85031").is_err());
    }

    #[test]
    fn test_non_numeric_prefix_is_rejected() {
        assert!(birth_date_from_egn("85x3157300").is_err());
    }

    #[test]
    fn test_nonexistent_calendar_date_is_rejected() {
        // February 30th does not exist in any century.
        assert!(birth_date_from_egn("8502307300").is_err());
    }

    #[test]
    fn test_cohort_born_after_cutoff_is_universal() {
        assert_eq!(
            pension_cohort_from_egn("6001010000").unwrap(),
            PensionCohort::Universal
        );
    }

    #[test]
    fn test_cohort_born_in_cutoff_year_is_statutory_only() {
        assert_eq!(
            pension_cohort_from_egn("5912310000").unwrap(),
            PensionCohort::StatutoryOnly
        );
    }

    #[test]
    fn test_cohort_2000s_birth_is_universal() {
        assert_eq!(
            pension_cohort_from_egn("0441107080").unwrap(),
            PensionCohort::Universal
        );
    }

    #[test]
    fn test_cohort_serialization() {
        let json = serde_json::to_string(&PensionCohort::StatutoryOnly).unwrap();
        assert_eq!(json, "\"statutory_only\"");

        let deserialized: PensionCohort = serde_json::from_str("\"universal\"").unwrap();
        assert_eq!(deserialized, PensionCohort::Universal);
    }
}
