//! Employee and contract models.
//!
//! This module defines the employee profile and the employment-contract
//! facts the engine consumes. Both are resolved by the caller for the
//! month being computed and embedded verbatim into the resulting snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A worker whose monthly payroll is being computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// National identifier (EGN-style, birth date encoded in the first six digits).
    pub egn: String,
    /// Display name used on payroll lines and payslips.
    pub full_name: String,
    /// Whether the employee has a certified reduced working capacity,
    /// which grants the income-tax exemption when one is legislated.
    #[serde(default)]
    pub disabled: bool,
}

/// The employment-contract facts for the month being computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Monthly base salary for a fully worked month.
    pub base_salary: Decimal,
    /// Seniority bonus as a percentage of the base salary; zero disables the bonus.
    #[serde(default)]
    pub seniority_percent: Decimal,
    /// Personnel-group code used to resolve the minimum insurable income threshold.
    pub personnel_group: String,
    /// Insured-type code used to resolve the contribution schedule.
    pub insured_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_employee_profile() {
        let json = r#"{
            "id": "emp_001",
            "egn": "8503157300",
            "full_name": "Ivan Petrov",
            "disabled": false
        }"#;

        let employee: EmployeeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.egn, "8503157300");
        assert_eq!(employee.full_name, "Ivan Petrov");
        assert!(!employee.disabled);
    }

    #[test]
    fn test_disabled_flag_defaults_to_false() {
        let json = r#"{
            "id": "emp_002",
            "egn": "9001012345",
            "full_name": "Maria Ivanova"
        }"#;

        let employee: EmployeeProfile = serde_json::from_str(json).unwrap();
        assert!(!employee.disabled);
    }

    #[test]
    fn test_deserialize_contract() {
        let json = r#"{
            "base_salary": "2200.00",
            "seniority_percent": "6.0",
            "personnel_group": "engineer",
            "insured_type": "01"
        }"#;

        let contract: Contract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.base_salary, dec("2200.00"));
        assert_eq!(contract.seniority_percent, dec("6.0"));
        assert_eq!(contract.personnel_group, "engineer");
        assert_eq!(contract.insured_type, "01");
    }

    #[test]
    fn test_seniority_percent_defaults_to_zero() {
        let json = r#"{
            "base_salary": "1500.00",
            "personnel_group": "clerk",
            "insured_type": "01"
        }"#;

        let contract: Contract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.seniority_percent, Decimal::ZERO);
    }

    #[test]
    fn test_contract_serialization_round_trip() {
        let contract = Contract {
            base_salary: dec("3000.00"),
            seniority_percent: dec("4.8"),
            personnel_group: "specialist".to_string(),
            insured_type: "01".to_string(),
        };

        let json = serde_json::to_string(&contract).unwrap();
        let deserialized: Contract = serde_json::from_str(&json).unwrap();
        assert_eq!(contract, deserialized);
    }
}
