//! Employee entity and account-provisioning payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee registered in the exam system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee code, unique within the company
    pub code: i32,

    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: String,

    pub birth_date: NaiveDate,
    pub contract_start_date: NaiveDate,

    /// Identifier of the position the employee holds
    pub position_id: i32,
}

/// Payload pairing a new employee with their login account
///
/// Used when provisioning an employee together with the credentials they
/// will log in with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAccount {
    #[serde(flatten)]
    pub employee: Employee,

    pub username: String,
    pub password: String,
}
