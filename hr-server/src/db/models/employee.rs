//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{self, ErrorSink, FieldError};

/// Employment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    #[sqlx(rename = "On Leave")]
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::OnLeave => "On Leave",
            Self::Terminated => "Terminated",
        }
    }
}

impl std::str::FromStr for EmployeeStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            "On Leave" => Ok(Self::OnLeave),
            "Terminated" => Ok(Self::Terminated),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cnic: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub join_date: Option<NaiveDate>,
    pub status: EmployeeStatus,
    pub job_id: i64,
    pub dept_id: i64,
}

/// Employee list row with joined display fields
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cnic: String,
    pub email: String,
    pub phone_number: String,
    pub status: EmployeeStatus,
    pub job_title: Option<String>,
    pub dept_name: Option<String>,
}

/// Full employee record with joined display fields
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub employee: Employee,
    pub job_title: Option<String>,
    pub dept_name: Option<String>,
}

/// Minimal employee reference for form dropdowns
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeRef {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Raw submitted employee form (echoed back on validation failure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub cnic: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub join_date: String,
    pub status: String,
    pub job_id: String,
    pub dept_id: String,
}

/// Validated employee fields ready for persistence
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub cnic: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub join_date: Option<NaiveDate>,
    pub status: EmployeeStatus,
    pub job_id: i64,
    pub dept_id: i64,
}

impl EmployeeForm {
    /// Field-level validation; errors are reported in declaration order and
    /// the caller echoes the raw form back alongside them.
    pub fn validate(&self) -> Result<NewEmployee, Vec<FieldError>> {
        let mut errors = Vec::new();

        let first_name = errors.take(validation::required_text(
            &self.first_name,
            "firstName",
            validation::MAX_NAME_LEN,
        ));
        let last_name = errors.take(validation::required_text(
            &self.last_name,
            "lastName",
            validation::MAX_NAME_LEN,
        ));
        let cnic = errors.take(validation::required_cnic(&self.cnic, "cnic"));
        let date_of_birth = errors.take(validation::required_date(&self.date_of_birth, "dateOfBirth"));
        let email = errors.take(validation::required_email(
            &self.email,
            "email",
            validation::MAX_EMAIL_LEN,
        ));
        let phone_number = errors.take(validation::required_text(
            &self.phone_number,
            "phoneNumber",
            validation::MAX_PHONE_LEN,
        ));
        let address = errors.take(validation::required_text(
            &self.address,
            "address",
            validation::MAX_ADDRESS_LEN,
        ));
        let join_date = errors.take(validation::optional_date(&self.join_date, "joinDate"));
        let status = errors
            .take(validation::optional_enum::<EmployeeStatus>(&self.status, "status"))
            .map(Option::unwrap_or_default);
        let job_id = errors.take(validation::required_id(&self.job_id, "jobId"));
        let dept_id = errors.take(validation::required_id(&self.dept_id, "deptId"));

        let record = (|| {
            Some(NewEmployee {
                first_name: first_name?,
                last_name: last_name?,
                cnic: cnic?,
                date_of_birth: date_of_birth?,
                email: email?,
                phone_number: phone_number?,
                address: address?,
                join_date: join_date?,
                status: status?,
                job_id: job_id?,
                dept_id: dept_id?,
            })
        })();
        record.filter(|_| errors.is_empty()).ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> EmployeeForm {
        EmployeeForm {
            first_name: "Ayesha".into(),
            last_name: "Khan".into(),
            cnic: "12345-1234567-1".into(),
            date_of_birth: "1990-04-12".into(),
            email: "ayesha.khan@example.com".into(),
            phone_number: "0300-1234567".into(),
            address: "House 12, Street 4, Islamabad".into(),
            join_date: "2020-01-06".into(),
            status: "Active".into(),
            job_id: "1".into(),
            dept_id: "2".into(),
        }
    }

    #[test]
    fn valid_form_parses() {
        let record = valid_form().validate().expect("valid form");
        assert_eq!(record.first_name, "Ayesha");
        assert_eq!(record.status, EmployeeStatus::Active);
        assert_eq!(record.job_id, 1);
    }

    #[test]
    fn empty_status_defaults_to_active() {
        let mut form = valid_form();
        form.status = String::new();
        let record = form.validate().expect("valid form");
        assert_eq!(record.status, EmployeeStatus::Active);
    }

    #[test]
    fn bad_cnic_and_email_are_both_reported() {
        let mut form = valid_form();
        form.cnic = "12345".into();
        form.email = "not-an-email".into();
        let errors = form.validate().expect_err("invalid form");
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["cnic", "email"]);
    }

    #[test]
    fn status_parses_on_leave() {
        assert_eq!("On Leave".parse::<EmployeeStatus>(), Ok(EmployeeStatus::OnLeave));
        assert!("Retired".parse::<EmployeeStatus>().is_err());
    }
}
