//! Employee Training Model
//!
//! Association entity between employees and training sessions. The
//! (employee, training) pair is the record identity — there is no
//! surrogate key, and edits may move a record to a new pair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{self, ErrorSink, FieldError};

/// Completion grade; F is the failing grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Grade {
    #[serde(rename = "A+")]
    #[sqlx(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    #[sqlx(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    #[sqlx(rename = "C+")]
    CPlus,
    C,
    F,
}

impl std::str::FromStr for Grade {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "F" => Ok(Self::F),
            _ => Err(()),
        }
    }
}

/// Composite key of an employee-training record
pub type EmployeeTrainingKey = (i64, i64);

/// Employee training row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeeTraining {
    pub employee_id: i64,
    pub training_id: i64,
    pub completion_date: Option<NaiveDate>,
    pub grade: Option<Grade>,
}

impl EmployeeTraining {
    pub fn key(&self) -> EmployeeTrainingKey {
        (self.employee_id, self.training_id)
    }
}

/// List row with employee and session names joined in
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeTrainingSummary {
    pub employee_id: i64,
    pub training_id: i64,
    pub employee_name: String,
    pub session_title: String,
    pub completion_date: Option<NaiveDate>,
    pub grade: Option<Grade>,
}

/// Raw submitted employee-training form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeTrainingForm {
    pub employee_id: String,
    pub training_id: String,
    pub completion_date: String,
    pub grade: String,
}

/// Validated employee-training fields; the submitted key may differ from
/// the key the edit route addressed.
#[derive(Debug, Clone)]
pub struct NewEmployeeTraining {
    pub employee_id: i64,
    pub training_id: i64,
    pub completion_date: Option<NaiveDate>,
    pub grade: Option<Grade>,
}

impl NewEmployeeTraining {
    pub fn key(&self) -> EmployeeTrainingKey {
        (self.employee_id, self.training_id)
    }
}

impl EmployeeTrainingForm {
    pub fn validate(&self) -> Result<NewEmployeeTraining, Vec<FieldError>> {
        let mut errors = Vec::new();

        let employee_id = errors.take(validation::required_id(&self.employee_id, "employeeId"));
        let training_id = errors.take(validation::required_id(&self.training_id, "trainingId"));
        let completion_date =
            errors.take(validation::optional_date(&self.completion_date, "completionDate"));
        let grade = errors.take(validation::optional_enum::<Grade>(&self.grade, "grade"));

        let record = (|| {
            Some(NewEmployeeTraining {
                employee_id: employee_id?,
                training_id: training_id?,
                completion_date: completion_date?,
                grade: grade?,
            })
        })();
        record.filter(|_| errors.is_empty()).ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_parses_plus_variants() {
        assert_eq!("A+".parse::<Grade>(), Ok(Grade::APlus));
        assert_eq!("F".parse::<Grade>(), Ok(Grade::F));
        assert!("D".parse::<Grade>().is_err());
    }

    #[test]
    fn empty_optionals_are_allowed() {
        let form = EmployeeTrainingForm {
            employee_id: "3".into(),
            training_id: "9".into(),
            completion_date: String::new(),
            grade: String::new(),
        };
        let record = form.validate().expect("valid form");
        assert_eq!(record.key(), (3, 9));
        assert!(record.completion_date.is_none());
        assert!(record.grade.is_none());
    }
}
