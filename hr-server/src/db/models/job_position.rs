//! Job Position Model

use serde::{Deserialize, Serialize};

use crate::utils::validation::{self, ErrorSink, FieldError};

/// Job position row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobPosition {
    pub id: i64,
    pub job_title: String,
    pub job_description: Option<String>,
    pub min_salary: f64,
    pub max_salary: f64,
}

/// Minimal job-position reference for form dropdowns
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct JobPositionRef {
    pub id: i64,
    pub job_title: String,
}

/// Raw submitted job-position form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPositionForm {
    pub job_title: String,
    pub job_description: String,
    pub min_salary: String,
    pub max_salary: String,
}

/// Validated job-position fields
#[derive(Debug, Clone)]
pub struct NewJobPosition {
    pub job_title: String,
    pub job_description: Option<String>,
    pub min_salary: f64,
    pub max_salary: f64,
}

impl JobPositionForm {
    pub fn validate(&self) -> Result<NewJobPosition, Vec<FieldError>> {
        let mut errors = Vec::new();

        let job_title = errors.take(validation::required_text(
            &self.job_title,
            "jobTitle",
            validation::MAX_TITLE_LEN,
        ));
        let job_description = errors.take(validation::optional_text(
            &self.job_description,
            "jobDescription",
            validation::MAX_TEXT_LEN,
        ));
        let min_salary = errors.take(validation::required_amount(&self.min_salary, "minSalary"));
        let max_salary = errors.take(validation::required_amount(&self.max_salary, "maxSalary"));

        // Cross-field rule on the submitted values
        if let (Some(min), Some(max)) = (min_salary, max_salary)
            && max < min
        {
            errors.push(FieldError::new(
                "maxSalary",
                "Max salary must be greater than or equal to min salary",
            ));
        }

        let record = (|| {
            Some(NewJobPosition {
                job_title: job_title?,
                job_description: job_description?,
                min_salary: min_salary?,
                max_salary: max_salary?,
            })
        })();
        record.filter(|_| errors.is_empty()).ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_below_min_is_rejected() {
        let form = JobPositionForm {
            job_title: "Engineer".into(),
            job_description: String::new(),
            min_salary: "90000".into(),
            max_salary: "60000".into(),
        };
        let errors = form.validate().expect_err("invalid range");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "maxSalary");
    }

    #[test]
    fn equal_bounds_are_accepted() {
        let form = JobPositionForm {
            job_title: "Engineer".into(),
            job_description: String::new(),
            min_salary: "60000".into(),
            max_salary: "60000".into(),
        };
        assert!(form.validate().is_ok());
    }
}
