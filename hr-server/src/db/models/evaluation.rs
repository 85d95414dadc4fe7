//! Performance Evaluation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{self, ErrorSink, FieldError};

/// Rating bounds (inclusive)
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Performance evaluation row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PerformanceEvaluation {
    pub id: i64,
    /// Subject of the evaluation
    pub employee_id: i64,
    pub reviewer_id: i64,
    pub evaluation_date: Option<NaiveDate>,
    pub rating: f64,
    pub comments: Option<String>,
}

/// Evaluation list row with subject and reviewer names joined in
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EvaluationSummary {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub reviewer_name: String,
    pub evaluation_date: Option<NaiveDate>,
    pub rating: f64,
}

/// Full evaluation record with joined display fields
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EvaluationDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub evaluation: PerformanceEvaluation,
    pub employee_name: String,
    pub reviewer_name: String,
}

/// Raw submitted evaluation form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationForm {
    pub employee_id: String,
    pub reviewer_id: String,
    pub evaluation_date: String,
    pub rating: String,
    pub comments: String,
}

/// Validated evaluation fields
#[derive(Debug, Clone)]
pub struct NewEvaluation {
    pub employee_id: i64,
    pub reviewer_id: i64,
    pub evaluation_date: Option<NaiveDate>,
    pub rating: f64,
    pub comments: Option<String>,
}

impl EvaluationForm {
    pub fn validate(&self) -> Result<NewEvaluation, Vec<FieldError>> {
        let mut errors = Vec::new();

        let employee_id = errors.take(validation::required_id(&self.employee_id, "employeeId"));
        let reviewer_id = errors.take(validation::required_id(&self.reviewer_id, "reviewerId"));
        let evaluation_date =
            errors.take(validation::optional_date(&self.evaluation_date, "evaluationDate"));
        let rating = errors.take(validation::required_range(
            &self.rating,
            "rating",
            MIN_RATING,
            MAX_RATING,
        ));
        let comments = errors.take(validation::optional_text(
            &self.comments,
            "comments",
            validation::MAX_TEXT_LEN,
        ));

        let record = (|| {
            Some(NewEvaluation {
                employee_id: employee_id?,
                reviewer_id: reviewer_id?,
                evaluation_date: evaluation_date?,
                rating: rating?,
                comments: comments?,
            })
        })();
        record.filter(|_| errors.is_empty()).ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(rating: &str) -> EvaluationForm {
        EvaluationForm {
            employee_id: "1".into(),
            reviewer_id: "2".into(),
            evaluation_date: "2026-03-01".into(),
            rating: rating.into(),
            comments: String::new(),
        }
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(form("1.0").validate().is_ok());
        assert!(form("5.0").validate().is_ok());
        assert!(form("0.99").validate().is_err());
        assert!(form("5.01").validate().is_err());
    }
}
