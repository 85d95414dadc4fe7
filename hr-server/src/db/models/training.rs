//! Training Session Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{self, ErrorSink, FieldError};

/// Training session row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TrainingSession {
    pub id: i64,
    pub session_title: String,
    pub description: Option<String>,
    pub instructor: String,
    pub session_date: NaiveDate,
}

/// Minimal training reference for form dropdowns
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TrainingRef {
    pub id: i64,
    pub session_title: String,
}

/// Raw submitted training-session form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingForm {
    pub session_title: String,
    pub description: String,
    pub instructor: String,
    pub session_date: String,
}

/// Validated training-session fields
#[derive(Debug, Clone)]
pub struct NewTrainingSession {
    pub session_title: String,
    pub description: Option<String>,
    pub instructor: String,
    pub session_date: NaiveDate,
}

impl TrainingForm {
    pub fn validate(&self) -> Result<NewTrainingSession, Vec<FieldError>> {
        let mut errors = Vec::new();

        let session_title = errors.take(validation::required_text(
            &self.session_title,
            "sessionTitle",
            validation::MAX_SESSION_TITLE_LEN,
        ));
        let description = errors.take(validation::optional_text(
            &self.description,
            "description",
            validation::MAX_TEXT_LEN,
        ));
        let instructor = errors.take(validation::required_text(
            &self.instructor,
            "instructor",
            validation::MAX_TITLE_LEN,
        ));
        let session_date = errors.take(validation::required_date(&self.session_date, "sessionDate"));

        let record = (|| {
            Some(NewTrainingSession {
                session_title: session_title?,
                description: description?,
                instructor: instructor?,
                session_date: session_date?,
            })
        })();
        record.filter(|_| errors.is_empty()).ok_or(errors)
    }
}
