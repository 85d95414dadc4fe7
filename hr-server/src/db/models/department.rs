//! Department Model

use serde::{Deserialize, Serialize};

use crate::utils::validation::{self, ErrorSink, FieldError};

/// Department row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Department {
    pub id: i64,
    pub dept_name: String,
    pub location: Option<String>,
    /// Optional manager (employee key); nullable by schema
    pub manager_id: Option<i64>,
}

/// Department list row with the manager's display name joined in
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DepartmentSummary {
    pub id: i64,
    pub dept_name: String,
    pub location: Option<String>,
    pub manager_id: Option<i64>,
    pub manager_name: Option<String>,
}

/// Minimal department reference for form dropdowns
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DepartmentRef {
    pub id: i64,
    pub dept_name: String,
}

/// Raw submitted department form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentForm {
    pub dept_name: String,
    pub location: String,
    pub manager_id: String,
}

/// Validated department fields
#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub dept_name: String,
    pub location: Option<String>,
    pub manager_id: Option<i64>,
}

impl DepartmentForm {
    pub fn validate(&self) -> Result<NewDepartment, Vec<FieldError>> {
        let mut errors = Vec::new();

        let dept_name = errors.take(validation::required_text(
            &self.dept_name,
            "deptName",
            validation::MAX_TITLE_LEN,
        ));
        let location = errors.take(validation::optional_text(
            &self.location,
            "location",
            validation::MAX_LOCATION_LEN,
        ));
        let manager_id = errors.take(validation::optional_id(&self.manager_id, "managerId"));

        let record = (|| {
            Some(NewDepartment {
                dept_name: dept_name?,
                location: location?,
                manager_id: manager_id?,
            })
        })();
        record.filter(|_| errors.is_empty()).ok_or(errors)
    }
}
