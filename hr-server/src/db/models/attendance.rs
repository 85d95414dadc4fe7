//! Attendance Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::utils::validation::{self, ErrorSink, FieldError};

/// Attendance row — unique per (employee, work date)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub work_date: NaiveDate,
    pub time_in: NaiveTime,
    pub time_out: Option<NaiveTime>,
}

/// Attendance list row with the employee's display name joined in
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AttendanceSummary {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub work_date: NaiveDate,
    pub time_in: NaiveTime,
    pub time_out: Option<NaiveTime>,
}

/// Full attendance record with joined display fields
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AttendanceDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub attendance: Attendance,
    pub employee_name: String,
    pub cnic: String,
}

/// Raw submitted attendance form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub work_date: String,
    pub time_in: String,
    pub time_out: String,
}

/// Validated attendance fields
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub employee_id: i64,
    pub work_date: NaiveDate,
    pub time_in: NaiveTime,
    pub time_out: Option<NaiveTime>,
}

impl AttendanceForm {
    pub fn validate(&self) -> Result<NewAttendance, Vec<FieldError>> {
        let mut errors = Vec::new();

        let employee_id = errors.take(validation::required_id(&self.employee_id, "employeeId"));
        let work_date = errors.take(validation::required_date(&self.work_date, "workDate"));
        let time_in = errors.take(validation::required_time(&self.time_in, "timeIn"));
        let time_out = errors.take(validation::optional_time(&self.time_out, "timeOut"));

        let record = (|| {
            Some(NewAttendance {
                employee_id: employee_id?,
                work_date: work_date?,
                time_in: time_in?,
                time_out: time_out?,
            })
        })();
        record.filter(|_| errors.is_empty()).ok_or(errors)
    }
}
