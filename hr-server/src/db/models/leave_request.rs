//! Leave Request Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{self, ErrorSink, FieldError};

/// Leave category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum LeaveType {
    Sick,
    Annual,
    Casual,
    Unpaid,
    Emergency,
}

impl std::str::FromStr for LeaveType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sick" => Ok(Self::Sick),
            "Annual" => Ok(Self::Annual),
            "Casual" => Ok(Self::Casual),
            "Unpaid" => Ok(Self::Unpaid),
            "Emergency" => Ok(Self::Emergency),
            _ => Err(()),
        }
    }
}

/// Review state. Decisions are one-way: once Approved or Rejected a
/// request never returns to Pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::str::FromStr for LeaveStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(()),
        }
    }
}

/// Leave request row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveRequest {
    pub id: i64,
    pub employee_id: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    /// Set only when a decision has been made
    pub reviewed_by: Option<i64>,
    pub review_date: Option<NaiveDate>,
    pub submitted_date: NaiveDate,
}

/// Leave list row with the employee's display name joined in
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LeaveRequestSummary {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
}

/// Full leave request with joined display fields
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LeaveRequestDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub leave: LeaveRequest,
    pub employee_name: String,
    pub reviewer_name: Option<String>,
}

/// Raw submitted leave request form (create)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveRequestForm {
    pub employee_id: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

/// Raw submitted leave request form (edit) — adds the review fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveRequestEditForm {
    pub employee_id: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: String,
    pub reviewed_by: String,
}

/// Validated leave request fields (create; status starts Pending)
#[derive(Debug, Clone)]
pub struct NewLeaveRequest {
    pub employee_id: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Validated leave request update, including the review decision
#[derive(Debug, Clone)]
pub struct LeaveRequestUpdate {
    pub employee_id: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub reviewed_by: Option<i64>,
}

fn check_period(
    errors: &mut Vec<FieldError>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        errors.push(FieldError::new(
            "endDate",
            "End date must be on/after start date",
        ));
    }
}

impl LeaveRequestForm {
    pub fn validate(&self) -> Result<NewLeaveRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let employee_id = errors.take(validation::required_id(&self.employee_id, "employeeId"));
        let leave_type =
            errors.take(validation::required_enum::<LeaveType>(&self.leave_type, "leaveType"));
        let start_date = errors.take(validation::required_date(&self.start_date, "startDate"));
        let end_date = errors.take(validation::required_date(&self.end_date, "endDate"));
        let reason = errors.take(validation::required_text(
            &self.reason,
            "reason",
            validation::MAX_TEXT_LEN,
        ));

        check_period(&mut errors, start_date, end_date);

        let record = (|| {
            Some(NewLeaveRequest {
                employee_id: employee_id?,
                leave_type: leave_type?,
                start_date: start_date?,
                end_date: end_date?,
                reason: reason?,
            })
        })();
        record.filter(|_| errors.is_empty()).ok_or(errors)
    }
}

impl LeaveRequestEditForm {
    pub fn validate(&self) -> Result<LeaveRequestUpdate, Vec<FieldError>> {
        let mut errors = Vec::new();

        let employee_id = errors.take(validation::required_id(&self.employee_id, "employeeId"));
        let leave_type =
            errors.take(validation::required_enum::<LeaveType>(&self.leave_type, "leaveType"));
        let start_date = errors.take(validation::required_date(&self.start_date, "startDate"));
        let end_date = errors.take(validation::required_date(&self.end_date, "endDate"));
        let reason = errors.take(validation::required_text(
            &self.reason,
            "reason",
            validation::MAX_TEXT_LEN,
        ));
        let status = errors
            .take(validation::optional_enum::<LeaveStatus>(&self.status, "status"))
            .map(Option::unwrap_or_default);
        let reviewed_by = errors.take(validation::optional_id(&self.reviewed_by, "reviewedBy"));

        check_period(&mut errors, start_date, end_date);

        // A decision needs a reviewer; the review date is stamped on write.
        if let (Some(status), Some(reviewed_by)) = (status, reviewed_by)
            && status.is_decided()
            && reviewed_by.is_none()
        {
            errors.push(FieldError::new(
                "reviewedBy",
                "Reviewer is required to approve or reject a request",
            ));
        }

        let record = (|| {
            Some(LeaveRequestUpdate {
                employee_id: employee_id?,
                leave_type: leave_type?,
                start_date: start_date?,
                end_date: end_date?,
                reason: reason?,
                status: status?,
                reviewed_by: reviewed_by?,
            })
        })();
        record.filter(|_| errors.is_empty()).ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit_form(status: &str, reviewed_by: &str) -> LeaveRequestEditForm {
        LeaveRequestEditForm {
            employee_id: "1".into(),
            leave_type: "Sick".into(),
            start_date: "2026-02-02".into(),
            end_date: "2026-02-04".into(),
            reason: "Flu".into(),
            status: status.into(),
            reviewed_by: reviewed_by.into(),
        }
    }

    #[test]
    fn backwards_period_is_rejected() {
        let mut form = edit_form("Pending", "");
        form.end_date = "2026-02-01".into();
        let errors = form.validate().expect_err("invalid period");
        assert_eq!(errors[0].field, "endDate");
    }

    #[test]
    fn decision_requires_reviewer() {
        let errors = edit_form("Approved", "").validate().expect_err("missing reviewer");
        assert_eq!(errors[0].field, "reviewedBy");
        assert!(edit_form("Approved", "7").validate().is_ok());
        assert!(edit_form("Pending", "").validate().is_ok());
    }

    #[test]
    fn unknown_leave_type_is_rejected() {
        let mut form = edit_form("Pending", "");
        form.leave_type = "Sabbatical".into();
        let errors = form.validate().expect_err("unknown type");
        assert_eq!(errors[0].field, "leaveType");
    }
}
