//! Leave Request Repository
//!
//! Review decisions are one-way: Pending → Approved | Rejected, and only
//! with a reviewer supplied. The review date is stamped in the same write
//! as the decision.

use chrono::Local;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, classify_write};
use crate::db::models::{
    LeaveRequest, LeaveRequestDetails, LeaveRequestSummary, LeaveRequestUpdate, LeaveStatus,
    NewLeaveRequest,
};

const MISSING_REFERENCE: &str = "Selected employee does not exist";

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<LeaveRequestSummary>> {
    let leaves = sqlx::query_as::<_, LeaveRequestSummary>(
        "SELECT l.id, l.employee_id, e.first_name || ' ' || e.last_name AS employee_name, \
                l.leave_type, l.start_date, l.end_date, l.status \
         FROM leave_request l \
         JOIN employee e ON l.employee_id = e.id \
         ORDER BY l.submitted_date DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(leaves)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<LeaveRequest>> {
    let leave = sqlx::query_as::<_, LeaveRequest>("SELECT * FROM leave_request WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(leave)
}

pub async fn find_details(pool: &SqlitePool, id: i64) -> RepoResult<Option<LeaveRequestDetails>> {
    let leave = sqlx::query_as::<_, LeaveRequestDetails>(
        "SELECT l.*, e.first_name || ' ' || e.last_name AS employee_name, \
                r.first_name || ' ' || r.last_name AS reviewer_name \
         FROM leave_request l \
         JOIN employee e ON l.employee_id = e.id \
         LEFT JOIN employee r ON l.reviewed_by = r.id \
         WHERE l.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(leave)
}

/// Insert a new request; status starts Pending and the submission date is
/// stamped here.
pub async fn create(pool: &SqlitePool, data: &NewLeaveRequest) -> RepoResult<LeaveRequest> {
    let submitted_date = Local::now().date_naive();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO leave_request \
         (employee_id, leave_type, start_date, end_date, reason, status, submitted_date) \
         VALUES (?, ?, ?, ?, ?, 'Pending', ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.leave_type)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(&data.reason)
    .bind(submitted_date)
    .fetch_one(pool)
    .await
    .map_err(|e| classify_write(e, &[], MISSING_REFERENCE))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load created leave request".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &LeaveRequestUpdate,
) -> RepoResult<LeaveRequest> {
    let current = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Leave request {id} not found")))?;

    if current.status.is_decided() && data.status == LeaveStatus::Pending {
        return Err(RepoError::Validation(
            "A decided leave request cannot return to Pending".into(),
        ));
    }

    // Review date follows the reviewer: stamped when one is supplied,
    // otherwise the stored value is kept.
    let review_date = if data.reviewed_by.is_some() {
        Some(Local::now().date_naive())
    } else {
        current.review_date
    };

    let rows = sqlx::query(
        "UPDATE leave_request SET employee_id = ?, leave_type = ?, start_date = ?, end_date = ?, \
         reason = ?, status = ?, reviewed_by = ?, review_date = ? \
         WHERE id = ?",
    )
    .bind(data.employee_id)
    .bind(data.leave_type)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(&data.reason)
    .bind(data.status)
    .bind(data.reviewed_by)
    .bind(review_date)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| classify_write(e, &[], "Selected employee or reviewer does not exist"))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Leave request {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Leave request {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM leave_request WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Leave request {id} not found")));
    }
    Ok(())
}
