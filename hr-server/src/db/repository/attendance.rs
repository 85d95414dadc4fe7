//! Attendance Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult, classify_delete, classify_write};
use crate::db::models::{Attendance, AttendanceDetails, AttendanceSummary, NewAttendance};

const UNIQUE_MESSAGES: &[(&str, &str)] = &[(
    "attendance.employee_id",
    "Attendance for this employee on this date already exists",
)];

const MISSING_REFERENCE: &str = "Selected employee does not exist";

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<AttendanceSummary>> {
    let attendances = sqlx::query_as::<_, AttendanceSummary>(
        "SELECT a.id, a.employee_id, e.first_name || ' ' || e.last_name AS employee_name, \
                a.work_date, a.time_in, a.time_out \
         FROM attendance a \
         JOIN employee e ON a.employee_id = e.id \
         ORDER BY a.work_date DESC, a.id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(attendances)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Attendance>> {
    let attendance = sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(attendance)
}

pub async fn find_details(pool: &SqlitePool, id: i64) -> RepoResult<Option<AttendanceDetails>> {
    let attendance = sqlx::query_as::<_, AttendanceDetails>(
        "SELECT a.*, e.first_name || ' ' || e.last_name AS employee_name, e.cnic \
         FROM attendance a \
         JOIN employee e ON a.employee_id = e.id \
         WHERE a.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(attendance)
}

pub async fn create(pool: &SqlitePool, data: &NewAttendance) -> RepoResult<Attendance> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO attendance (employee_id, work_date, time_in, time_out) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.work_date)
    .bind(data.time_in)
    .bind(data.time_out)
    .fetch_one(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load created attendance".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: &NewAttendance) -> RepoResult<Attendance> {
    let rows = sqlx::query(
        "UPDATE attendance SET employee_id = ?, work_date = ?, time_in = ?, time_out = ? \
         WHERE id = ?",
    )
    .bind(data.employee_id)
    .bind(data.work_date)
    .bind(data.time_in)
    .bind(data.time_out)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Attendance record {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Attendance record {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM attendance WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| classify_delete(e, "Attendance record is referenced by other records"))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Attendance record {id} not found")));
    }
    Ok(())
}
