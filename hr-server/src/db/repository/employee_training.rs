//! Employee Training Repository
//!
//! The (employee, training) pair is the record identity. An edit that
//! changes either half of the pair is a logical re-keying: the new row is
//! inserted before the original is deleted, both inside one transaction,
//! so a key conflict aborts without destroying the original record.

use sqlx::SqlitePool;

use super::{RepoError, RepoResult, classify_write};
use crate::db::models::{
    EmployeeTraining, EmployeeTrainingKey, EmployeeTrainingSummary, NewEmployeeTraining,
};

const UNIQUE_MESSAGES: &[(&str, &str)] = &[(
    "employee_training.employee_id",
    "This employee-training record already exists",
)];

const MISSING_REFERENCE: &str = "Selected employee or training session does not exist";

fn not_found((employee_id, training_id): EmployeeTrainingKey) -> RepoError {
    RepoError::NotFound(format!(
        "Training record for employee {employee_id} and session {training_id} not found"
    ))
}

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<EmployeeTrainingSummary>> {
    let records = sqlx::query_as::<_, EmployeeTrainingSummary>(
        "SELECT et.employee_id, et.training_id, \
                e.first_name || ' ' || e.last_name AS employee_name, \
                t.session_title, et.completion_date, et.grade \
         FROM employee_training et \
         JOIN employee e ON et.employee_id = e.id \
         JOIN training_session t ON et.training_id = t.id \
         ORDER BY et.completion_date DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(records)
}

pub async fn find_by_key(
    pool: &SqlitePool,
    key: EmployeeTrainingKey,
) -> RepoResult<Option<EmployeeTraining>> {
    let record = sqlx::query_as::<_, EmployeeTraining>(
        "SELECT * FROM employee_training WHERE employee_id = ? AND training_id = ?",
    )
    .bind(key.0)
    .bind(key.1)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

pub async fn find_details(
    pool: &SqlitePool,
    key: EmployeeTrainingKey,
) -> RepoResult<Option<EmployeeTrainingSummary>> {
    let record = sqlx::query_as::<_, EmployeeTrainingSummary>(
        "SELECT et.employee_id, et.training_id, \
                e.first_name || ' ' || e.last_name AS employee_name, \
                t.session_title, et.completion_date, et.grade \
         FROM employee_training et \
         JOIN employee e ON et.employee_id = e.id \
         JOIN training_session t ON et.training_id = t.id \
         WHERE et.employee_id = ? AND et.training_id = ?",
    )
    .bind(key.0)
    .bind(key.1)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

pub async fn create(pool: &SqlitePool, data: &NewEmployeeTraining) -> RepoResult<EmployeeTraining> {
    sqlx::query(
        "INSERT INTO employee_training (employee_id, training_id, completion_date, grade) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(data.employee_id)
    .bind(data.training_id)
    .bind(data.completion_date)
    .bind(data.grade)
    .execute(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

    find_by_key(pool, data.key())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load created training record".into()))
}

/// Update the record addressed by `original`. When the submitted key is
/// unchanged this is an in-place field update; when it differs, the row is
/// re-keyed atomically (insert new, delete original, commit). A uniqueness
/// conflict on the new key rolls the whole edit back.
pub async fn update(
    pool: &SqlitePool,
    original: EmployeeTrainingKey,
    data: &NewEmployeeTraining,
) -> RepoResult<EmployeeTraining> {
    if data.key() == original {
        let rows = sqlx::query(
            "UPDATE employee_training SET completion_date = ?, grade = ? \
             WHERE employee_id = ? AND training_id = ?",
        )
        .bind(data.completion_date)
        .bind(data.grade)
        .bind(original.0)
        .bind(original.1)
        .execute(pool)
        .await
        .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

        if rows.rows_affected() == 0 {
            return Err(not_found(original));
        }
    } else {
        // Re-key: insert before delete, one transaction. Dropping the
        // transaction on any error path rolls back the partial state.
        let mut tx = pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employee_training WHERE employee_id = ? AND training_id = ?",
        )
        .bind(original.0)
        .bind(original.1)
        .fetch_one(&mut *tx)
        .await?;
        if existing == 0 {
            return Err(not_found(original));
        }

        sqlx::query(
            "INSERT INTO employee_training (employee_id, training_id, completion_date, grade) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(data.employee_id)
        .bind(data.training_id)
        .bind(data.completion_date)
        .bind(data.grade)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

        sqlx::query("DELETE FROM employee_training WHERE employee_id = ? AND training_id = ?")
            .bind(original.0)
            .bind(original.1)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
    }

    find_by_key(pool, data.key())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load updated training record".into()))
}

pub async fn delete(pool: &SqlitePool, key: EmployeeTrainingKey) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employee_training WHERE employee_id = ? AND training_id = ?")
        .bind(key.0)
        .bind(key.1)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(not_found(key));
    }
    Ok(())
}
