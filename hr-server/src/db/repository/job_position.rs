//! Job Position Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult, classify_delete, classify_write};
use crate::db::models::{JobPosition, JobPositionRef, NewJobPosition};

const UNIQUE_MESSAGES: &[(&str, &str)] = &[("job_position.job_title", "Job title must be unique")];

const BLOCKED_DELETE: &str = "Job position is still assigned to employees";

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<JobPosition>> {
    let jobs = sqlx::query_as::<_, JobPosition>(
        "SELECT id, job_title, job_description, min_salary, max_salary \
         FROM job_position ORDER BY job_title",
    )
    .fetch_all(pool)
    .await?;
    Ok(jobs)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<JobPosition>> {
    let job = sqlx::query_as::<_, JobPosition>("SELECT * FROM job_position WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(job)
}

pub async fn refs(pool: &SqlitePool) -> RepoResult<Vec<JobPositionRef>> {
    let jobs =
        sqlx::query_as::<_, JobPositionRef>("SELECT id, job_title FROM job_position ORDER BY job_title")
            .fetch_all(pool)
            .await?;
    Ok(jobs)
}

pub async fn create(pool: &SqlitePool, data: &NewJobPosition) -> RepoResult<JobPosition> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO job_position (job_title, job_description, min_salary, max_salary) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.job_title)
    .bind(&data.job_description)
    .bind(data.min_salary)
    .bind(data.max_salary)
    .fetch_one(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, "Invalid reference"))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load created job position".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: &NewJobPosition) -> RepoResult<JobPosition> {
    let rows = sqlx::query(
        "UPDATE job_position SET job_title = ?, job_description = ?, min_salary = ?, max_salary = ? \
         WHERE id = ?",
    )
    .bind(&data.job_title)
    .bind(&data.job_description)
    .bind(data.min_salary)
    .bind(data.max_salary)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, "Invalid reference"))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Job position {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Job position {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM job_position WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| classify_delete(e, BLOCKED_DELETE))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Job position {id} not found")));
    }
    Ok(())
}
