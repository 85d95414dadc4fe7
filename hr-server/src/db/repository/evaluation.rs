//! Performance Evaluation Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult, classify_write};
use crate::db::models::{EvaluationDetails, EvaluationSummary, NewEvaluation, PerformanceEvaluation};

const MISSING_REFERENCE: &str = "Selected employee or reviewer does not exist";

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<EvaluationSummary>> {
    let evaluations = sqlx::query_as::<_, EvaluationSummary>(
        "SELECT p.id, p.employee_id, \
                e.first_name || ' ' || e.last_name AS employee_name, \
                r.first_name || ' ' || r.last_name AS reviewer_name, \
                p.evaluation_date, p.rating \
         FROM performance_evaluation p \
         JOIN employee e ON p.employee_id = e.id \
         JOIN employee r ON p.reviewer_id = r.id \
         ORDER BY p.evaluation_date DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(evaluations)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<PerformanceEvaluation>> {
    let evaluation = sqlx::query_as::<_, PerformanceEvaluation>(
        "SELECT * FROM performance_evaluation WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(evaluation)
}

pub async fn find_details(pool: &SqlitePool, id: i64) -> RepoResult<Option<EvaluationDetails>> {
    let evaluation = sqlx::query_as::<_, EvaluationDetails>(
        "SELECT p.*, \
                e.first_name || ' ' || e.last_name AS employee_name, \
                r.first_name || ' ' || r.last_name AS reviewer_name \
         FROM performance_evaluation p \
         JOIN employee e ON p.employee_id = e.id \
         JOIN employee r ON p.reviewer_id = r.id \
         WHERE p.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(evaluation)
}

pub async fn create(pool: &SqlitePool, data: &NewEvaluation) -> RepoResult<PerformanceEvaluation> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO performance_evaluation (employee_id, reviewer_id, evaluation_date, rating, comments) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.reviewer_id)
    .bind(data.evaluation_date)
    .bind(data.rating)
    .bind(&data.comments)
    .fetch_one(pool)
    .await
    .map_err(|e| classify_write(e, &[], MISSING_REFERENCE))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load created evaluation".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &NewEvaluation,
) -> RepoResult<PerformanceEvaluation> {
    let rows = sqlx::query(
        "UPDATE performance_evaluation SET employee_id = ?, reviewer_id = ?, evaluation_date = ?, \
         rating = ?, comments = ? \
         WHERE id = ?",
    )
    .bind(data.employee_id)
    .bind(data.reviewer_id)
    .bind(data.evaluation_date)
    .bind(data.rating)
    .bind(&data.comments)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| classify_write(e, &[], MISSING_REFERENCE))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Evaluation {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Evaluation {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM performance_evaluation WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Evaluation {id} not found")));
    }
    Ok(())
}
