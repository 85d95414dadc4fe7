//! Training Session Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult, classify_delete};
use crate::db::models::{NewTrainingSession, TrainingRef, TrainingSession};

const BLOCKED_DELETE: &str = "Training session still has employee enrollments";

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<TrainingSession>> {
    let sessions = sqlx::query_as::<_, TrainingSession>(
        "SELECT id, session_title, description, instructor, session_date \
         FROM training_session ORDER BY session_date DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(sessions)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<TrainingSession>> {
    let session =
        sqlx::query_as::<_, TrainingSession>("SELECT * FROM training_session WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(session)
}

pub async fn refs(pool: &SqlitePool) -> RepoResult<Vec<TrainingRef>> {
    let sessions = sqlx::query_as::<_, TrainingRef>(
        "SELECT id, session_title FROM training_session ORDER BY session_date DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(sessions)
}

pub async fn create(pool: &SqlitePool, data: &NewTrainingSession) -> RepoResult<TrainingSession> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO training_session (session_title, description, instructor, session_date) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.session_title)
    .bind(&data.description)
    .bind(&data.instructor)
    .bind(data.session_date)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load created training session".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &NewTrainingSession,
) -> RepoResult<TrainingSession> {
    let rows = sqlx::query(
        "UPDATE training_session SET session_title = ?, description = ?, instructor = ?, session_date = ? \
         WHERE id = ?",
    )
    .bind(&data.session_title)
    .bind(&data.description)
    .bind(&data.instructor)
    .bind(data.session_date)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Training session {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Training session {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM training_session WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| classify_delete(e, BLOCKED_DELETE))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Training session {id} not found")));
    }
    Ok(())
}
