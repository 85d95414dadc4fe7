//! Department Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult, classify_delete, classify_write};
use crate::db::models::{Department, DepartmentRef, DepartmentSummary, NewDepartment};

const UNIQUE_MESSAGES: &[(&str, &str)] =
    &[("department.dept_name", "Department name must be unique")];

const MISSING_REFERENCE: &str = "Selected manager does not exist";

const BLOCKED_DELETE: &str = "Department still has employees assigned to it";

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<DepartmentSummary>> {
    let departments = sqlx::query_as::<_, DepartmentSummary>(
        "SELECT d.id, d.dept_name, d.location, d.manager_id, \
                e.first_name || ' ' || e.last_name AS manager_name \
         FROM department d \
         LEFT JOIN employee e ON d.manager_id = e.id \
         ORDER BY d.dept_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(departments)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>("SELECT * FROM department WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(department)
}

pub async fn find_details(pool: &SqlitePool, id: i64) -> RepoResult<Option<DepartmentSummary>> {
    let department = sqlx::query_as::<_, DepartmentSummary>(
        "SELECT d.id, d.dept_name, d.location, d.manager_id, \
                e.first_name || ' ' || e.last_name AS manager_name \
         FROM department d \
         LEFT JOIN employee e ON d.manager_id = e.id \
         WHERE d.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(department)
}

pub async fn refs(pool: &SqlitePool) -> RepoResult<Vec<DepartmentRef>> {
    let departments =
        sqlx::query_as::<_, DepartmentRef>("SELECT id, dept_name FROM department ORDER BY dept_name")
            .fetch_all(pool)
            .await?;
    Ok(departments)
}

pub async fn create(pool: &SqlitePool, data: &NewDepartment) -> RepoResult<Department> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO department (dept_name, location, manager_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.dept_name)
    .bind(&data.location)
    .bind(data.manager_id)
    .fetch_one(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load created department".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: &NewDepartment) -> RepoResult<Department> {
    let rows = sqlx::query(
        "UPDATE department SET dept_name = ?, location = ?, manager_id = ? WHERE id = ?",
    )
    .bind(&data.dept_name)
    .bind(&data.location)
    .bind(data.manager_id)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Department {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM department WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| classify_delete(e, BLOCKED_DELETE))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Department {id} not found")));
    }
    Ok(())
}
