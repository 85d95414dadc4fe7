//! Employee Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult, classify_delete, classify_write};
use crate::db::models::{Employee, EmployeeDetails, EmployeeRef, EmployeeSummary, NewEmployee};

const UNIQUE_MESSAGES: &[(&str, &str)] = &[
    ("employee.cnic", "CNIC must be unique"),
    ("employee.email", "Email must be unique"),
];

const MISSING_REFERENCE: &str = "Selected job position or department does not exist";

const BLOCKED_DELETE: &str =
    "Employee is still referenced by attendance, leave, payroll, training or evaluation records";

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<EmployeeSummary>> {
    let employees = sqlx::query_as::<_, EmployeeSummary>(
        "SELECT e.id, e.first_name, e.last_name, e.cnic, e.email, e.phone_number, e.status, \
                j.job_title, d.dept_name \
         FROM employee e \
         LEFT JOIN job_position j ON e.job_id = j.id \
         LEFT JOIN department d ON e.dept_id = d.id \
         ORDER BY e.last_name, e.first_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employee WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn find_details(pool: &SqlitePool, id: i64) -> RepoResult<Option<EmployeeDetails>> {
    let employee = sqlx::query_as::<_, EmployeeDetails>(
        "SELECT e.*, j.job_title, d.dept_name \
         FROM employee e \
         LEFT JOIN job_position j ON e.job_id = j.id \
         LEFT JOIN department d ON e.dept_id = d.id \
         WHERE e.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Dropdown references; attendance and leave forms only offer Active employees.
pub async fn refs(pool: &SqlitePool, active_only: bool) -> RepoResult<Vec<EmployeeRef>> {
    let sql = if active_only {
        "SELECT id, first_name, last_name FROM employee WHERE status = 'Active' ORDER BY first_name"
    } else {
        "SELECT id, first_name, last_name FROM employee ORDER BY first_name"
    };
    let employees = sqlx::query_as::<_, EmployeeRef>(sql).fetch_all(pool).await?;
    Ok(employees)
}

pub async fn create(pool: &SqlitePool, data: &NewEmployee) -> RepoResult<Employee> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO employee \
         (first_name, last_name, cnic, date_of_birth, email, phone_number, address, join_date, status, job_id, dept_id) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING id",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.cnic)
    .bind(data.date_of_birth)
    .bind(&data.email)
    .bind(&data.phone_number)
    .bind(&data.address)
    .bind(data.join_date)
    .bind(data.status)
    .bind(data.job_id)
    .bind(data.dept_id)
    .fetch_one(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load created employee".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: &NewEmployee) -> RepoResult<Employee> {
    let rows = sqlx::query(
        "UPDATE employee SET first_name = ?, last_name = ?, cnic = ?, date_of_birth = ?, \
         email = ?, phone_number = ?, address = ?, join_date = ?, status = ?, job_id = ?, dept_id = ? \
         WHERE id = ?",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.cnic)
    .bind(data.date_of_birth)
    .bind(&data.email)
    .bind(&data.phone_number)
    .bind(&data.address)
    .bind(data.join_date)
    .bind(data.status)
    .bind(data.job_id)
    .bind(data.dept_id)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| classify_delete(e, BLOCKED_DELETE))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    Ok(())
}
