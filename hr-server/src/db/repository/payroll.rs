//! Payroll Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult, classify_delete, classify_write};
use crate::db::models::{NewPayrollRecord, PayrollDetails, PayrollRecord, PayrollSummary};

const UNIQUE_MESSAGES: &[(&str, &str)] = &[(
    "payroll_record.employee_id",
    "Payroll for this employee and period already exists",
)];

const MISSING_REFERENCE: &str = "Selected employee does not exist";

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<PayrollSummary>> {
    let payrolls = sqlx::query_as::<_, PayrollSummary>(
        "SELECT p.id, p.employee_id, e.first_name || ' ' || e.last_name AS employee_name, \
                p.pay_period_start, p.pay_period_end, p.gross_pay, p.deductions, p.net_pay, p.date_paid \
         FROM payroll_record p \
         JOIN employee e ON p.employee_id = e.id \
         ORDER BY p.date_paid DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(payrolls)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<PayrollRecord>> {
    let payroll = sqlx::query_as::<_, PayrollRecord>("SELECT * FROM payroll_record WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(payroll)
}

pub async fn find_details(pool: &SqlitePool, id: i64) -> RepoResult<Option<PayrollDetails>> {
    let payroll = sqlx::query_as::<_, PayrollDetails>(
        "SELECT p.*, e.first_name || ' ' || e.last_name AS employee_name \
         FROM payroll_record p \
         JOIN employee e ON p.employee_id = e.id \
         WHERE p.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(payroll)
}

pub async fn create(pool: &SqlitePool, data: &NewPayrollRecord) -> RepoResult<PayrollRecord> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO payroll_record \
         (employee_id, pay_period_start, pay_period_end, gross_pay, deductions, net_pay, date_paid) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.pay_period_start)
    .bind(data.pay_period_end)
    .bind(data.gross_pay)
    .bind(data.deductions)
    .bind(data.net_pay)
    .bind(data.date_paid)
    .fetch_one(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load created payroll record".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: &NewPayrollRecord) -> RepoResult<PayrollRecord> {
    let rows = sqlx::query(
        "UPDATE payroll_record SET employee_id = ?, pay_period_start = ?, pay_period_end = ?, \
         gross_pay = ?, deductions = ?, net_pay = ?, date_paid = ? \
         WHERE id = ?",
    )
    .bind(data.employee_id)
    .bind(data.pay_period_start)
    .bind(data.pay_period_end)
    .bind(data.gross_pay)
    .bind(data.deductions)
    .bind(data.net_pay)
    .bind(data.date_paid)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| classify_write(e, UNIQUE_MESSAGES, MISSING_REFERENCE))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Payroll record {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Payroll record {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM payroll_record WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| classify_delete(e, "Payroll record is referenced by other records"))?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Payroll record {id} not found")));
    }
    Ok(())
}
