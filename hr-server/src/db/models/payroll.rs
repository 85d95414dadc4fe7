//! Payroll Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{self, ErrorSink, FieldError};

/// Payroll row — unique per (employee, pay period)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PayrollRecord {
    pub id: i64,
    pub employee_id: i64,
    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,
    pub gross_pay: f64,
    pub deductions: f64,
    pub net_pay: f64,
    pub date_paid: NaiveDate,
}

/// Payroll list row with the employee's display name joined in
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PayrollSummary {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,
    pub gross_pay: f64,
    pub deductions: f64,
    pub net_pay: f64,
    pub date_paid: NaiveDate,
}

/// Full payroll record with joined display fields
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PayrollDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub payroll: PayrollRecord,
    pub employee_name: String,
}

/// Raw submitted payroll form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayrollForm {
    pub employee_id: String,
    pub pay_period_start: String,
    pub pay_period_end: String,
    pub gross_pay: String,
    pub deductions: String,
    pub net_pay: String,
    pub date_paid: String,
}

/// Validated payroll fields
#[derive(Debug, Clone)]
pub struct NewPayrollRecord {
    pub employee_id: i64,
    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,
    pub gross_pay: f64,
    pub deductions: f64,
    pub net_pay: f64,
    pub date_paid: NaiveDate,
}

impl PayrollForm {
    pub fn validate(&self) -> Result<NewPayrollRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let employee_id = errors.take(validation::required_id(&self.employee_id, "employeeId"));
        let pay_period_start =
            errors.take(validation::required_date(&self.pay_period_start, "payPeriodStart"));
        let pay_period_end =
            errors.take(validation::required_date(&self.pay_period_end, "payPeriodEnd"));
        let gross_pay = errors.take(validation::required_amount(&self.gross_pay, "grossPay"));
        let deductions =
            errors.take(validation::amount_or_default(&self.deductions, "deductions", 0.0));
        let net_pay = errors.take(validation::required_amount(&self.net_pay, "netPay"));
        let date_paid = errors.take(validation::required_date(&self.date_paid, "datePaid"));

        // Period ordering is checked against the submitted dates
        if let (Some(start), Some(end)) = (pay_period_start, pay_period_end)
            && end < start
        {
            errors.push(FieldError::new(
                "payPeriodEnd",
                "End date must be on/after start date",
            ));
        }

        let record = (|| {
            Some(NewPayrollRecord {
                employee_id: employee_id?,
                pay_period_start: pay_period_start?,
                pay_period_end: pay_period_end?,
                gross_pay: gross_pay?,
                deductions: deductions?,
                net_pay: net_pay?,
                date_paid: date_paid?,
            })
        })();
        record.filter(|_| errors.is_empty()).ok_or(errors)
    }
}
