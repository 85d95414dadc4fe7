//! Cross-field form validation runs before any store access and reports
//! every failing field at once, in declaration order.

use hr_server::db::models::{
    AttendanceForm, EmployeeForm, LeaveRequestForm, PayrollForm,
};

fn leave_form(start: &str, end: &str) -> LeaveRequestForm {
    LeaveRequestForm {
        employee_id: "1".into(),
        leave_type: "Annual".into(),
        start_date: start.into(),
        end_date: end.into(),
        reason: "Family trip".into(),
    }
}

#[test]
fn leave_end_before_start_is_rejected() {
    let errors = leave_form("2026-02-10", "2026-02-09")
        .validate()
        .expect_err("backwards period");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "endDate");

    // Single-day leave is fine.
    assert!(leave_form("2026-02-10", "2026-02-10").validate().is_ok());
}

#[test]
fn payroll_period_ordering_and_deductions_default() {
    let mut form = PayrollForm {
        employee_id: "1".into(),
        pay_period_start: "2026-01-01".into(),
        pay_period_end: "2025-12-31".into(),
        gross_pay: "180000".into(),
        deductions: String::new(),
        net_pay: "180000".into(),
        date_paid: "2026-02-01".into(),
    };
    let errors = form.validate().expect_err("backwards period");
    assert_eq!(errors[0].field, "payPeriodEnd");

    form.pay_period_end = "2026-01-31".into();
    let record = form.validate().expect("valid form");
    assert_eq!(record.deductions, 0.0);
}

#[test]
fn negative_amounts_are_rejected() {
    let form = PayrollForm {
        employee_id: "1".into(),
        pay_period_start: "2026-01-01".into(),
        pay_period_end: "2026-01-31".into(),
        gross_pay: "-5".into(),
        deductions: "0".into(),
        net_pay: "0".into(),
        date_paid: "2026-02-01".into(),
    };
    let errors = form.validate().expect_err("negative gross");
    assert_eq!(errors[0].field, "grossPay");
}

#[test]
fn attendance_time_format_is_checked() {
    let form = AttendanceForm {
        employee_id: "1".into(),
        work_date: "2026-02-02".into(),
        time_in: "9 o'clock".into(),
        time_out: String::new(),
    };
    let errors = form.validate().expect_err("bad time");
    assert_eq!(errors[0].field, "timeIn");
}

#[test]
fn empty_employee_form_reports_fields_in_declaration_order() {
    let errors = EmployeeForm::default().validate().expect_err("empty form");
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "firstName",
            "lastName",
            "cnic",
            "dateOfBirth",
            "email",
            "phoneNumber",
            "address",
            "jobId",
            "deptId",
        ]
    );
}
