//! Natural-key uniqueness and delete protection across the remaining
//! entities. Constraint rejection is an expected, recoverable outcome.

mod common;

use chrono::NaiveTime;

use common::{date, seed_department, seed_employee, seed_training, test_db};
use hr_server::db::models::{
    Grade, NewAttendance, NewDepartment, NewEmployeeTraining, NewJobPosition, NewPayrollRecord,
};
use hr_server::db::repository::{
    RepoError, attendance, department, employee_training, job_position, payroll, training,
};

#[tokio::test]
async fn duplicate_department_name_is_rejected() {
    let (_dir, pool) = test_db().await;
    seed_department(&pool, 1).await;

    let err = department::create(
        &pool,
        &NewDepartment {
            dept_name: "Department 1".into(),
            location: None,
            manager_id: None,
        },
    )
    .await
    .expect_err("duplicate name");
    match err {
        RepoError::Duplicate(msg) => assert_eq!(msg, "Department name must be unique"),
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(department::list(&pool).await.expect("list").len(), 1);
}

#[tokio::test]
async fn duplicate_job_title_is_rejected() {
    let (_dir, pool) = test_db().await;
    let data = NewJobPosition {
        job_title: "Analyst".into(),
        job_description: None,
        min_salary: 40_000.0,
        max_salary: 70_000.0,
    };
    job_position::create(&pool, &data).await.expect("create");

    let err = job_position::create(&pool, &data).await.expect_err("duplicate title");
    match err {
        RepoError::Duplicate(msg) => assert_eq!(msg, "Job title must be unique"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn one_attendance_row_per_employee_and_day() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;

    let data = NewAttendance {
        employee_id: emp.id,
        work_date: date(2026, 2, 2),
        time_in: NaiveTime::from_hms_opt(9, 0, 0).expect("time"),
        time_out: NaiveTime::from_hms_opt(17, 30, 0),
    };
    attendance::create(&pool, &data).await.expect("create");

    let err = attendance::create(&pool, &data).await.expect_err("same day");
    match err {
        RepoError::Duplicate(msg) => {
            assert_eq!(msg, "Attendance for this employee on this date already exists")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(attendance::list(&pool).await.expect("list").len(), 1);
}

#[tokio::test]
async fn one_payroll_row_per_employee_and_period() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;

    let data = NewPayrollRecord {
        employee_id: emp.id,
        pay_period_start: date(2026, 1, 1),
        pay_period_end: date(2026, 1, 31),
        gross_pay: 180_000.0,
        deductions: 12_000.0,
        net_pay: 168_000.0,
        date_paid: date(2026, 2, 1),
    };
    payroll::create(&pool, &data).await.expect("create");

    let err = payroll::create(&pool, &data).await.expect_err("same period");
    match err {
        RepoError::Duplicate(msg) => {
            assert_eq!(msg, "Payroll for this employee and period already exists")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn duplicate_employee_training_pair_is_rejected() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;
    let session = seed_training(&pool, 1).await;

    let data = NewEmployeeTraining {
        employee_id: emp.id,
        training_id: session.id,
        completion_date: None,
        grade: Some(Grade::B),
    };
    employee_training::create(&pool, &data).await.expect("create");

    let err = employee_training::create(&pool, &data).await.expect_err("same pair");
    match err {
        RepoError::Duplicate(msg) => {
            assert_eq!(msg, "This employee-training record already exists")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn department_delete_is_blocked_by_assigned_employees() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;

    let err = department::delete(&pool, emp.dept_id).await.expect_err("blocked");
    assert!(matches!(err, RepoError::ReferentialBlock(_)), "got {err:?}");
    assert!(
        department::find_by_id(&pool, emp.dept_id)
            .await
            .expect("query")
            .is_some()
    );
}

#[tokio::test]
async fn job_position_delete_is_blocked_by_assigned_employees() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;

    let err = job_position::delete(&pool, emp.job_id).await.expect_err("blocked");
    assert!(matches!(err, RepoError::ReferentialBlock(_)), "got {err:?}");
}

#[tokio::test]
async fn training_delete_is_blocked_by_enrollments() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;
    let session = seed_training(&pool, 1).await;
    employee_training::create(
        &pool,
        &NewEmployeeTraining {
            employee_id: emp.id,
            training_id: session.id,
            completion_date: None,
            grade: None,
        },
    )
    .await
    .expect("enroll");

    let err = training::delete(&pool, session.id).await.expect_err("blocked");
    assert!(matches!(err, RepoError::ReferentialBlock(_)), "got {err:?}");

    employee_training::delete(&pool, (emp.id, session.id))
        .await
        .expect("unenroll");
    training::delete(&pool, session.id).await.expect("delete session");
}
