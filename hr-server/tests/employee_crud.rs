//! Employee CRUD round-trips, uniqueness and referential protection.

mod common;

use chrono::NaiveTime;

use common::{date, new_employee, seed_employee, test_db};
use hr_server::db::models::{EmployeeStatus, NewAttendance};
use hr_server::db::repository::{RepoError, attendance, employee};

#[tokio::test]
async fn insert_then_get_round_trips() {
    let (_dir, pool) = test_db().await;
    let created = seed_employee(&pool, 1).await;

    let fetched = employee::find_by_id(&pool, created.id)
        .await
        .expect("query")
        .expect("employee exists");

    assert_eq!(fetched.first_name, "First1");
    assert_eq!(fetched.last_name, "Last1");
    assert_eq!(fetched.cnic, "12345-1234501-1");
    assert_eq!(fetched.email, "employee1@example.com");
    assert_eq!(fetched.date_of_birth, date(1990, 1, 1));
    assert_eq!(fetched.join_date, Some(date(2020, 1, 6)));
    assert_eq!(fetched.status, EmployeeStatus::Active);
    assert_eq!(fetched.job_id, created.job_id);
    assert_eq!(fetched.dept_id, created.dept_id);
}

#[tokio::test]
async fn duplicate_cnic_is_rejected_and_single_row_kept() {
    let (_dir, pool) = test_db().await;
    let first = seed_employee(&pool, 1).await;

    let mut dup = new_employee(2, first.job_id, first.dept_id);
    dup.cnic = first.cnic.clone();

    let err = employee::create(&pool, &dup).await.expect_err("duplicate cnic");
    match err {
        RepoError::Duplicate(msg) => assert_eq!(msg, "CNIC must be unique"),
        other => panic!("unexpected error: {other:?}"),
    }

    let all = employee::list(&pool).await.expect("list");
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let (_dir, pool) = test_db().await;
    let first = seed_employee(&pool, 1).await;

    let mut dup = new_employee(2, first.job_id, first.dept_id);
    dup.email = first.email.clone();

    let err = employee::create(&pool, &dup).await.expect_err("duplicate email");
    match err {
        RepoError::Duplicate(msg) => assert_eq!(msg, "Email must be unique"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn dangling_job_reference_is_rejected() {
    let (_dir, pool) = test_db().await;
    let existing = seed_employee(&pool, 1).await;

    let mut data = new_employee(2, 9999, existing.dept_id);
    data.cnic = "99999-9999999-9".into();

    let err = employee::create(&pool, &data).await.expect_err("bad job id");
    assert!(matches!(err, RepoError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn update_rewrites_fields() {
    let (_dir, pool) = test_db().await;
    let created = seed_employee(&pool, 1).await;

    let mut data = new_employee(1, created.job_id, created.dept_id);
    data.phone_number = "0311-7654321".into();
    data.status = EmployeeStatus::OnLeave;

    let updated = employee::update(&pool, created.id, &data).await.expect("update");
    assert_eq!(updated.phone_number, "0311-7654321");
    assert_eq!(updated.status, EmployeeStatus::OnLeave);

    let err = employee::update(&pool, 9999, &data).await.expect_err("missing row");
    assert!(matches!(err, RepoError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn delete_is_blocked_while_attendance_references_employee() {
    let (_dir, pool) = test_db().await;
    let created = seed_employee(&pool, 1).await;

    let record = attendance::create(
        &pool,
        &NewAttendance {
            employee_id: created.id,
            work_date: date(2026, 2, 2),
            time_in: NaiveTime::from_hms_opt(9, 0, 0).expect("time"),
            time_out: None,
        },
    )
    .await
    .expect("seed attendance");

    let err = employee::delete(&pool, created.id).await.expect_err("blocked");
    assert!(matches!(err, RepoError::ReferentialBlock(_)), "got {err:?}");

    // The employee row must be intact after the blocked delete.
    assert!(
        employee::find_by_id(&pool, created.id)
            .await
            .expect("query")
            .is_some()
    );

    // Once the dependent row is gone the delete goes through.
    attendance::delete(&pool, record.id).await.expect("delete attendance");
    employee::delete(&pool, created.id).await.expect("delete employee");
    assert!(
        employee::find_by_id(&pool, created.id)
            .await
            .expect("query")
            .is_none()
    );
}
