//! Leave request lifecycle: Pending on submit, one-way review decisions.

mod common;

use chrono::Local;

use common::{date, seed_employee, test_db};
use hr_server::db::models::{LeaveRequestUpdate, LeaveStatus, LeaveType, NewLeaveRequest};
use hr_server::db::repository::{RepoError, leave_request};

fn new_request(employee_id: i64) -> NewLeaveRequest {
    NewLeaveRequest {
        employee_id,
        leave_type: LeaveType::Sick,
        start_date: date(2026, 2, 2),
        end_date: date(2026, 2, 4),
        reason: "Flu".into(),
    }
}

fn decision(employee_id: i64, status: LeaveStatus, reviewed_by: Option<i64>) -> LeaveRequestUpdate {
    LeaveRequestUpdate {
        employee_id,
        leave_type: LeaveType::Sick,
        start_date: date(2026, 2, 2),
        end_date: date(2026, 2, 4),
        reason: "Flu".into(),
        status,
        reviewed_by,
    }
}

#[tokio::test]
async fn submit_starts_pending_with_stamped_date() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;

    let leave = leave_request::create(&pool, &new_request(emp.id))
        .await
        .expect("create");

    assert_eq!(leave.status, LeaveStatus::Pending);
    assert_eq!(leave.submitted_date, Local::now().date_naive());
    assert!(leave.reviewed_by.is_none());
    assert!(leave.review_date.is_none());
}

#[tokio::test]
async fn approval_stamps_reviewer_and_review_date() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;
    let reviewer = seed_employee(&pool, 2).await;

    let leave = leave_request::create(&pool, &new_request(emp.id))
        .await
        .expect("create");

    let approved = leave_request::update(
        &pool,
        leave.id,
        &decision(emp.id, LeaveStatus::Approved, Some(reviewer.id)),
    )
    .await
    .expect("approve");

    assert_eq!(approved.status, LeaveStatus::Approved);
    assert_eq!(approved.reviewed_by, Some(reviewer.id));
    assert_eq!(approved.review_date, Some(Local::now().date_naive()));
}

#[tokio::test]
async fn decided_request_cannot_return_to_pending() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;
    let reviewer = seed_employee(&pool, 2).await;

    let leave = leave_request::create(&pool, &new_request(emp.id))
        .await
        .expect("create");
    leave_request::update(
        &pool,
        leave.id,
        &decision(emp.id, LeaveStatus::Rejected, Some(reviewer.id)),
    )
    .await
    .expect("reject");

    let err = leave_request::update(&pool, leave.id, &decision(emp.id, LeaveStatus::Pending, None))
        .await
        .expect_err("no way back");
    assert!(matches!(err, RepoError::Validation(_)), "got {err:?}");

    let current = leave_request::find_by_id(&pool, leave.id)
        .await
        .expect("query")
        .expect("row exists");
    assert_eq!(current.status, LeaveStatus::Rejected);
}

#[tokio::test]
async fn update_of_missing_request_reports_not_found() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;

    let err = leave_request::update(&pool, 42, &decision(emp.id, LeaveStatus::Pending, None))
        .await
        .expect_err("missing row");
    assert!(matches!(err, RepoError::NotFound(_)), "got {err:?}");
}
