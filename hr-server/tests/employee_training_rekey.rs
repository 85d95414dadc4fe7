//! Composite-key edits on the employee-training association: in-place
//! updates when the key is unchanged, atomic re-keying when it is not.

mod common;

use common::{date, seed_employee, seed_training, test_db};
use hr_server::db::models::{Grade, NewEmployeeTraining};
use hr_server::db::repository::{RepoError, employee_training};

fn record(employee_id: i64, training_id: i64, grade: Option<Grade>) -> NewEmployeeTraining {
    NewEmployeeTraining {
        employee_id,
        training_id,
        completion_date: Some(date(2026, 4, 1)),
        grade,
    }
}

#[tokio::test]
async fn unchanged_key_updates_in_place() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;
    let session = seed_training(&pool, 1).await;

    employee_training::create(&pool, &record(emp.id, session.id, Some(Grade::B)))
        .await
        .expect("create");

    let mut data = record(emp.id, session.id, Some(Grade::APlus));
    data.completion_date = Some(date(2026, 4, 15));

    let updated = employee_training::update(&pool, (emp.id, session.id), &data)
        .await
        .expect("update");

    assert_eq!(updated.key(), (emp.id, session.id));
    assert_eq!(updated.grade, Some(Grade::APlus));
    assert_eq!(updated.completion_date, Some(date(2026, 4, 15)));
}

#[tokio::test]
async fn rekey_moves_the_record_to_the_submitted_pair() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;
    let first = seed_training(&pool, 1).await;
    let second = seed_training(&pool, 2).await;

    employee_training::create(&pool, &record(emp.id, first.id, Some(Grade::C)))
        .await
        .expect("create");

    let moved = employee_training::update(
        &pool,
        (emp.id, first.id),
        &record(emp.id, second.id, Some(Grade::A)),
    )
    .await
    .expect("re-key");

    assert_eq!(moved.key(), (emp.id, second.id));
    assert_eq!(moved.grade, Some(Grade::A));

    // Original key is gone, new key exists — exactly one row.
    assert!(
        employee_training::find_by_key(&pool, (emp.id, first.id))
            .await
            .expect("query")
            .is_none()
    );
    let all = employee_training::list(&pool).await.expect("list");
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn rekey_conflict_fails_atomically() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;
    let first = seed_training(&pool, 1).await;
    let second = seed_training(&pool, 2).await;

    employee_training::create(&pool, &record(emp.id, first.id, Some(Grade::C)))
        .await
        .expect("create first");
    employee_training::create(&pool, &record(emp.id, second.id, Some(Grade::B)))
        .await
        .expect("create second");

    // Re-keying (emp, first) onto the occupied (emp, second) must abort.
    let err = employee_training::update(
        &pool,
        (emp.id, first.id),
        &record(emp.id, second.id, Some(Grade::F)),
    )
    .await
    .expect_err("occupied key");
    assert!(matches!(err, RepoError::Duplicate(_)), "got {err:?}");

    // Original row untouched, target row untouched, no duplicates.
    let original = employee_training::find_by_key(&pool, (emp.id, first.id))
        .await
        .expect("query")
        .expect("original row intact");
    assert_eq!(original.grade, Some(Grade::C));

    let target = employee_training::find_by_key(&pool, (emp.id, second.id))
        .await
        .expect("query")
        .expect("target row intact");
    assert_eq!(target.grade, Some(Grade::B));

    let all = employee_training::list(&pool).await.expect("list");
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn rekey_of_missing_original_reports_not_found() {
    let (_dir, pool) = test_db().await;
    let emp = seed_employee(&pool, 1).await;
    let session = seed_training(&pool, 1).await;

    let err = employee_training::update(
        &pool,
        (emp.id, session.id + 1),
        &record(emp.id, session.id, None),
    )
    .await
    .expect_err("missing original");
    assert!(matches!(err, RepoError::NotFound(_)), "got {err:?}");
}
