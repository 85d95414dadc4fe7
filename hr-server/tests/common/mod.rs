//! Shared test fixtures: tempfile-backed database plus seed records.
#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tempfile::TempDir;

use hr_server::DbService;
use hr_server::db::models::{
    Department, Employee, EmployeeStatus, NewDepartment, NewEmployee, NewJobPosition,
    NewTrainingSession, TrainingSession,
};
use hr_server::db::repository::{department, employee, job_position, training};

/// Open a fresh migrated database. Keep the returned TempDir alive for the
/// duration of the test.
pub async fn test_db() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("hr_test.db");
    let db = DbService::new(path.to_str().expect("utf8 path"), 5)
        .await
        .expect("open test db");
    (dir, db.pool)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn new_employee(n: u32, job_id: i64, dept_id: i64) -> NewEmployee {
    NewEmployee {
        first_name: format!("First{n}"),
        last_name: format!("Last{n}"),
        cnic: format!("12345-12345{n:02}-1"),
        date_of_birth: date(1990, 1, 1),
        email: format!("employee{n}@example.com"),
        phone_number: "0300-1234567".into(),
        address: "House 12, Street 4, Islamabad".into(),
        join_date: Some(date(2020, 1, 6)),
        status: EmployeeStatus::Active,
        job_id,
        dept_id,
    }
}

pub async fn seed_department(pool: &SqlitePool, n: u32) -> Department {
    department::create(
        pool,
        &NewDepartment {
            dept_name: format!("Department {n}"),
            location: Some("HQ".into()),
            manager_id: None,
        },
    )
    .await
    .expect("seed department")
}

/// Seed one employee together with the job position and department the
/// foreign keys require.
pub async fn seed_employee(pool: &SqlitePool, n: u32) -> Employee {
    let job = job_position::create(
        pool,
        &NewJobPosition {
            job_title: format!("Engineer {n}"),
            job_description: None,
            min_salary: 50_000.0,
            max_salary: 90_000.0,
        },
    )
    .await
    .expect("seed job position");
    let dept = seed_department(pool, n).await;
    employee::create(pool, &new_employee(n, job.id, dept.id))
        .await
        .expect("seed employee")
}

pub async fn seed_training(pool: &SqlitePool, n: u32) -> TrainingSession {
    training::create(
        pool,
        &NewTrainingSession {
            session_title: format!("Workplace Safety {n}"),
            description: None,
            instructor: "Dr. Rao".into(),
            session_date: date(2026, 3, 10),
        },
    )
    .await
    .expect("seed training session")
}
