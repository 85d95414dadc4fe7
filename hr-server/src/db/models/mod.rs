//! Data models
//!
//! One module per entity. DB row types derive `sqlx::FromRow`; all surrogate
//! keys are `i64` (SQLite INTEGER PRIMARY KEY). Each entity also carries its
//! raw form payload (untyped strings, exactly as submitted) and the validated
//! `New*` struct the repositories persist.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod employee_training;
pub mod evaluation;
pub mod job_position;
pub mod leave_request;
pub mod payroll;
pub mod training;

// Re-exports
pub use attendance::*;
pub use department::*;
pub use employee::*;
pub use employee_training::*;
pub use evaluation::*;
pub use job_position::*;
pub use leave_request::*;
pub use payroll::*;
pub use training::*;
