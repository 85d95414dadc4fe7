//! Employee Training API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee training router — composite keys are two path segments
pub fn router() -> Router<ServerState> {
    Router::new().nest("/employee-training", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/view", get(handler::list))
        .route("/details/{employee_id}/{training_id}", get(handler::details))
        .route("/add", get(handler::add_form).post(handler::add))
        .route(
            "/edit/{employee_id}/{training_id}",
            get(handler::edit_form).post(handler::edit),
        )
        .route(
            "/delete/{employee_id}/{training_id}",
            get(handler::delete_confirm).post(handler::delete),
        )
}
