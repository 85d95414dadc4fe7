//! Job Position API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Job position router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/job-position", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/view", get(handler::list))
        .route("/details/{id}", get(handler::details))
        .route("/add", get(handler::add_form).post(handler::add))
        .route("/edit/{id}", get(handler::edit_form).post(handler::edit))
        .route("/delete/{id}", get(handler::delete_confirm).post(handler::delete))
}
