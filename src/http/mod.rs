//! HTTP router and handlers.

use crate::app::AppState;
use axum::{Router, routing::post};

pub mod send;

/// Fixed prefix the submission route is mounted under.
pub const ROUTE_PREFIX: &str = "/api/sendMail";

/// Assemble the HTTP router with the submission route under its prefix.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest(ROUTE_PREFIX, routes())
        // axum's `nest` only matches the bare prefix; register the
        // trailing-slash form of the endpoint explicitly.
        .route(
            &format!("{ROUTE_PREFIX}/"),
            post(send::send_submission),
        )
        .with_state(state)
}

fn routes() -> Router<AppState> {
    Router::new().route("/", post(send::send_submission))
}
