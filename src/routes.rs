// routes.rs
use std::time::Duration;

use axum::{routing::get, Router};
use http::{header::CONTENT_TYPE, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let polls = get(handlers::list_polls).post(handlers::create_poll);

    Router::new()
        .route("/", get(handlers::health))
        .route("/api/polls", polls.clone())
        .route("/api/polls/", polls)
        .route("/api/polls/{id}", get(handlers::get_poll))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
