//! abg-api
//!
//! HTTP boundary for the blood gas engine: request parsing, range
//! validation, JSON serialization and request audit logging. All clinical
//! logic lives in `abg-engine`.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the router with every route and layer attached.
pub fn app(state: AppState) -> Router {
    let cors = if state.config.cors_allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/interpret", post(routes::interpret::interpret_panel))
        .route(
            "/calculate/anion-gap",
            post(routes::calculate::anion_gap),
        )
        .route(
            "/calculate/osmolar-gap",
            post(routes::calculate::osmolar_gap),
        )
        .route("/calculate/winters", post(routes::calculate::winters))
        .route(
            "/calculate/delta-ratio",
            post(routes::calculate::delta_ratio),
        )
        .route("/causes/{disorder}", get(routes::causes::list_causes))
        .route("/reference/ranges", get(routes::reference::list_ranges))
        .fallback(routes::not_found)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
