use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::store::RosterStore;

pub mod routes;

use routes::{activities, activity, health};

/// Full application router. The store is owned by the router's state, so
/// each call with a fresh store yields an isolated app.
pub fn router(store: RosterStore, static_dir: impl AsRef<Path>) -> Router {
    let api_routes = Router::new()
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name",
            get(activities::activity_detail_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/participants/:email",
            delete(activity::remove_participant_handler),
        );

    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/health", get(health::health_handler))
        .merge(api_routes)
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
