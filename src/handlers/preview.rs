use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    response::Redirect,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::models::AppState;

use super::pricing::pricing_get;

/// Router for the local preview: the pricing JSON API plus the built site.
pub fn build_app(state: AppState) -> Router {
    let static_site = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .service(ServeDir::new(&state.output_dir));

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/pricing/") }))
        .route("/api/pricing", get(pricing_get))
        .fallback_service(static_site)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
