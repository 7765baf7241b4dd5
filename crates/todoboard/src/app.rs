use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        clipboards::{create_clipboard, delete_clipboard, list_clipboards, rename_clipboard},
        health::healthz,
        items::{add_item, complete_item, delete_item, list_items, rename_item, unfinish_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // API routes with CORS
    let api_routes = Router::new()
        // Clipboard routes
        .route("/clipboards", get(list_clipboards))
        .route("/clipboard", post(create_clipboard))
        .route(
            "/clipboard/{id}",
            patch(rename_clipboard).delete(delete_clipboard),
        )
        // Item routes
        .route("/items/{clipboard_id}", get(list_items))
        .route("/item", post(add_item))
        .route("/item/{id}", patch(rename_item).delete(delete_item))
        .route("/item/{id}/complete", post(complete_item))
        .route("/item/{id}/unfinish", post(unfinish_item))
        .layer(cors_layer(&config.cors_allowed_origins));

    // Main application router
    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}

/// CORS for API endpoints. An empty list allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
