use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Full application: system routes at "/" and folders under the API root
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let api = folder_routes();

    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    let router = if state.api_root.is_empty() {
        router.merge(api)
    } else {
        router.nest(&state.api_root, api)
    };

    let mut router = router.with_state(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folders_get).post(handlers::folders_post),
        )
        .route(
            "/folders/:id",
            get(handlers::folder_get).delete(handlers::folder_delete),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::permissive().allow_origin(AllowOrigin::list(allowed))
}
