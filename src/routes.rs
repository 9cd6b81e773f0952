use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::AppState;

/// Build the application router.
///
/// Both routes dispatch by method: GET reads or lists, POST uploads, and
/// every other method falls through to a 400 naming the method.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/",
            get(handlers::get_root)
                .post(handlers::post_root)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/*path",
            get(handlers::get_path)
                .post(handlers::post_path)
                .fallback(handlers::method_not_allowed),
        )
        // Upload sizes are enforced per-request against the configured limit
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Log every request (method + URI) before dispatch
async fn log_request(req: Request, next: Next) -> Response {
    info!("request {} {}", req.method(), req.uri());
    next.run(req).await
}
