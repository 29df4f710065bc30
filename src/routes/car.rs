//! Car CRUD routes, registered under the configured base path.

use crate::handlers::car::{create, delete as delete_handler, list, read, route_test, update};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

/// Collection routes answer at both `{base}` and `{base}/`.
pub fn car_routes(state: AppState, base_path: &str, body_limit_bytes: usize) -> Router {
    let base = base_path.trim_end_matches('/');
    let mut router = Router::new()
        .route(&format!("{base}/test"), get(route_test))
        .route(&format!("{base}/:id"), get(read).put(update).delete(delete_handler))
        .route(&format!("{base}/"), get(list).post(create));
    if !base.is_empty() {
        router = router.route(base, get(list).post(create));
    }
    router
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(body_limit_bytes)))
        .with_state(state)
}
