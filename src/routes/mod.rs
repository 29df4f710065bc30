//! Router assembly.

mod car;
mod common;

pub use car::car_routes;
pub use common::common_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;

/// Common routes at the root, car routes under `config.base_path`.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(car_routes(state, &config.base_path, config.body_limit_bytes))
}
