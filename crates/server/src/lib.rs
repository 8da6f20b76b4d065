//! HTTP 目录列举服务。

pub mod api;
pub mod config;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

pub use api::AppState;
pub use config::ServerConfig;

/// 根据配置构建完整的路由。
pub fn build_router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState::new(config));
    let router = api::create_filesystem_router().with_state(state);

    if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
