//! 文件系统 API 路由。
//!
//! 提供目录列举能力。

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use dirlist_api_types::{DirectoryEntry, ErrorResponse};
use std::sync::Arc;
use system_capabilities::FileSystemError;
use tokio::task::JoinError;
use tracing::{debug, info, warn};

use super::state::AppState;

/// 路径不存在时返回给调用方的提示。
pub const PATH_NOT_FOUND_MESSAGE: &str = "路径不存在";

/// 创建文件系统 API 路由。
pub fn create_filesystem_router() -> Router<Arc<AppState>> {
    Router::new().route("/list", get(list_directory))
}

/// 取查询串中第一个 `path` 参数，重复出现的同名参数被忽略。
fn first_path_param(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find_map(|(key, value)| (key == "path").then_some(value))
}

/// 列出目录内容。
async fn list_directory(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<DirectoryEntry>>, ApiError> {
    let path = first_path_param(params).unwrap_or_else(|| state.default_path.clone());
    debug!(path = %path, "list directory request");

    let filesystem = state.filesystem.clone();
    let mode = state.listing_mode;
    let entries =
        tokio::task::spawn_blocking(move || filesystem.list_directory(&path, mode)).await??;

    Ok(Json(entries))
}

/// API 错误类型。
#[derive(Debug)]
struct ApiError {
    message: String,
    status: StatusCode,
}

impl From<FileSystemError> for ApiError {
    fn from(err: FileSystemError) -> Self {
        match err {
            FileSystemError::PathNotFound(path) => {
                info!(path = %path, "requested path does not exist");
                ApiError {
                    message: PATH_NOT_FOUND_MESSAGE.to_string(),
                    status: StatusCode::NOT_FOUND,
                }
            }
            // 列举失败沿用 200，调用方需根据响应体形状区分成功与失败。
            err @ FileSystemError::Enumeration { .. } => {
                warn!(error = %err, "directory enumeration failed");
                ApiError {
                    message: err.to_string(),
                    status: StatusCode::OK,
                }
            }
        }
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        warn!(error = %err, "directory enumeration task failed");
        ApiError {
            message: err.to_string(),
            status: StatusCode::OK,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}
