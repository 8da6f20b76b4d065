//! API 路由模块。
//!
//! 提供目录列举 API。

pub mod filesystem;
pub mod state;

pub use filesystem::create_filesystem_router;
pub use state::AppState;
