//! 统一的应用状态。

use system_capabilities::{FileSystemCapabilities, ListingMode};

use crate::config::ServerConfig;

/// 统一的应用状态，启动后只读。
#[derive(Clone)]
pub struct AppState {
    /// 文件系统能力。
    pub filesystem: FileSystemCapabilities,
    /// 列举模式。
    pub listing_mode: ListingMode,
    /// 未提供 `path` 查询参数时使用的路径。
    pub default_path: String,
}

impl AppState {
    /// 根据服务配置创建应用状态。
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            filesystem: FileSystemCapabilities::new(),
            listing_mode: config.listing_mode,
            default_path: config.default_path.clone(),
        }
    }
}
