//! 文件系统能力模块。
//!
//! 提供路径存在性检查与非递归目录列举能力。

use std::path::Path;

use dirlist_api_types::{DirectoryEntry, EntryType};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// 文件系统错误类型。
#[derive(Debug, Error)]
pub enum FileSystemError {
    #[error("路径不存在: {0}")]
    PathNotFound(String),

    /// 列举目录期间的任何 IO 故障（权限不足、不是目录、竞态删除等）。
    #[error("{source}: '{path}'")]
    Enumeration {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FileSystemError>;

/// 列举模式。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingMode {
    /// 仅返回子目录，条目不带类型字段。
    Folders,
    /// 返回全部条目，并标注 `folder` / `file`。
    #[default]
    All,
}

/// 文件系统能力接口。
#[derive(Debug, Clone, Default)]
pub struct FileSystemCapabilities;

impl FileSystemCapabilities {
    /// 创建新的文件系统能力实例。
    pub fn new() -> Self {
        Self
    }

    /// 检查路径是否存在（文件或目录均可）。
    pub fn path_exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    /// 检查路径是否为目录（跟随符号链接）。
    pub fn is_directory(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_dir()
    }

    /// 列出目录的直接子条目。
    ///
    /// 结果保持底层枚举的原始顺序，不去重、不排序、不过滤隐藏文件。
    /// 任一条目读取失败都会使整个列举失败。
    /// 非 UTF-8 的名称按有损方式转换，无效字节替换为 U+FFFD。
    pub fn list_directory(&self, path: &str, mode: ListingMode) -> Result<Vec<DirectoryEntry>> {
        if !self.path_exists(path) {
            return Err(FileSystemError::PathNotFound(path.to_string()));
        }

        debug!(path = %path, mode = ?mode, "listing directory");

        let dir = Path::new(path);
        let enumeration_error = |source: std::io::Error| FileSystemError::Enumeration {
            path: path.to_string(),
            source,
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(enumeration_error)? {
            let entry = entry.map_err(enumeration_error)?;
            let file_name = entry.file_name();
            let joined = dir.join(&file_name);
            let is_dir = self.is_directory(&joined);

            let entry_type = match mode {
                ListingMode::Folders if !is_dir => continue,
                ListingMode::Folders => None,
                ListingMode::All => Some(EntryType::from_is_dir(is_dir)),
            };

            entries.push(DirectoryEntry {
                name: file_name.to_string_lossy().into_owned(),
                path: joined.to_string_lossy().into_owned(),
                entry_type,
            });
        }

        debug!(path = %path, count = entries.len(), "directory listed");
        Ok(entries)
    }
}
