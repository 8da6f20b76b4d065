//! System Capabilities - 系统能力封装模块。
//!
//! 该 crate 提供文件系统能力接口，供 server 集成为 API 路由。

pub mod filesystem;

pub use filesystem::{FileSystemCapabilities, FileSystemError, ListingMode, Result};
