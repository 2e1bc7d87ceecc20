//! GoDaddy DNS TXT 记录客户端
//!
//! 面向 ACME DNS-01 域名所有权验证的单域名 TXT 记录管理库：
//! 按名称查询、添加、删除。每个操作都是一次（删除为两次）独立的
//! HTTP 交互，库本身不缓存任何记录状态。
//!
//! 入口为 [`GodaddyProvider`]，操作集合见 [`TxtRecordProvider`]。
//! 删除的 read-modify-write 语义与丢失更新风险见
//! [`providers::godaddy`] 模块文档。

pub mod error;
pub mod http_client;
pub mod providers;
pub mod traits;
pub mod types;

pub use error::{ProviderError, Result};
pub use providers::godaddy::{DeleteMatch, GodaddyProvider};
pub use traits::TxtRecordProvider;
pub use types::{TXT_RECORD_TYPE, TxtRecord};
