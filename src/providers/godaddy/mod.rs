//! GoDaddy DNS Provider
//!
//! 通过 GoDaddy v1 records API 管理单个域名下的 TXT 记录，
//! 用于 ACME DNS-01 域名所有权验证。鉴权使用
//! `sso-key {key}:{secret}` 请求头，production 与 OTE 沙箱
//! 环境在构造时选定。
//!
//! # 删除与丢失更新
//!
//! 删除按 read-modify-write 完成：读出域名的全量 TXT 记录集，
//! 在内存中剔除目标记录，再整体 PUT 回写（覆盖语义）。
//! 同一实例上的删除由内部锁串行执行；但读和写之间由其他客户端
//! 写入的 TXT 记录会被回写覆盖而丢失。这是已知限制，
//! 需要跨实例或跨进程安全时，调用方必须自行串行化删除操作。

mod error;
mod http;
mod provider;
mod types;

use std::time::Duration;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::error::{ProviderError, Result};

pub(crate) use types::GodaddyErrorResponse;

pub(crate) const GODADDY_API_BASE: &str = "https://api.godaddy.com";
pub(crate) const GODADDY_OTE_API_BASE: &str = "https://api.ote-godaddy.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// 删除时的同名记录匹配策略
///
/// GoDaddy 允许多条同名 TXT 记录并存。删除时按该策略决定
/// 只剔除首条匹配（服务端顺序）还是全部匹配。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteMatch {
    /// 只删除首条同名记录，其余同名记录保留
    #[default]
    First,
    /// 删除全部同名记录
    All,
}

/// GoDaddy DNS Provider
pub struct GodaddyProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) domain: String,
    pub(crate) authorization: String,
    pub(crate) delete_match: DeleteMatch,
    /// 串行化同一实例上的删除 read-modify-write
    pub(crate) delete_lock: Mutex<()>,
}

impl GodaddyProvider {
    /// 创建 GoDaddy provider
    ///
    /// `sandbox` 为 true 时使用 OTE 测试环境。
    pub fn new(domain: String, sandbox: bool, key: String, secret: String) -> Result<Self> {
        let base_url = if sandbox {
            GODADDY_OTE_API_BASE
        } else {
            GODADDY_API_BASE
        };
        Self::with_base(domain, base_url.to_string(), &key, &secret)
    }

    /// 自定义 API 地址（测试用）
    #[cfg(test)]
    pub(crate) fn with_base_url(
        domain: &str,
        base_url: String,
        key: &str,
        secret: &str,
    ) -> Result<Self> {
        Self::with_base(domain.to_string(), base_url, key, secret)
    }

    fn with_base(domain: String, base_url: String, key: &str, secret: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::NetworkError {
                provider: "godaddy".to_string(),
                detail: format!("创建 HTTP 客户端失败: {e}"),
            })?;

        Ok(Self {
            client,
            base_url,
            domain,
            authorization: format!("sso-key {key}:{secret}"),
            delete_match: DeleteMatch::First,
            delete_lock: Mutex::new(()),
        })
    }

    /// 设置删除时的同名记录匹配策略（默认 [`DeleteMatch::First`]）
    #[must_use]
    pub fn delete_matching(mut self, delete_match: DeleteMatch) -> Self {
        self.delete_match = delete_match;
        self
    }
}
