//! Provider 抽象 trait

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::TxtRecord;

/// TXT 记录操作能力
///
/// 面向 ACME DNS-01 验证的最小集合：按名称查询、添加、删除。
/// 实现必须无内部可变状态（删除串行化锁除外），可在多任务间共享。
#[async_trait]
pub trait TxtRecordProvider: Send + Sync {
    /// 查询指定名称下的全部 TXT 记录
    ///
    /// 返回顺序为服务端顺序，不具有语义。无匹配记录时返回空集合。
    async fn get_txt_records(&self, name: &str) -> Result<Vec<TxtRecord>>;

    /// 添加一条 TXT 记录（add-or-merge 语义，不影响无关记录）
    async fn add_txt_record(&self, name: &str, value: &str) -> Result<()>;

    /// 按名称删除 TXT 记录
    ///
    /// 记录不存在时视为成功的 no-op，不返回错误。
    async fn delete_txt_record(&self, name: &str) -> Result<()>;
}

/// 服务端返回的原始错误（尚未映射）
#[derive(Debug, Clone)]
pub struct RawApiError {
    pub code: Option<String>,
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文：调用点已知的信息，供错误映射时填充
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub domain: Option<String>,
    pub record_name: Option<String>,
}

/// Provider 错误映射
///
/// 各 provider 自行决定错误码如何归类，未识别的错误码
/// 通过 [`ProviderErrorMapper::unknown_error`] 兜底。
pub trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射为 [`ProviderError`]
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 未识别错误码的 fallback
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::ApiError {
            provider: self.provider_name().to_string(),
            code: raw.code,
            message: raw.message,
        }
    }
}
