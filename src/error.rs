//! Provider 统一错误类型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

/// DNS Provider 错误
///
/// 每一次与服务端的交互都必须落在这里的某个分支上：
/// 传输失败、解析失败、或被服务端明确拒绝。
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 网络错误（连接失败、请求超时、读取响应失败）
    #[error("[{provider}] 网络错误: {detail}")]
    NetworkError { provider: String, detail: String },

    /// 响应体解析失败
    #[error("[{provider}] 响应解析失败: {detail}")]
    ParseError { provider: String, detail: String },

    /// 请求体序列化失败
    #[error("[{provider}] 请求序列化失败: {detail}")]
    SerializationError { provider: String, detail: String },

    /// 凭证无效或鉴权被拒绝
    #[error("[{provider}] 凭证无效: {raw_message:?}")]
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// 记录已存在
    #[error("[{provider}] 记录已存在: {record_name}")]
    RecordExists {
        provider: String,
        record_name: String,
        raw_message: Option<String>,
    },

    /// 域名不存在或不属于该账号
    #[error("[{provider}] 域名不存在: {domain}")]
    DomainNotFound {
        provider: String,
        domain: String,
        raw_message: Option<String>,
    },

    /// 请求被限流
    #[error("[{provider}] 请求被限流: {raw_message:?}")]
    RateLimited {
        provider: String,
        raw_message: Option<String>,
    },

    /// 未映射的服务端错误
    #[error("[{provider}] API 错误 ({code:?}): {message}")]
    ApiError {
        provider: String,
        code: Option<String>,
        message: String,
    },
}
