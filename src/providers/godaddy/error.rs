//! GoDaddy 错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::GodaddyProvider;

/// GoDaddy 错误码映射
/// 参考: <https://developer.godaddy.com/doc/endpoint/domains>
impl ProviderErrorMapper for GodaddyProvider {
    fn provider_name(&self) -> &'static str {
        "godaddy"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // 认证错误
            Some("UNABLE_TO_AUTHENTICATE" | "ACCESS_DENIED") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }
            // 记录已存在
            Some("DUPLICATE_RECORD") => ProviderError::RecordExists {
                provider: self.provider_name().to_string(),
                record_name: context.record_name.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            // 域名不存在或不属于该账号
            Some("UNKNOWN_DOMAIN" | "NOT_FOUND") => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            // 限流
            Some("THROTTLED" | "TOO_MANY_REQUESTS") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            // 其他错误 fallback
            _ => self.unknown_error(raw),
        }
    }
}
