//! GoDaddy API 类型定义

use serde::Deserialize;

/// GoDaddy API 错误响应体
///
/// 参考: <https://developer.godaddy.com/doc/endpoint/domains>
#[derive(Debug, Deserialize)]
pub struct GodaddyErrorResponse {
    pub code: Option<String>,
    pub message: Option<String>,
    pub fields: Option<Vec<GodaddyErrorField>>,
}

/// 错误响应中单个字段的校验失败信息
#[derive(Debug, Deserialize)]
pub struct GodaddyErrorField {
    pub path: Option<String>,
    pub message: Option<String>,
}

impl GodaddyErrorResponse {
    /// 合并 message 与字段级校验错误为一条可读信息
    pub(crate) fn detail(&self) -> String {
        let mut detail = self.message.clone().unwrap_or_default();
        if let Some(fields) = &self.fields {
            for field in fields {
                if let (Some(path), Some(message)) = (&field.path, &field.message) {
                    if !detail.is_empty() {
                        detail.push_str("; ");
                    }
                    detail.push_str(&format!("{path}: {message}"));
                }
            }
        }
        detail
    }
}
