//! 通用 HTTP 客户端工具
//!
//! Provider 自己构造 `RequestBuilder`（URL、headers、body），
//! 这里统一发送、记录日志、读取响应。每一次交互都得到可观测的
//! (状态码, 响应体) 结果，没有"尽力而为"的隐式路径：
//! 状态码如何处理由 provider 在拿到结果之后显式决定。

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// HTTP 工具函数集
pub struct HttpUtils;

impl HttpUtils {
    /// 执行 HTTP 请求，返回 (状态码, 响应文本)
    ///
    /// 传输层失败（连接、超时、读 body）映射为
    /// [`ProviderError::NetworkError`]。
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("读取响应失败: {e}"),
            })?;

        log::debug!("[{provider_name}] Response Body: {response_text}");

        Ok((status_code, response_text))
    }

    /// 解析 JSON 响应体
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON 解析失败: {e}");
            log::error!("[{provider_name}] 原始响应: {response_text}");
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
