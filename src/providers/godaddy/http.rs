//! GoDaddy HTTP 请求方法

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{GodaddyErrorResponse, GodaddyProvider};

impl GodaddyProvider {
    /// 执行 GET 请求并解析 JSON 响应
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);

        let request = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("Authorization", &self.authorization);

        let (status, text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        self.check_status(status, &text, ctx)?;
        HttpUtils::parse_json(&text, self.provider_name())
    }

    /// 执行 PATCH 请求（add-or-merge 语义，不需要响应体）
    pub(crate) async fn patch<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<()> {
        self.send_json(Method::PATCH, path, body, ctx).await
    }

    /// 执行 PUT 请求（整体覆盖语义，不需要响应体）
    pub(crate) async fn put<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<()> {
        self.send_json(Method::PUT, path, body, ctx).await
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<()> {
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        let url = format!("{}{path}", self.base_url);
        let method_name = method.as_str().to_owned();

        let request = self
            .client
            .request(method, &url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Authorization", &self.authorization)
            .body(payload);

        let (status, text) =
            HttpUtils::execute_request(request, self.provider_name(), &method_name, &url).await?;

        self.check_status(status, &text, ctx)
    }

    /// 非 2xx 状态时解析错误响应体并映射为 [`ProviderError`]
    fn check_status(&self, status: u16, text: &str, ctx: ErrorContext) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        if let Ok(error) = serde_json::from_str::<GodaddyErrorResponse>(text) {
            if error.code.is_some() || error.message.is_some() {
                let detail = error.detail();
                let raw = match error.code {
                    Some(code) => RawApiError::with_code(code, detail),
                    None => RawApiError::new(detail),
                };
                return Err(self.map_error(raw, ctx));
            }
        }

        Err(self.unknown_error(RawApiError::new(format!("HTTP {status}: {text}"))))
    }
}
