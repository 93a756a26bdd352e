//! LLM客户端 - 对OpenAI兼容Chat Completion接口的单轮调用封装
//!
//! 一次chat_completion对应一次上游HTTP请求：system + user两条消息、
//! 固定模型标识、固定响应长度上限与低采样温度。仅在上游返回5xx时
//! 按配置做有限次重试，其余错误一律直接上抛。

pub mod types;

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

use crate::config::LLMConfig;
use types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// LLM调用错误
#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    /// 网络层失败（连接失败、超时等）
    #[error("LLM request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// 上游返回非成功状态码，message为上游错误响应体中的描述
    #[error("LLM API error: {message}")]
    Api { status: u16, message: String },
}

impl LLMError {
    /// 仅5xx视为可重试
    fn is_retryable(&self) -> bool {
        match self {
            LLMError::Api { status, .. } => *status >= 500,
            LLMError::Transport(_) => false,
        }
    }
}

/// LLM客户端
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    http: Client,
}

impl LLMClient {
    /// 创建新的LLM客户端，超时时间来自配置
    pub fn new(config: LLMConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { config, http })
    }

    /// 是否配置了上游凭证
    pub fn has_api_key(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }

    /// 当前配置的模型标识
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// 执行单轮对话调用
    pub async fn chat_completion(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LLMError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let mut attempt = 0;
        loop {
            match self.send_once(&request).await {
                Ok(content) => return Ok(content),
                Err(err) if attempt < self.config.retry_attempts && err.is_retryable() => {
                    attempt += 1;
                    eprintln!(
                        "❌ 调用模型服务出错，重试中 (第 {} / {} 次尝试): {}",
                        attempt, self.config.retry_attempts, err
                    );
                    tokio::time::sleep(Duration::from_millis(self.config.retry_delay_ms)).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn send_once(&self, request: &ChatCompletionRequest) -> Result<String, LLMError> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_base_url.trim_end_matches('/')
        );

        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LLMError::Api {
                status: status.as_u16(),
                message: parse_api_error(&body),
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        Ok(completion.first_content())
    }
}

/// 从上游错误响应体中提取错误描述，解析失败时回退到通用描述
fn parse_api_error(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::types::ChatCompletionResponse;
    use super::{LLMError, parse_api_error};

    #[test]
    fn test_parse_api_error_extracts_upstream_message() {
        let body = r#"{"error":{"message":"rate limited"}}"#;

        assert_eq!(parse_api_error(body), "rate limited");
    }

    #[test]
    fn test_parse_api_error_falls_back_on_unexpected_body() {
        assert_eq!(parse_api_error("<html>502</html>"), "Unknown error");
        assert_eq!(parse_api_error(r#"{"error":{}}"#), "Unknown error");
        assert_eq!(parse_api_error(""), "Unknown error");
    }

    #[test]
    fn test_api_error_display_contains_upstream_message() {
        let err = LLMError::Api {
            status: 429,
            message: "rate limited".to_string(),
        };

        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_only_server_errors_are_retryable() {
        let server_error = LLMError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        let client_error = LLMError::Api {
            status: 404,
            message: "model not found".to_string(),
        };

        assert!(server_error.is_retryable());
        assert!(!client_error.is_retryable());
    }

    #[test]
    fn test_first_content_of_empty_choices_is_empty() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();

        assert_eq!(response.first_content(), "");
    }

    #[test]
    fn test_first_content_reads_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Acme was founded in 1998."}}]}"#,
        )
        .unwrap();

        assert_eq!(response.first_content(), "Acme was founded in 1998.");
    }
}
