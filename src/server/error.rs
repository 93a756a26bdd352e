//! 请求处理错误 - 错误分类与HTTP状态码映射
//!
//! 所有失败都以单个 {"error": "..."} JSON对象的形式返回给调用方，
//! 绝不返回部分结果。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::llm::LLMError;

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 调研请求处理过程中的错误分类
#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    /// 客户端输入错误：请求体不合法或公司名称缺失/为空
    #[error("{0}")]
    InvalidRequest(String),

    /// 配置错误：缺少上游API凭证
    #[error("API configuration error. Please ensure the LLM API key is configured.")]
    MissingApiKey,

    /// 上游调用失败，包含透传的上游错误描述
    #[error("{0}")]
    Upstream(String),

    /// 上游返回了空内容
    #[error("No research data returned from the LLM")]
    EmptyCompletion,

    /// 兜底的内部错误
    #[error("Research failed: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LLMError> for ResearchError {
    fn from(err: LLMError) -> Self {
        ResearchError::Upstream(err.to_string())
    }
}

impl ResearchError {
    /// 对应的HTTP状态码
    fn status_code(&self) -> StatusCode {
        match self {
            ResearchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ResearchError::MissingApiKey
            | ResearchError::Upstream(_)
            | ResearchError::EmptyCompletion
            | ResearchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ResearchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LLMError;

    #[test]
    fn test_invalid_request_maps_to_400() {
        let err = ResearchError::InvalidRequest("Company name is required".to_string());

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_side_errors_map_to_500() {
        assert_eq!(
            ResearchError::MissingApiKey.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ResearchError::EmptyCompletion.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ResearchError::Upstream("LLM API error: rate limited".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_error_keeps_llm_message() {
        let llm_err = LLMError::Api {
            status: 429,
            message: "rate limited".to_string(),
        };

        let err: ResearchError = llm_err.into();
        assert!(err.to_string().contains("rate limited"));
    }
}
