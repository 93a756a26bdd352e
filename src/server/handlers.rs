//! HTTP请求处理器

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use serde::Serialize;

use super::AppState;
use super::error::ResearchError;
use crate::types::research::{ResearchResult, SearchQuery};

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// 健康检查端点
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// 公司调研端点
///
/// 校验顺序与失败语义：请求体不合法 → 400；公司名称为空 → 400（不发起
/// 上游调用）；未配置上游凭证 → 500；上游失败或空内容 → 500。
pub async fn research(
    State(state): State<AppState>,
    body: Result<Json<SearchQuery>, JsonRejection>,
) -> Result<Json<ResearchResult>, ResearchError> {
    let Json(query) = body.map_err(|_| {
        ResearchError::InvalidRequest("Invalid JSON in request body".to_string())
    })?;

    if query.company_name.trim().is_empty() {
        return Err(ResearchError::InvalidRequest(
            "Company name is required and must be a non-empty string".to_string(),
        ));
    }

    if !state.orchestrator.has_api_key() {
        return Err(ResearchError::MissingApiKey);
    }

    let result = state.orchestrator.execute_research(&query).await?;
    Ok(Json(result))
}
