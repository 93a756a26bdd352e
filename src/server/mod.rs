//! HTTP服务 - 对外暴露调研API
//!
//! 请求之间没有任何可变共享状态：AppState只持有不可变配置与编排器，
//! 每个入站请求对应恰好一次出站LLM调用。

pub mod error;
pub mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};

use crate::config::Config;
use crate::research::orchestrator::ResearchOrchestrator;

/// 服务共享状态
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ResearchOrchestrator>,
}

impl AppState {
    /// 根据配置构建服务状态
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            orchestrator: Arc::new(ResearchOrchestrator::new(config)?),
        })
    }
}

/// 构建路由
///
/// - POST /api/research - 公司调研
/// - GET /health - 健康检查
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/research", post(handlers::research))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

/// 启动HTTP服务
pub async fn launch(config: &Config) -> Result<()> {
    let state = AppState::new(config)?;
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    println!("🚀 Prospector服务已启动，监听 http://{}", addr);
    if config.llm.api_key.trim().is_empty() {
        eprintln!("⚠️ 警告: 未配置LLM API KEY，调研请求将返回配置错误");
    }

    axum::serve(listener, app)
        .await
        .context("HTTP server exited unexpectedly")?;

    Ok(())
}
