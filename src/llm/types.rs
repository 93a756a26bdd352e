//! Chat Completion接口的请求与响应类型

use serde::{Deserialize, Serialize};

/// 对话消息
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    /// 角色（system / user / assistant）
    pub role: String,
    /// 消息内容
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat Completion请求体
#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    /// 模型标识
    pub model: String,
    /// 消息列表（system + user两条）
    pub messages: Vec<ChatMessage>,
    /// 响应长度上限
    pub max_tokens: u32,
    /// 采样温度
    pub temperature: f64,
}

/// Chat Completion响应体
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatCompletionResponse {
    /// 取第一条回复的文本内容，缺失时返回空字符串
    pub fn first_content(&self) -> String {
        self.choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }
}

/// 上游错误响应体，形如 {"error": {"message": "..."}}
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
}
