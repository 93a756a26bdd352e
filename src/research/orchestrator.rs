//! 调研编排器 - 合成提示词、调用模型、提取结构化结果
//!
//! 每次调研都是一条顺序流水线，唯一的挂起点是那一次出站LLM调用。
//! 编排器本身不持有任何跨请求的可变状态。

use anyhow::Result;
use chrono::{Local, Utc};

use crate::config::Config;
use crate::llm::LLMClient;
use crate::research::composer::{self, RESEARCH_SYSTEM_PROMPT};
use crate::research::extractor::ResponseExtractor;
use crate::server::error::ResearchError;
use crate::types::research::{ResearchResult, SearchQuery};

/// 调研编排器
pub struct ResearchOrchestrator {
    llm: LLMClient,
    extractor: ResponseExtractor,
    verbose: bool,
}

impl ResearchOrchestrator {
    /// 根据配置创建编排器
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            llm: LLMClient::new(config.llm.clone())?,
            extractor: ResponseExtractor::new(config.template.clone()),
            verbose: config.verbose,
        })
    }

    /// 是否配置了上游凭证
    pub fn has_api_key(&self) -> bool {
        self.llm.has_api_key()
    }

    /// 执行一次完整调研流程
    pub async fn execute_research(
        &self,
        query: &SearchQuery,
    ) -> Result<ResearchResult, ResearchError> {
        let prompt = composer::compose_research_query(query);
        if self.verbose {
            println!("🔍 开始调研 {} ...", query.company_name);
        }

        let content = self
            .llm
            .chat_completion(RESEARCH_SYSTEM_PROMPT, &prompt)
            .await?;

        if content.trim().is_empty() {
            return Err(ResearchError::EmptyCompletion);
        }

        if self.verbose {
            println!("✓ 模型返回 {} 字符，开始提取结构化结果", content.len());
        }

        Ok(self.assemble_result(query, &content))
    }

    /// 将原始回答整理为结构化调研结果
    fn assemble_result(&self, query: &SearchQuery, content: &str) -> ResearchResult {
        ResearchResult {
            company_name: query.company_name.clone(),
            company_info: self
                .extractor
                .extract_company_info(content, &query.company_name),
            key_people: self.extractor.extract_key_people(content),
            summary_data: self.extractor.extract_summary(content),
            sources: vec![
                format!("{} Knowledge Base", self.llm.model()),
                format!("Research Date: {}", Local::now().format("%-m/%-d/%Y")),
            ],
            last_updated: Utc::now().to_rfc3339(),
        }
    }
}
