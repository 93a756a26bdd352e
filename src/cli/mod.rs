use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Prospector - 由Rust与AI驱动的公司调研服务
#[derive(Parser, Debug)]
#[command(name = "Prospector (prospector-rs)")]
#[command(
    about = "AI-based company research service. It composes research prompts from a company name and topic filters, queries large language models for business intelligence, and serves structured research reports over HTTP."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 监听地址
    #[arg(long)]
    pub host: Option<String>,

    /// 监听端口
    #[arg(short, long)]
    pub port: Option<u16>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 模型标识
    #[arg(long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 上游调用超时时间（秒）
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// 5xx重试次数
    #[arg(long)]
    pub retry_attempts: Option<u32>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    ///
    /// 优先级：CLI参数 > 配置文件 > 默认值。未显式指定配置文件时，
    /// 尝试从当前目录的prospector.toml加载。
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            Config::from_file(config_path).unwrap_or_else(|err| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}: {}", config_path, err)
            })
        } else {
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("prospector.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|err| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}: {}",
                        default_config_path, err
                    )
                })
            } else {
                Config::default()
            }
        };

        // 覆盖服务配置
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        // 覆盖LLM配置
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            config.llm.timeout_seconds = timeout_seconds;
        }
        if let Some(retry_attempts) = self.retry_attempts {
            config.llm.retry_attempts = retry_attempts;
        }

        // 其他配置
        if self.verbose {
            config.verbose = true;
        }

        config
    }
}
