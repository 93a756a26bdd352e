#[cfg(test)]
mod tests {
    use crate::config::Config;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(!config.verbose);

        // api_key may be empty if env var is not set
        assert_eq!(config.llm.api_base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm.model, "gpt-4-turbo");
        assert_eq!(config.llm.max_tokens, 4000);
        assert_eq!(config.llm.temperature, 0.3);
        assert_eq!(config.llm.retry_attempts, 1);
        assert_eq!(config.llm.retry_delay_ms, 2000);
        assert_eq!(config.llm.timeout_seconds, 120);
    }

    #[test]
    fn test_default_config_carries_builtin_template() {
        let config = Config::default();

        assert_eq!(config.template.summary_fields.len(), 19);
        assert_eq!(config.template.executive_titles.len(), 6);
        assert!(!config.template.company_fields.is_empty());
    }

    #[test]
    fn test_from_file_with_partial_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("prospector.toml");

        let content = r#"
verbose = true

[server]
host = "0.0.0.0"
port = 9090

[llm]
api_key = "test-key"
model = "gpt-4o"
"#;
        fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert!(config.verbose);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.llm.api_key, "test-key");
        assert_eq!(config.llm.model, "gpt-4o");
        // 未覆盖的字段保持默认值
        assert_eq!(config.llm.max_tokens, 4000);
        assert_eq!(config.llm.temperature, 0.3);
        assert_eq!(config.template.summary_fields.len(), 19);
    }

    #[test]
    fn test_from_file_with_template_override() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("prospector.toml");

        let content = r#"
[template]
company_fields = []
summary_fields = [{ field = "overallSystem", keywords = ["overall", "system"] }]
executive_titles = [{ title = "CEO", aliases = ["Chief Executive Officer", "CEO"] }]
"#;
        fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert!(config.template.company_fields.is_empty());
        assert_eq!(config.template.summary_fields.len(), 1);
        assert_eq!(config.template.executive_titles.len(), 1);
        assert_eq!(config.template.executive_titles[0].title, "CEO");
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = Config::from_file(&PathBuf::from("/nonexistent/prospector.toml"));

        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("prospector.toml");
        fs::write(&config_path, "this is [not valid toml").unwrap();

        let result = Config::from_file(&config_path);

        assert!(result.is_err());
    }
}
