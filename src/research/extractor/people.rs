//! 高管识别 - 每个头衔类别一条专用正则，收集全文的非重叠命中

use regex::Regex;

use crate::research::template::TitleRule;
use crate::types::research::PersonInfo;

/// 识别到的高管统一挂在该部门标签下，不推断组织层级
const EXECUTIVE_DEPARTMENT: &str = "Executive";

/// 高管识别器 - 构造时按头衔规则预编译正则
pub struct ExecutiveDetector {
    patterns: Vec<(String, Regex)>,
}

impl ExecutiveDetector {
    pub fn new(titles: &[TitleRule]) -> Self {
        let patterns = titles
            .iter()
            .map(|rule| {
                let alternatives = rule
                    .aliases
                    .iter()
                    .map(|alias| regex::escape(alias))
                    .collect::<Vec<_>>()
                    .join("|");
                // 头衔部分不区分大小写；姓名部分必须逐词首字母大写且不含数字
                let pattern = format!(
                    r"(?i:{})[:\s]+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
                    alternatives
                );
                (rule.title.clone(), Regex::new(&pattern).unwrap())
            })
            .collect();

        Self { patterns }
    }

    /// 识别文本中的全部高管
    ///
    /// 同一头衔下按姓名（不区分大小写）去重；同一姓名出现在两个不同头衔下
    /// 会产生两条独立条目。
    pub fn detect(&self, content: &str) -> Vec<PersonInfo> {
        let mut people: Vec<PersonInfo> = Vec::new();

        for (title, pattern) in &self.patterns {
            for captures in pattern.captures_iter(content) {
                let Some(name_match) = captures.get(1) else {
                    continue;
                };
                let name = name_match.as_str().trim().to_string();

                let already_known = people.iter().any(|person| {
                    person.title == *title
                        && person.name.to_lowercase() == name.to_lowercase()
                });
                if already_known {
                    continue;
                }

                people.push(PersonInfo {
                    persona: title.clone(),
                    name,
                    title: title.clone(),
                    department: EXECUTIVE_DEPARTMENT.to_string(),
                    email: None,
                    linkedin_url: None,
                    notes: None,
                });
            }
        }

        people
    }
}
