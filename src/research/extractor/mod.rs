//! 响应提取器 - 将LLM的自由文本回答按关键词规则整理成结构化记录
//!
//! 提取永不报错：任何规则不命中都退化为空字符串或空列表，
//! 绝不因为源文本不规整而中断整个响应。

mod people;

pub use people::ExecutiveDetector;

use std::collections::BTreeMap;

use regex::Regex;

use crate::research::template::ResearchTemplate;
use crate::types::research::{
    AnnualReportFacts, CompanyInfo, FacilityExpansions, HiringAnnouncements, PersonInfo,
    PressMentions, SummaryData, TechnologyAdoption,
};

/// 候选句子的长度下限（不含），修剪后不足该长度的句子不会被选中
const MIN_SECTION_CHARS: usize = 20;
/// 候选句子的长度上限（不含）
const MAX_SECTION_CHARS: usize = 500;

/// 通用片段提取 - 按原文顺序扫描句子，返回第一个命中任一关键词且长度合规的句子
///
/// 单遍线性扫描，先到先得，不做排序或打分，因此相同输入恒产生相同输出。
pub fn extract_section(content: &str, keywords: &[String]) -> String {
    for sentence in content.split(['.', '!', '?']) {
        let lowered = sentence.to_lowercase();
        if keywords.iter().any(|k| lowered.contains(&k.to_lowercase())) {
            let trimmed = sentence.trim();
            let chars = trimmed.chars().count();
            if chars > MIN_SECTION_CHARS && chars < MAX_SECTION_CHARS {
                return trimmed.to_string();
            }
        }
    }

    String::new()
}

/// 响应提取器 - 持有调研模板与预编译的正则
pub struct ResponseExtractor {
    template: ResearchTemplate,
    executives: ExecutiveDetector,
    url_regex: Regex,
    year_regex: Regex,
}

impl ResponseExtractor {
    pub fn new(template: ResearchTemplate) -> Self {
        Self {
            executives: ExecutiveDetector::new(&template.executive_titles),
            url_regex: Regex::new(r"https?://[^\s)]+").unwrap(),
            year_regex: Regex::new(
                r"(?i)(?:founded|established|incorporated|created)\s+(?:in\s+)?(\d{4})",
            )
            .unwrap(),
            template,
        }
    }

    /// 提取文本中出现的第一个HTTP(S)链接
    pub fn extract_url(&self, content: &str) -> String {
        self.url_regex
            .find(content)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// 提取成立年份 - 紧跟在 founded/established/incorporated/created 之后的第一个四位年份
    pub fn extract_year(&self, content: &str) -> String {
        self.year_regex
            .captures(content)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// 识别文本中的全部高管
    pub fn extract_key_people(&self, content: &str) -> Vec<PersonInfo> {
        self.executives.detect(content)
    }

    /// 按模板规则提取公司基础信息
    ///
    /// 所有关键词字段先经同一套提取例程得到字段标识到句子的映射，再装配进结构体；
    /// website与year_founded走各自的正则规则。
    pub fn extract_company_info(&self, content: &str, company_name: &str) -> CompanyInfo {
        let mut sections: BTreeMap<&str, String> = BTreeMap::new();
        for rule in &self.template.company_fields {
            sections.insert(rule.field.as_str(), extract_section(content, &rule.keywords));
        }
        let mut section = |field: &str| sections.remove(field).unwrap_or_default();

        CompanyInfo {
            business_name: company_name.to_string(),
            description: section("description"),
            website: self.extract_url(content),
            company_type: section("company_type"),
            year_founded: self.extract_year(content),
            headcount_range: section("headcount_range"),
            estimated_revenue_range: section("estimated_revenue_range"),
            hq_country: section("hq_country"),
            number_of_hospital_locations: section("number_of_hospital_locations"),
            hospital_beds: section("hospital_beds"),
            pacs_vendor: section("pacs_vendor"),
            radiology_reporting_vendor: section("radiology_reporting_vendor"),
            most_recent_annual_report: AnnualReportFacts {
                revenue: section("most_recent_annual_report.revenue"),
                earnings: section("most_recent_annual_report.earnings"),
                penalties: section("most_recent_annual_report.penalties"),
                challenges: section("most_recent_annual_report.challenges"),
                strategic_priorities: section("most_recent_annual_report.strategic_priorities"),
            },
            new_technology_implemented: TechnologyAdoption {
                radiology: section("new_technology_implemented.radiology"),
                ambient_clinical_documentation: section(
                    "new_technology_implemented.ambient_clinical_documentation",
                ),
                artificial_intelligence: section(
                    "new_technology_implemented.artificial_intelligence",
                ),
            },
            new_hiring_announcements: HiringAnnouncements {
                digital_leadership: section("new_hiring_announcements.digital_leadership"),
                clinical_leadership: section("new_hiring_announcements.clinical_leadership"),
                c_suite_administrative: section("new_hiring_announcements.c_suite_administrative"),
            },
            facility_expansions: FacilityExpansions {
                emergency_department: section("facility_expansions.emergency_department"),
                radiology: section("facility_expansions.radiology"),
                inpatient: section("facility_expansions.inpatient"),
            },
            press_releases: PressMentions {
                radiology: section("press_releases.radiology"),
            },
        }
    }

    /// 按模板规则提取叙述式摘要，模板中的每个字段都会出现在结果里（可能为空）
    pub fn extract_summary(&self, content: &str) -> SummaryData {
        self.template
            .summary_fields
            .iter()
            .map(|rule| (rule.field.clone(), extract_section(content, &rule.keywords)))
            .collect()
    }
}
