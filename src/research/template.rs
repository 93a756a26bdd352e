//! 调研模板 - 字段标识到关键词列表的显式映射
//!
//! 提取规则全部收敛到这张数据表：公司信息字段、18项摘要字段与高管头衔集
//! 都是可配置的数据，由同一套提取例程统一驱动，而不是散落在各处的硬编码调用。

use serde::{Deserialize, Serialize};

/// 单个提取字段的规则
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FieldRule {
    /// 字段标识
    pub field: String,
    /// 有序关键词列表，匹配时双方均转小写
    pub keywords: Vec<String>,
}

/// 高管头衔规则
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TitleRule {
    /// 头衔标签，同时作为persona与title
    pub title: String,
    /// 该头衔在文本中可能出现的写法（全称、缩写）
    pub aliases: Vec<String>,
}

/// 调研模板
///
/// Default实现内置了医疗行业版本的规则表；部署方可以在配置文件中整体覆盖。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ResearchTemplate {
    /// 公司信息字段规则
    pub company_fields: Vec<FieldRule>,
    /// 摘要字段规则（固定19项）
    pub summary_fields: Vec<FieldRule>,
    /// 高管头衔规则
    pub executive_titles: Vec<TitleRule>,
}

fn rule(field: &str, keywords: &[&str]) -> FieldRule {
    FieldRule {
        field: field.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn title(label: &str, aliases: &[&str]) -> TitleRule {
    TitleRule {
        title: label.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

impl Default for ResearchTemplate {
    fn default() -> Self {
        Self {
            company_fields: vec![
                rule("description", &["description", "overview", "about"]),
                rule("company_type", &["type", "organization", "healthcare"]),
                rule("headcount_range", &["employees", "headcount", "staff"]),
                rule("estimated_revenue_range", &["revenue", "financial", "billion", "million"]),
                rule("hq_country", &["headquarters", "location", "based"]),
                rule("number_of_hospital_locations", &["hospital", "locations", "facilities"]),
                rule("hospital_beds", &["beds", "capacity", "inpatient"]),
                rule("pacs_vendor", &["PACS", "vendor", "imaging system"]),
                rule("radiology_reporting_vendor", &["radiology", "reporting", "speech recognition"]),
                rule("most_recent_annual_report.revenue", &["annual report", "fiscal year revenue", "reported revenue"]),
                rule("most_recent_annual_report.earnings", &["earnings", "net income", "operating margin"]),
                rule("most_recent_annual_report.penalties", &["penalty", "penalties", "settlement"]),
                rule("most_recent_annual_report.challenges", &["challenge", "headwind", "shortage"]),
                rule("most_recent_annual_report.strategic_priorities", &["strategic priorities", "priorities", "roadmap"]),
                rule("new_technology_implemented.radiology", &["radiology technology", "imaging technology", "radiology system"]),
                rule("new_technology_implemented.ambient_clinical_documentation", &["ambient", "clinical documentation", "dictation"]),
                rule("new_technology_implemented.artificial_intelligence", &["artificial intelligence", "AI implementation", "machine learning"]),
                rule("new_hiring_announcements.digital_leadership", &["digital leadership", "chief digital", "digital officer"]),
                rule("new_hiring_announcements.clinical_leadership", &["clinical leadership", "chief medical", "medical director"]),
                rule("new_hiring_announcements.c_suite_administrative", &["c-suite", "executive appointment", "administrative leadership"]),
                rule("facility_expansions.emergency_department", &["emergency department", "emergency room", "trauma center"]),
                rule("facility_expansions.radiology", &["radiology expansion", "imaging center", "radiology department"]),
                rule("facility_expansions.inpatient", &["inpatient expansion", "bed tower", "patient tower"]),
                rule("press_releases.radiology", &["press release", "announced", "partnership"]),
            ],
            summary_fields: vec![
                rule("overallSystem", &["overall", "system", "organization"]),
                rule("financials", &["financial", "revenue", "earnings"]),
                rule("complianceReputationRisk", &["compliance", "reputation", "regulatory"]),
                rule("strategicDirection", &["strategic", "direction", "future"]),
                rule("radiologyImagingExpansion", &["radiology", "expansion", "imaging"]),
                rule("currentReportingStack", &["reporting", "stack", "documentation"]),
                rule("pacsImagingStack", &["PACS", "imaging", "picture archiving"]),
                rule("ambientClinicalDocumentation", &["ambient", "documentation", "voice"]),
                rule("aiDigitalPosture", &["AI", "digital", "artificial intelligence"]),
                rule("aiGovernanceData", &["AI governance", "data management", "governance"]),
                rule("radiologyWorkforce", &["radiology", "workforce", "radiologist"]),
                rule("edAcuteCareExpansion", &["emergency", "acute care", "ED"]),
                rule("inpatientWomensNeonatalGrowth", &["inpatient", "womens", "neonatal"]),
                rule("pediatricsChildrensHospital", &["pediatrics", "children", "pediatric"]),
                rule("internalInnovationRadiology", &["innovation", "radiology", "new technology"]),
                rule("negativeOutcomesMalpractice", &["negative", "outcomes", "malpractice"]),
                rule("reputationRankings", &["ranking", "reputation", "national"]),
                rule("leadershipChanges", &["leadership", "changes", "appointed"]),
                rule("aiProstateOncologyFocus", &["AI", "prostate", "oncology"]),
            ],
            executive_titles: vec![
                title("CEO", &["Chief Executive Officer", "CEO"]),
                title("CFO", &["Chief Financial Officer", "CFO"]),
                title("CIO", &["Chief Information Officer", "CIO"]),
                title("Chief Medical Officer", &["Chief Medical Officer"]),
                title("Chief Digital Officer", &["Chief Digital Officer"]),
                title("Chief AI Officer", &["Chief AI Officer"]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_shape() {
        let template = ResearchTemplate::default();

        assert_eq!(template.summary_fields.len(), 19);
        assert_eq!(template.executive_titles.len(), 6);
        assert!(!template.company_fields.is_empty());
    }

    #[test]
    fn test_default_template_field_ids_are_unique() {
        let template = ResearchTemplate::default();

        let mut ids: Vec<&str> = template
            .company_fields
            .iter()
            .chain(template.summary_fields.iter())
            .map(|r| r.field.as_str())
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_template_deserializes_from_toml() {
        let toml = r#"
company_fields = []
summary_fields = [{ field = "overallSystem", keywords = ["overall"] }]
executive_titles = [{ title = "CEO", aliases = ["Chief Executive Officer", "CEO"] }]
"#;
        let template: ResearchTemplate = toml::from_str(toml).unwrap();

        assert!(template.company_fields.is_empty());
        assert_eq!(template.summary_fields.len(), 1);
        assert_eq!(template.executive_titles[0].title, "CEO");
    }
}
