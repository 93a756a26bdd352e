use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 调研请求 - 公司名称加四个相互独立的主题过滤开关
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// 公司名称
    pub company_name: String,
    /// 是否调研财务信息
    #[serde(default)]
    pub include_financials: bool,
    /// 是否调研高管团队
    #[serde(default)]
    pub include_leadership: bool,
    /// 是否调研技术与AI系统
    #[serde(default)]
    pub include_technology: bool,
    /// 是否调研新闻动态
    #[serde(default)]
    pub include_news: bool,
}

/// 公司基础信息 - 所有字段尽力提取，空字符串表示"未找到"
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    /// 公司名称（来自请求，不做提取）
    pub business_name: String,
    /// 公司简介
    pub description: String,
    /// 官网地址
    pub website: String,
    /// 机构类型
    pub company_type: String,
    /// 成立年份
    pub year_founded: String,
    /// 员工规模
    pub headcount_range: String,
    /// 预估营收区间
    pub estimated_revenue_range: String,
    /// 总部所在地
    pub hq_country: String,
    /// 医院/院区数量
    pub number_of_hospital_locations: String,
    /// 床位数
    pub hospital_beds: String,
    /// PACS供应商
    pub pacs_vendor: String,
    /// 放射报告系统供应商
    pub radiology_reporting_vendor: String,
    /// 最近一期年报要点
    #[serde(default)]
    pub most_recent_annual_report: AnnualReportFacts,
    /// 近期技术落地情况
    #[serde(default)]
    pub new_technology_implemented: TechnologyAdoption,
    /// 近期招聘/任命公告
    #[serde(default)]
    pub new_hiring_announcements: HiringAnnouncements,
    /// 院区扩建情况
    #[serde(default)]
    pub facility_expansions: FacilityExpansions,
    /// 新闻稿提及
    #[serde(default)]
    pub press_releases: PressMentions,
}

/// 年报要点
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnualReportFacts {
    pub revenue: String,
    pub earnings: String,
    pub penalties: String,
    pub challenges: String,
    pub strategic_priorities: String,
}

/// 技术落地情况
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyAdoption {
    pub radiology: String,
    pub ambient_clinical_documentation: String,
    pub artificial_intelligence: String,
}

/// 招聘/任命公告
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HiringAnnouncements {
    pub digital_leadership: String,
    pub clinical_leadership: String,
    pub c_suite_administrative: String,
}

/// 院区扩建情况
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacilityExpansions {
    pub emergency_department: String,
    pub radiology: String,
    pub inpatient: String,
}

/// 新闻稿提及
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PressMentions {
    pub radiology: String,
}

/// 识别到的高管条目
///
/// persona与title取值相同，均为命中的头衔类别；department恒为"Executive"。
/// 联系方式字段由提取器之外的流程填充，提取阶段始终为空。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    /// 角色标签，等于命中的头衔类别
    pub persona: String,
    /// 提取到的姓名
    pub name: String,
    /// 头衔
    pub title: String,
    /// 部门标签
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// 固定18项的叙述式摘要，键为调研模板中定义的字段标识
pub type SummaryData = BTreeMap<String, String>;

/// 一次调研的聚合结果
///
/// 每个HTTP请求构造一份全新的结果，响应返回后即丢弃，服务端不做任何缓存。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResult {
    /// 公司名称
    pub company_name: String,
    /// 公司基础信息（任意子集可能为空）
    pub company_info: CompanyInfo,
    /// 识别到的高管列表
    pub key_people: Vec<PersonInfo>,
    /// 叙述式摘要
    pub summary_data: SummaryData,
    /// 来源说明（静态标签加日期戳）
    pub sources: Vec<String>,
    /// 结果产出时间（RFC 3339）
    pub last_updated: String,
}
