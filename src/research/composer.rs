//! 查询合成器 - 将公司名称与主题过滤开关合成为一条自然语言调研提示词
//!
//! 纯函数：相同输入恒产生相同输出，没有任何副作用。公司名称只会出现在
//! 自然语言提示词里，不进入代码或标记语言上下文，因此按原样插值。

use crate::types::research::SearchQuery;

/// 系统提示词 - 将助手定位为医疗机构与企业领域的调研专家
pub const RESEARCH_SYSTEM_PROMPT: &str = "You are a comprehensive business research assistant \
specializing in healthcare organizations and enterprise companies. Provide detailed, factual \
information based on your knowledge cutoff.";

// 各主题过滤开关对应的固定句子，拼接顺序固定：财务、高管、技术、新闻
const FINANCIALS_SENTENCE: &str = "Include: revenue, earnings, financial performance, budget \
cycles, estimated revenue range, headcount growth, fiscal year end. ";

const LEADERSHIP_SENTENCE: &str = "Include: CEO, CFO, CIO, Chief Medical Officer, Chief Digital \
Officer, Chief AI Officer, Chief Operating Officer, Chief Strategy Officer, and other C-suite \
executives with their names and titles. ";

const TECHNOLOGY_SENTENCE: &str = "Include: technology implementations in the past 12 months, AI \
and digital initiatives, PACS vendors, clinical documentation systems, radiology technology, \
ambient documentation tools, EHR systems. ";

const NEWS_SENTENCE: &str = "Include: recent press releases (past 6-12 months), news coverage, \
facility expansions, new hiring announcements, strategic partnerships, clinical trials, research \
publications, rankings. ";

const CLOSING_INSTRUCTION: &str = "Provide specific, factual information with dates and details \
where available. Format the response with clear sections and bullet points for easy parsing.";

/// 合成调研提示词
///
/// 固定开场白点名公司，之后按固定顺序为每个启用的过滤开关追加一句主题句，
/// 最后追加固定的收尾指令。
pub fn compose_research_query(query: &SearchQuery) -> String {
    let mut prompt = format!(
        "You are a comprehensive business research assistant. Provide detailed research on {}. ",
        query.company_name
    );

    if query.include_financials {
        prompt.push_str(FINANCIALS_SENTENCE);
    }
    if query.include_leadership {
        prompt.push_str(LEADERSHIP_SENTENCE);
    }
    if query.include_technology {
        prompt.push_str(TECHNOLOGY_SENTENCE);
    }
    if query.include_news {
        prompt.push_str(NEWS_SENTENCE);
    }

    prompt.push_str(CLOSING_INSTRUCTION);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::research::SearchQuery;

    fn query(financials: bool, leadership: bool, technology: bool, news: bool) -> SearchQuery {
        SearchQuery {
            company_name: "Acme Health".to_string(),
            include_financials: financials,
            include_leadership: leadership,
            include_technology: technology,
            include_news: news,
        }
    }

    #[test]
    fn test_always_includes_preamble_and_closing() {
        // 遍历全部16种过滤开关组合
        for mask in 0..16u8 {
            let q = query(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0);
            let prompt = compose_research_query(&q);

            assert!(prompt.starts_with(
                "You are a comprehensive business research assistant. Provide detailed research on Acme Health. "
            ));
            assert!(prompt.ends_with(CLOSING_INSTRUCTION));
        }
    }

    #[test]
    fn test_topic_sentences_follow_enabled_filters_exactly() {
        for mask in 0..16u8 {
            let q = query(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0);
            let prompt = compose_research_query(&q);

            assert_eq!(prompt.contains(FINANCIALS_SENTENCE), q.include_financials);
            assert_eq!(prompt.contains(LEADERSHIP_SENTENCE), q.include_leadership);
            assert_eq!(prompt.contains(TECHNOLOGY_SENTENCE), q.include_technology);
            assert_eq!(prompt.contains(NEWS_SENTENCE), q.include_news);
        }
    }

    #[test]
    fn test_topic_sentences_keep_fixed_order() {
        let prompt = compose_research_query(&query(true, true, true, true));

        let financials = prompt.find(FINANCIALS_SENTENCE).unwrap();
        let leadership = prompt.find(LEADERSHIP_SENTENCE).unwrap();
        let technology = prompt.find(TECHNOLOGY_SENTENCE).unwrap();
        let news = prompt.find(NEWS_SENTENCE).unwrap();

        assert!(financials < leadership);
        assert!(leadership < technology);
        assert!(technology < news);
    }

    #[test]
    fn test_composer_is_pure() {
        let q = query(true, false, true, false);

        assert_eq!(compose_research_query(&q), compose_research_query(&q));
    }

    #[test]
    fn test_company_name_is_interpolated_verbatim() {
        let q = SearchQuery {
            company_name: "St. Mary's Health (Midwest)".to_string(),
            include_financials: false,
            include_leadership: false,
            include_technology: false,
            include_news: false,
        };

        let prompt = compose_research_query(&q);
        assert!(prompt.contains("research on St. Mary's Health (Midwest). "));
    }
}
