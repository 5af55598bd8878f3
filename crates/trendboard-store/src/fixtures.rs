//! Static fixture collections used when no persisted data exists yet, so the
//! dashboard is never empty on first run. Pure data, no behavior.

use chrono::{Duration, Utc};
use trendboard_core::{Report, SourceType, Trend};

#[must_use]
pub fn fixture_trends() -> Vec<Trend> {
    let now = Utc::now();
    vec![
        Trend {
            id: "1".to_string(),
            topic_name: "Quantum Entanglement Communication".to_string(),
            source_url:
                "https://trends.google.com/trends/explore?q=Quantum+Entanglement+Communication"
                    .to_string(),
            popularity_metric: "+350%".to_string(),
            category: "Technology".to_string(),
            date_collected: now - Duration::days(2),
            source_type: SourceType::GoogleTrends,
            source_details: None,
            sentiment_score: None,
        },
        Trend {
            id: "2".to_string(),
            topic_name: "AI-Powered Personalized Education".to_string(),
            source_url: "https://explodingtopics.com/topic/ai-personalized-education".to_string(),
            popularity_metric: "+280%".to_string(),
            category: "Education".to_string(),
            date_collected: now - Duration::days(5),
            source_type: SourceType::ExplodingTopics,
            source_details: None,
            sentiment_score: None,
        },
        Trend {
            id: "3".to_string(),
            topic_name: "Sustainable Urban Farming".to_string(),
            source_url: "https://www.reddit.com/r/UrbanGardening/top".to_string(),
            popularity_metric: "Top Subreddit".to_string(),
            category: "Environment".to_string(),
            date_collected: now - Duration::days(1),
            source_type: SourceType::Reddit,
            source_details: None,
            sentiment_score: None,
        },
        Trend {
            id: "4".to_string(),
            topic_name: "Decentralized Autonomous Organizations (DAOs)".to_string(),
            source_url: "https://trends.google.com/trends/explore?q=DAO".to_string(),
            popularity_metric: "+150%".to_string(),
            category: "Finance".to_string(),
            date_collected: now - Duration::days(10),
            source_type: SourceType::GoogleTrends,
            source_details: None,
            sentiment_score: None,
        },
        Trend {
            id: "5".to_string(),
            topic_name: "Neuro-symbolic AI".to_string(),
            source_url: "https://explodingtopics.com/topic/neuro-symbolic-ai".to_string(),
            popularity_metric: "+220%".to_string(),
            category: "Technology".to_string(),
            date_collected: now - Duration::days(7),
            source_type: SourceType::ExplodingTopics,
            source_details: None,
            sentiment_score: None,
        },
    ]
}

#[must_use]
pub fn fixture_reports() -> Vec<Report> {
    let now = Utc::now();
    vec![
        Report {
            id: "report-1".to_string(),
            month: "July 2024".to_string(),
            generated_at: now - Duration::days(3),
            report_markdown: JULY_2024_REPORT.to_string(),
        },
        Report {
            id: "report-2".to_string(),
            month: "June 2024".to_string(),
            generated_at: now - Duration::days(33),
            report_markdown: JUNE_2024_REPORT.to_string(),
        },
    ]
}

const JULY_2024_REPORT: &str = "\
# 🚀 Monthly Trends Report – July 2024

## 🔥 Top 5 Trending Topics
1. **Quantum Entanglement Communication** – Rapid advancements in quantum physics are pushing this theoretical communication method closer to reality, sparking interest in its potential for unhackable networks.
2. **AI-Powered Personalized Education** – As AI models become more sophisticated, their application in tailoring learning experiences to individual student needs is gaining significant traction.
3. **Sustainable Urban Farming** – Growing concerns about food security and environmental impact are driving innovation and adoption of urban farming solutions.
4. **Neuro-symbolic AI** – This hybrid AI approach, combining neural networks with symbolic reasoning, is showing promise in overcoming limitations of current deep learning models.
5. **Metaverse Land Speculation** – Despite market fluctuations, interest in virtual real estate within metaverse platforms continues, driven by long-term potential.

## 📈 Fastest Growing Trend
- **Quantum Entanglement Communication (+350%)** – Recent breakthroughs and increased media coverage have led to a surge in public and academic interest.

## 💡 Brief Insights
- Insight 1: The tech sector continues to dominate emerging trends, particularly in AI and quantum computing.
- Insight 2: Sustainability and personalized experiences are cross-cutting themes appearing in multiple trending topics.
";

const JUNE_2024_REPORT: &str = "\
# 🚀 Monthly Trends Report – June 2024

## 🔥 Top 5 Trending Topics
1. **Generative AI Art Tools** – Increased accessibility and capabilities of tools like Midjourney and DALL-E are fueling creative explosions.
2. **Remote Work Optimization Software** – Companies continue to invest in tools that enhance productivity and collaboration for distributed teams.
3. **Circular Economy Models** – Businesses are increasingly exploring models that minimize waste and maximize resource utilization.
4. **Mental Wellness Apps for Gen Z** – A growing focus on mental health, particularly among younger generations, is driving demand for supportive digital tools.
5. **Ethical AI Frameworks** – As AI becomes more pervasive, discussions and development around ethical guidelines are intensifying.

## 📈 Fastest Growing Trend
- **Generative AI Art Tools (+450%)** – Viral content and ease of use have made these tools extremely popular across various demographics.

## 💡 Brief Insights
- Insight 1: AI's influence is expanding beyond technical fields into creative and societal domains.
- Insight 2: There's a strong societal push towards more sustainable and ethical practices, reflected in trending business models and technologies.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_trend_ids_are_unique() {
        let trends = fixture_trends();
        let mut ids: Vec<&str> = trends.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), trends.len());
    }

    #[test]
    fn fixtures_are_nonempty() {
        assert_eq!(fixture_trends().len(), 5);
        assert_eq!(fixture_reports().len(), 2);
    }

    #[test]
    fn fixture_reports_have_one_month_each() {
        let reports = fixture_reports();
        assert_eq!(reports[0].month, "July 2024");
        assert_eq!(reports[1].month, "June 2024");
    }
}
