//! Prompt templates for the AI flows. Each builder returns the full prompt
//! string; output-shape handling lives in `flows`.

pub(crate) fn generate_ideas(topic_keyword: &str) -> String {
    format!(
        "You are an AI assistant specialized in identifying emerging business \
opportunities and market niches for entrepreneurs and business leaders.\n\
Given the following topic or keyword: {topic_keyword}\n\n\
Brainstorm and list 3 to 7 distinct potential new business ideas or market \
opportunities. Each idea should be concise (a short phrase or name \
representing a business concept), practical, and relevant to current market \
needs. Avoid overly technical jargon.\n\n\
Respond with ONLY a JSON array of strings, one idea per entry. Example for \
'sustainable retail':\n\
[\"Subscription box for eco-friendly home products\", \
\"Local repair and upcycling workshop for clothing\", \
\"Consulting service for small retailers transitioning to sustainable packaging\"]"
    )
}

pub(crate) fn analyze_idea(trend_name: &str) -> String {
    format!(
        "You are an AI business consultant providing a deep-dive analysis for \
a business leader exploring the potential of the following business idea:\n\
**Business Idea: \"{trend_name}\"**\n\n\
Based only on this idea name, provide a comprehensive and actionable analysis \
in Markdown, suitable for a busy business owner. Your entire response must be \
the Markdown content, using simple, jargon-free language, with these sections:\n\n\
## 💡 Business Opportunity: \"{trend_name}\"\n\
- The specific problem this idea solves, the unique value proposition, \
potential revenue streams, and market potential.\n\n\
## 🎯 Target Audience:\n\
- Primary customer segments (be specific) and the needs or pain points the \
idea addresses.\n\n\
## ✅ Key Business Benefits:\n\
- 2-3 significant benefits for a business pursuing this idea, each with a \
brief explanation of how it is achieved.\n\n\
## ⚠️ Potential Challenges & Risks:\n\
- 1-2 major challenges or risks, each with a brief mitigation strategy.\n\n\
## 🚀 Actionable First Steps (3-5 Steps):\n\
- 3 to 5 concrete, low-cost first steps to validate the idea, sequential \
where possible.\n\n\
Be speculative but grounded in logical business reasoning."
    )
}

pub(crate) fn analyze_trends(trend_data: &str) -> String {
    format!(
        "You are an AI business strategy advisor. You have recent data about \
topics trending among businesses, potentially including Google Trends, \
business news, Reddit, YouTube, and Twitter/X:\n{trend_data}\n\n\
Provide a concise, actionable analysis for busy business owners in simple, \
jargon-free language. Your entire response must be Markdown with these \
sections:\n\n\
## ✅ **Top 3 Business Trends**\n\
For each of the top 3 trends: the trend name, why it matters to a typical \
business (specific benefits), one simple actionable step, and a brief \
example.\n\n\
## 🚨 **Trending Topics from Social Platforms**\n\
If the data includes clear trends from Reddit, YouTube, or Twitter/X, \
highlight 1-2 business-relevant topics with their key sources, why they \
matter, and a quick action. Omit the section if none stand out.\n\n\
## 📌 **Quick Wins & Recommendations**\n\
2-3 immediate, low-effort recommendations a business could implement this \
month.\n\n\
## 🔗 **Additional Resources**\n\
One or two practical links or article titles for further reading."
    )
}

pub(crate) fn generate_report(month: &str, analysis_markdown: &str) -> String {
    format!(
        "You are a business intelligence report writer. Create a comprehensive \
monthly business trends report for {month}.\n\n\
Use the following analysis as the foundation for your report:\n\
{analysis_markdown}\n\n\
Structure the report in Markdown as:\n\n\
# 📊 Monthly Business Trends Report - {month}\n\n\
## Executive Summary\n\
## Top Trending Topics\n\
## Industry Insights\n\
## Actionable Recommendations\n\
## Market Outlook\n\
## Resources & Next Steps\n\n\
Make the report professional yet accessible, with specific actionable \
insights that small to medium business owners can implement. Include \
relevant emojis while maintaining professionalism."
    )
}

pub(crate) fn generate_project_outline(
    trend_name: &str,
    analysis_markdown: &str,
    edit_prompt: Option<&str>,
) -> String {
    let mut prompt = format!(
        "You are a technical project manager and business analyst. Based on \
the business idea \"{trend_name}\" and its analysis, provide:\n\n\
1. TARGET AUDIENCE identification\n\
2. A detailed PROJECT OUTLINE for building an MVP\n\n\
Analysis:\n{analysis_markdown}\n\n\
Provide your response in exactly two Markdown sections:\n\n\
## Target Audience\n\
Identify the specific industry, user types, demographics, and \
characteristics of the primary target audience for \"{trend_name}\".\n\n\
## Project Outline\n\
A comprehensive technical outline for building an MVP: project overview, \
technology stack, development phases with timelines, 5-7 key features \
prioritized as must-have vs nice-to-have, success metrics, and a deployment \
strategy. Keep it achievable for a solo developer or small team."
    );

    if let Some(edit) = edit_prompt {
        prompt.push_str(&format!(
            "\n\nUser Revision Request: {edit}\n\nPlease revise the project \
outline based on this feedback while maintaining the same structure."
        ));
    }

    prompt
}
