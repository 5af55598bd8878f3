//! The five AI flows: one prompt, one completion, shape handling on the way
//! out. Input validation (required fields, minimum lengths) belongs to the
//! HTTP layer; flows assume their inputs are present.

use crate::client::GeminiClient;
use crate::error::AiError;
use crate::prompts;

pub const MIN_IDEAS: usize = 3;
pub const MAX_IDEAS: usize = 7;

/// Target audience plus MVP outline, split from one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOutline {
    pub target_audience: String,
    pub project_outline: String,
}

/// Brainstorm 3–7 potential business ideas for a topic keyword.
///
/// The model is asked for a bare JSON array of strings; fewer than
/// [`MIN_IDEAS`] parsed entries is an error, anything past [`MAX_IDEAS`] is
/// truncated.
///
/// # Errors
///
/// Returns [`AiError`] on upstream failure or if the completion cannot be
/// parsed into an idea list.
pub async fn generate_ideas(
    client: &GeminiClient,
    topic_keyword: &str,
) -> Result<Vec<String>, AiError> {
    let text = client
        .generate(&prompts::generate_ideas(topic_keyword))
        .await?;
    parse_idea_list(&text)
}

/// Produce a markdown deep-dive analysis of a single business idea.
///
/// # Errors
///
/// Returns [`AiError`] on upstream failure.
pub async fn analyze_idea(client: &GeminiClient, trend_name: &str) -> Result<String, AiError> {
    client.generate(&prompts::analyze_idea(trend_name)).await
}

/// Analyze a block of trend data into a markdown business briefing.
///
/// # Errors
///
/// Returns [`AiError`] on upstream failure.
pub async fn analyze_trends(client: &GeminiClient, trend_data: &str) -> Result<String, AiError> {
    client.generate(&prompts::analyze_trends(trend_data)).await
}

/// Produce a full monthly report from an existing analysis.
///
/// # Errors
///
/// Returns [`AiError`] on upstream failure.
pub async fn generate_report(
    client: &GeminiClient,
    month: &str,
    analysis_markdown: &str,
) -> Result<String, AiError> {
    client
        .generate(&prompts::generate_report(month, analysis_markdown))
        .await
}

/// Produce a target-audience statement and an MVP project outline.
///
/// The completion is split on its `## Target Audience` and
/// `## Project Outline` headings; when the model ignores the requested
/// structure, the text is split positionally instead (audience gets the
/// first 500 characters), matching the tolerant behavior of the original
/// flow.
///
/// # Errors
///
/// Returns [`AiError`] on upstream failure.
pub async fn generate_project_outline(
    client: &GeminiClient,
    trend_name: &str,
    analysis_markdown: &str,
    edit_prompt: Option<&str>,
) -> Result<ProjectOutline, AiError> {
    let text = client
        .generate(&prompts::generate_project_outline(
            trend_name,
            analysis_markdown,
            edit_prompt,
        ))
        .await?;
    Ok(split_outline_sections(&text))
}

/// Parse a completion into an idea list.
///
/// Accepts a bare JSON array of strings, or an object carrying the array
/// under `potentialTrends`, with or without a markdown code fence around the
/// JSON.
fn parse_idea_list(text: &str) -> Result<Vec<String>, AiError> {
    let stripped = strip_code_fence(text);

    let value: serde_json::Value =
        serde_json::from_str(stripped).map_err(|_| truncated_output_error(text))?;

    let array = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("potentialTrends") {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Err(truncated_output_error(text)),
        },
        _ => return Err(truncated_output_error(text)),
    };

    let ideas: Vec<String> = array
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) => {
                let trimmed = s.trim().to_string();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        })
        .take(MAX_IDEAS)
        .collect();

    if ideas.len() < MIN_IDEAS {
        return Err(AiError::UnexpectedOutput(format!(
            "expected at least {MIN_IDEAS} ideas, got {}",
            ideas.len()
        )));
    }

    Ok(ideas)
}

fn truncated_output_error(text: &str) -> AiError {
    let head: String = text.chars().take(120).collect();
    AiError::UnexpectedOutput(format!("not a JSON idea list: {head}"))
}

/// Strip a surrounding markdown code fence (```json ... ```), if present.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the optional language tag on the opening fence line.
    match rest.split_once('\n') {
        Some((_, body)) => body.trim(),
        None => rest.trim(),
    }
}

fn split_outline_sections(text: &str) -> ProjectOutline {
    let audience_heading = "## Target Audience";
    let outline_heading = "## Project Outline";

    if let (Some(a_start), Some(o_start)) = (text.find(audience_heading), text.find(outline_heading))
    {
        if a_start < o_start {
            let audience = text[a_start + audience_heading.len()..o_start].trim();
            let outline = text[o_start + outline_heading.len()..].trim();
            if !audience.is_empty() && !outline.is_empty() {
                return ProjectOutline {
                    target_audience: audience.to_string(),
                    project_outline: outline.to_string(),
                };
            }
        }
    }

    // Model ignored the structure: first 500 chars as the audience, the
    // remainder as the outline.
    let cut = text
        .char_indices()
        .nth(500)
        .map_or(text.len(), |(idx, _)| idx);
    ProjectOutline {
        target_audience: text[..cut].trim().to_string(),
        project_outline: text[cut..].trim().to_string(),
    }
}
