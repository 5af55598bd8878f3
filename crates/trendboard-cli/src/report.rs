//! The `report` command: run the analyze-trends and generate-report chain
//! over the stored trends and persist the result.

use chrono::Utc;
use trendboard_ai::{flows, GeminiClient};
use trendboard_core::{AppConfig, Report, Trend};
use trendboard_store::DataStore;

use crate::store;

pub(crate) async fn run(config: &AppConfig, month: &str) -> anyhow::Result<()> {
    let store = store::open_data_store(config).await;
    let trends = store.get_trends_data().await;
    generate_and_save(config, &store, month, &trends).await
}

/// Analyze `trends`, write a monthly report for `month`, and persist it.
/// Re-running for the same month replaces that month's report.
pub(crate) async fn generate_and_save(
    config: &AppConfig,
    store: &DataStore,
    month: &str,
    trends: &[Trend],
) -> anyhow::Result<()> {
    let ai = GeminiClient::new(
        &config.gemini_api_key,
        &config.ai_model,
        config.ai_request_timeout_secs,
    )?;

    let trend_data = serde_json::to_string_pretty(trends)?;
    let analysis = flows::analyze_trends(&ai, &trend_data).await?;
    let report_markdown = flows::generate_report(&ai, month, &analysis).await?;

    let report = Report {
        id: report_id(month),
        month: month.to_string(),
        generated_at: Utc::now(),
        report_markdown,
    };

    let mut reports = store.get_reports_data().await;
    reports.retain(|r| r.id != report.id);
    let id = report.id.clone();
    reports.push(report);
    store.save_reports_data(&reports).await;

    println!("saved report {id} for {month}");
    Ok(())
}

fn report_id(month: &str) -> String {
    let slug = month
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("report-{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_id_slugs_the_month_label() {
        assert_eq!(report_id("July 2025"), "report-july-2025");
        assert_eq!(report_id("  July   2025 "), "report-july-2025");
    }
}
