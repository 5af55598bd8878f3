//! Offline unit tests for trendboard-db pool configuration and row types.
//! These tests do not require a live database connection.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use trendboard_core::{AppConfig, Environment};
use trendboard_db::{reports::ReportRow, PoolConfig};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: Some("postgres://example".to_string()),
        gemini_api_key: "key".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        data_dir: PathBuf::from("./data"),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        ai_model: "gemini-1.5-flash".to_string(),
        ai_request_timeout_secs: 60,
        source_request_timeout_secs: 30,
        source_user_agent: "ua".to_string(),
        exploding_topics_api_key: None,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

/// Compile-time smoke test: confirm that [`ReportRow`] converts into the
/// domain type field-for-field. No database required.
#[test]
fn report_row_converts_to_report() {
    use chrono::Utc;

    let now = Utc::now();
    let row = ReportRow {
        id: "report-1".to_string(),
        month: "July 2024".to_string(),
        generated_at: now,
        report_markdown: "# Monthly Trends Report".to_string(),
    };

    let report: trendboard_core::Report = row.into();
    assert_eq!(report.id, "report-1");
    assert_eq!(report.month, "July 2024");
    assert_eq!(report.generated_at, now);
    assert_eq!(report.report_markdown, "# Monthly Trends Report");
}
