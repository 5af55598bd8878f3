//! Live integration tests for trendboard-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh Postgres database spun up by the sqlx test harness
//! and creates the schema through `ensure_schema`. All tests are `#[ignore]`d
//! so the default suite passes without a database; run them with
//! `cargo test -p trendboard-db -- --ignored` and a reachable `DATABASE_URL`.

use chrono::{TimeZone, Utc};
use trendboard_core::{Report, SourceType, Trend};
use trendboard_db::{
    ensure_schema, get_report_by_id, insert_report, list_trends, replace_trends,
};

fn make_trend(id: &str, topic: &str) -> Trend {
    Trend {
        id: id.to_string(),
        topic_name: topic.to_string(),
        source_url: format!("https://trends.google.com/trends/explore?q={id}"),
        popularity_metric: "+150%".to_string(),
        category: "Technology".to_string(),
        date_collected: Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
        source_type: SourceType::GoogleTrends,
        source_details: None,
        sentiment_score: None,
    }
}

#[sqlx::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn ensure_schema_is_idempotent(pool: sqlx::PgPool) {
    ensure_schema(&pool).await.expect("first ensure_schema");
    ensure_schema(&pool).await.expect("second ensure_schema");
}

#[sqlx::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn fresh_database_rejects_writes_until_schema_setup(pool: sqlx::PgPool) {
    let trends = vec![make_trend("google-dao", "DAOs")];

    // Without the schema the relational tier cannot accept writes; every
    // entry point that connects a pool must run ensure_schema first.
    let err = replace_trends(&pool, &trends).await.unwrap_err();
    assert!(err.to_string().contains("trends"), "unexpected error: {err}");

    ensure_schema(&pool).await.expect("schema");
    replace_trends(&pool, &trends)
        .await
        .expect("replace after schema setup");
    let listed = list_trends(&pool).await.expect("list");
    assert_eq!(listed.len(), 1);
}

#[sqlx::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn replace_then_list_round_trips(pool: sqlx::PgPool) {
    ensure_schema(&pool).await.expect("schema");

    let mut details = serde_json::Map::new();
    details.insert("subreddit".to_string(), serde_json::json!("technology"));
    details.insert("upvotes".to_string(), serde_json::json!(1234));

    let mut trend = make_trend("reddit-abc", "AI Demand Letters");
    trend.source_type = SourceType::Reddit;
    trend.source_details = Some(details);
    trend.sentiment_score = Some("Positive".to_string());

    let saved = vec![trend, make_trend("google-dao", "DAOs")];
    replace_trends(&pool, &saved).await.expect("replace");

    let mut listed = list_trends(&pool).await.expect("list");
    listed.sort_by(|a, b| a.id.cmp(&b.id));
    let mut expected = saved.clone();
    expected.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(listed, expected);
}

#[sqlx::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn second_replace_wins_completely(pool: sqlx::PgPool) {
    ensure_schema(&pool).await.expect("schema");

    replace_trends(&pool, &[make_trend("a", "First"), make_trend("b", "Second")])
        .await
        .expect("first replace");
    replace_trends(&pool, &[make_trend("c", "Third")])
        .await
        .expect("second replace");

    let listed = list_trends(&pool).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "c");
}

#[sqlx::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn concurrent_replaces_never_leave_table_empty(pool: sqlx::PgPool) {
    ensure_schema(&pool).await.expect("schema");

    let first = vec![make_trend("x1", "Writer One"), make_trend("x2", "Writer One B")];
    let second = vec![make_trend("y1", "Writer Two")];

    let (r1, r2) = tokio::join!(
        replace_trends(&pool, &first),
        replace_trends(&pool, &second)
    );
    r1.expect("first writer");
    r2.expect("second writer");

    // Last commit wins, but the transactional replace guarantees the table
    // holds exactly one writer's full collection — never nothing.
    let listed = list_trends(&pool).await.expect("list");
    assert!(
        listed.len() == first.len() || listed.len() == second.len(),
        "table holds neither writer's collection: {listed:?}"
    );
    assert!(!listed.is_empty());
}

#[sqlx::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn insert_report_generates_id_when_empty(pool: sqlx::PgPool) {
    ensure_schema(&pool).await.expect("schema");

    let report = Report {
        id: String::new(),
        month: "July 2025".to_string(),
        generated_at: Utc::now(),
        report_markdown: "# Report".to_string(),
    };

    let id = insert_report(&pool, &report).await.expect("insert");
    assert!(!id.is_empty());

    let fetched = get_report_by_id(&pool, &id)
        .await
        .expect("get")
        .expect("present");
    assert_eq!(fetched.month, "July 2025");
}

#[sqlx::test]
#[ignore = "requires a live Postgres (DATABASE_URL)"]
async fn get_report_by_unknown_id_is_none(pool: sqlx::PgPool) {
    ensure_schema(&pool).await.expect("schema");

    let fetched = get_report_by_id(&pool, "no-such-report")
        .await
        .expect("query");
    assert!(fetched.is_none());
}
