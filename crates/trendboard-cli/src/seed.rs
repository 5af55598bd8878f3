//! The `seed` command: persist the fixture data set so a fresh install has
//! real files (and rows, when a database is configured) to work with.

use trendboard_core::AppConfig;
use trendboard_store::fixtures;

use crate::store;

pub(crate) async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let store = store::open_data_store(config).await;

    let trends = fixtures::fixture_trends();
    let reports = fixtures::fixture_reports();
    store.save_trends_data(&trends).await;
    store.save_reports_data(&reports).await;

    println!(
        "seeded {} trends and {} reports",
        trends.len(),
        reports.len()
    );
    Ok(())
}
