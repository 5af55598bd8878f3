//! The `init-db` command: connect with `DATABASE_URL` and create the schema.
//! Unlike the server, a missing or unreachable database here is an error.

pub(crate) async fn run() -> anyhow::Result<()> {
    let pool = trendboard_db::connect_pool_from_env().await?;
    trendboard_db::ensure_schema(&pool).await?;
    println!("database schema is ready");
    Ok(())
}
