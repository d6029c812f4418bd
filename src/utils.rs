//! Helper functions used at startup

use crate::config;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::str::FromStr;

pub async fn setup_sqlite_db_pool() -> anyhow::Result<SqlitePool> {
    Ok(SqlitePool::connect_with(
        SqliteConnectOptions::from_str(&config::APP_CONFIG.db_host)?
            .create_if_missing(true)
            .pragma("foreign_keys", "ON"),
    )
    .await?)
}
