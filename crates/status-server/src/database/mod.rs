//! Per-request MySQL connectivity probe.
//!
//! The page exists to prove the database tier is reachable, so every request
//! opens its own connection, runs one trivial query, and closes it again.
//! Failures are folded into [`ConnectivityReport`] instead of propagating;
//! the page always renders.

use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, MySqlConnection};
use tracing::warn;

use crate::config::DatabaseConfig;

const DIAGNOSTIC_QUERY: &str = "SELECT 1 AS test_connection";

/// Outcome of one connectivity check. Ephemeral, computed per request.
#[derive(Debug, Clone)]
pub struct ConnectivityReport {
    pub ok: bool,
    pub detail: String,
}

pub async fn check_connection(config: &DatabaseConfig) -> ConnectivityReport {
    match probe(config).await {
        Ok(()) => ConnectivityReport {
            ok: true,
            detail: "Database connection established successfully!".to_string(),
        },
        Err(err) => {
            warn!(error = %err, "database connectivity check failed");
            ConnectivityReport {
                ok: false,
                detail: err.to_string(),
            }
        }
    }
}

async fn probe(config: &DatabaseConfig) -> Result<(), sqlx::Error> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .password(&config.password)
        .database(&config.database);

    let mut conn = MySqlConnection::connect_with(&options).await?;

    // Close the connection whether or not the query succeeded, then report
    // the query outcome first.
    let query_result = sqlx::query(DIAGNOSTIC_QUERY).fetch_one(&mut conn).await;
    let close_result = conn.close().await;
    query_result?;
    close_result?;
    Ok(())
}
