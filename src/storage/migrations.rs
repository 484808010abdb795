use rusqlite::Connection;

use crate::constants::SCHEMA_VERSION;
use crate::{MarketError, MarketResult};

/// Current schema version (0 if the version table is absent).
pub fn get_schema_version(conn: &Connection) -> MarketResult<u32> {
    let exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |r| r.get(0),
        )
        .map_err(|e| MarketError::Storage(e.to_string()))?;

    if !exists {
        return Ok(0);
    }

    let version: u32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |r| r.get(0),
        )
        .map_err(|e| MarketError::Storage(e.to_string()))?;

    Ok(version)
}

fn set_schema_version(conn: &Connection, version: u32) -> MarketResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        rusqlite::params![version],
    )
    .map_err(|e| MarketError::Storage(e.to_string()))?;
    Ok(())
}

const CACHE_DB_V1: &str = "
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS custom_programs (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    marketplace_id INTEGER NOT NULL UNIQUE,
    data TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_custom_programs_marketplace
    ON custom_programs(marketplace_id);
";

/// Apply all pending migrations.
pub fn migrate(conn: &Connection) -> MarketResult<()> {
    let mut version = get_schema_version(conn)?;

    if version < 1 {
        conn.execute_batch(CACHE_DB_V1)
            .map_err(|e| MarketError::Storage(format!("Migration v1 failed: {}", e)))?;
        version = 1;
        set_schema_version(conn, version)?;
        tracing::info!(version, "Cache schema migrated");
    }

    debug_assert_eq!(version, SCHEMA_VERSION);
    Ok(())
}
