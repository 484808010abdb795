use rusqlite::Connection;

use crate::constants::SQLITE_BUSY_TIMEOUT_MS;
use crate::{MarketError, MarketResult};

/// Open the cache database with the client pragmas, creating parent
/// directories and applying pending migrations.
pub fn open_connection(path: &std::path::Path) -> MarketResult<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)
        .map_err(|e| MarketError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), "Cache database opened");

    configure(&conn)?;
    super::migrations::migrate(&conn)?;

    Ok(conn)
}

/// Pragmas for a single-writer client cache:
/// - journal_mode = WAL
/// - busy_timeout = SQLITE_BUSY_TIMEOUT_MS
/// - synchronous = NORMAL
/// - foreign_keys = ON
fn configure(conn: &Connection) -> MarketResult<()> {
    conn.execute_batch(&format!(
        "PRAGMA journal_mode = WAL;
         PRAGMA busy_timeout = {};
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;",
        SQLITE_BUSY_TIMEOUT_MS,
    ))
    .map_err(|e| MarketError::Storage(format!("Failed to configure pragmas: {}", e)))?;
    Ok(())
}
