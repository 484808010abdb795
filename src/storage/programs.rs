use rusqlite::{params, Connection, Row};

use crate::gateway::ProgramCache;
use crate::program::CustomProgramRecord;
use crate::time_utils;
use crate::{MarketError, MarketResult};

pub struct CustomProgramStorage;

// ── Row mapping ──

fn record_from_row(row: &Row) -> rusqlite::Result<CustomProgramRecord> {
    let created_str: String = row.get("created_at")?;
    let data_json: String = row.get("data")?;
    Ok(CustomProgramRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        marketplace_id: row.get("marketplace_id")?,
        data: serde_json::from_str(&data_json).unwrap_or(serde_json::Value::Null),
        created_at: time_utils::from_sqlite(&created_str).unwrap_or_else(|_| time_utils::now()),
    })
}

impl CustomProgramStorage {
    /// Idempotent save keyed on the marketplace id: re-joining a program
    /// refreshes the cached copy instead of duplicating it.
    pub fn save(conn: &Connection, record: &CustomProgramRecord) -> MarketResult<()> {
        conn.execute(
            "INSERT INTO custom_programs (id, name, marketplace_id, data, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(marketplace_id) DO UPDATE SET
                 name = excluded.name,
                 data = excluded.data",
            params![
                record.id,
                record.name,
                record.marketplace_id,
                serde_json::to_string(&record.data)?,
                time_utils::to_sqlite(&record.created_at),
            ],
        )?;
        Ok(())
    }

    pub fn get_by_marketplace_id(
        conn: &Connection,
        marketplace_id: i64,
    ) -> MarketResult<Option<CustomProgramRecord>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, marketplace_id, data, created_at
             FROM custom_programs WHERE marketplace_id = ?1",
        )?;
        let mut rows = stmt.query_map(params![marketplace_id], record_from_row)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    pub fn list_all(conn: &Connection) -> MarketResult<Vec<CustomProgramRecord>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, marketplace_id, data, created_at
             FROM custom_programs ORDER BY created_at",
        )?;
        let rows = stmt.query_map([], record_from_row)?;
        rows.map(|r| r.map_err(MarketError::from)).collect()
    }

    pub fn delete(conn: &Connection, id: &str) -> MarketResult<()> {
        let changed = conn.execute("DELETE FROM custom_programs WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(MarketError::Storage(format!("No cached program: {}", id)));
        }
        Ok(())
    }
}

/// `ProgramCache` implementation over an owned connection, handed to the
/// invite flow as the local-persistence collaborator.
pub struct SqliteProgramCache {
    conn: Connection,
}

impl SqliteProgramCache {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(path: &std::path::Path) -> MarketResult<Self> {
        Ok(Self::new(super::database::open_connection(path)?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl ProgramCache for SqliteProgramCache {
    fn save_custom_program(&self, record: &CustomProgramRecord) -> MarketResult<()> {
        CustomProgramStorage::save(&self.conn, record)
    }
}
