//! SQLite connection and schema setup.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Single shared connection; handlers receive it through router state.
pub struct DbPool(pub Mutex<Connection>);

const SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Initialize DB at path, create the schema if absent, return managed pool.
pub fn init_db(db_path: &Path) -> Result<DbPool, AppError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AppError::Db(e.to_string()))?;
    }
    let conn = Connection::open(db_path).map_err(|e| AppError::Db(e.to_string()))?;
    open_pool(conn)
}

/// In-memory database with the full schema applied.
pub fn init_test_db() -> DbPool {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    open_pool(conn).expect("create schema in in-memory db")
}

fn open_pool(conn: Connection) -> Result<DbPool, AppError> {
    // Per connection; a no-op inside a transaction.
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| AppError::Db(e.to_string()))?;
    init_schema(&conn)?;
    Ok(DbPool(Mutex::new(conn)))
}

/// Every statement is `IF NOT EXISTS`, so this is safe on an existing file.
fn init_schema(conn: &Connection) -> Result<(), AppError> {
    conn.execute_batch(SCHEMA)
        .map_err(|e| AppError::Db(format!("schema init: {e}")))?;
    log::debug!("Schema ready");
    Ok(())
}

/// Get connection from pool (for use in use cases).
///
/// A poisoned lock is recovered: any transaction open at the time of the
/// panic was rolled back when it was dropped.
pub fn get_connection(pool: &DbPool) -> MutexGuard<'_, Connection> {
    pool.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
