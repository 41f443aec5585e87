use crate::core::error;
use crate::core::schemas;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub fn filters_db_path(root: &Path) -> PathBuf {
    root.join(schemas::FILTERS_DB_NAME)
}

pub fn db_connect(db_path: &Path) -> Result<Connection, error::FiltergateError> {
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))
        .map_err(error::FiltergateError::RusqliteError)?;
    conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))
        .map_err(error::FiltergateError::RusqliteError)?;
    conn.execute("PRAGMA foreign_keys=ON;", [])
        .map_err(error::FiltergateError::RusqliteError)?;
    Ok(conn)
}

/// Open the filters database under `root`, creating the file and any missing
/// tables. Schema creation is idempotent.
pub fn connect_filters(root: &Path) -> Result<Connection, error::FiltergateError> {
    let db_path = filters_db_path(root);
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).map_err(error::FiltergateError::IoError)?;
    }
    let conn = db_connect(&db_path)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

fn ensure_schema(conn: &Connection) -> Result<(), error::FiltergateError> {
    conn.execute(schemas::SETTINGS_SCHEMA, [])?;
    conn.execute(schemas::FILTERS_STATE_SCHEMA, [])?;
    conn.execute(schemas::GROUPS_STATE_SCHEMA, [])?;
    conn.execute(schemas::FILTER_RULES_SCHEMA, [])?;
    Ok(())
}
