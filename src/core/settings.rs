//! Persisted settings for the update engine.
//!
//! Backed by the `settings` table of the filters database. Two keys matter
//! to migrations: the app version recorded after the last successful update
//! run, and the filters update period. The update period default changed
//! from 48 hours to 12 hours at version 3.3.5, which is why
//! [`PREVIOUS_DEFAULT_UPDATE_PERIOD_MS`] is still around.

use crate::core::db;
use crate::core::error;
use rusqlite::OptionalExtension;
use rusqlite::params;
use std::path::{Path, PathBuf};

pub const APP_VERSION_KEY: &str = "app-version";
pub const UPDATE_PERIOD_KEY: &str = "filters-update-period";

/// Current default filters update period: 12 hours in milliseconds.
pub const DEFAULT_UPDATE_PERIOD_MS: i64 = 12 * 60 * 60 * 1000;

/// Default update period before 3.3.5: 48 hours in milliseconds.
pub const PREVIOUS_DEFAULT_UPDATE_PERIOD_MS: i64 = 48 * 60 * 60 * 1000;

#[derive(Debug, Clone)]
pub struct SettingsStore {
    root: PathBuf,
}

impl SettingsStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, error::FiltergateError> {
        // Reads must not materialize the database: a fresh root simply has
        // no settings yet.
        if !db::filters_db_path(&self.root).exists() {
            return Ok(None);
        }
        let conn = db::connect_filters(&self.root)?;
        let value = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), error::FiltergateError> {
        let conn = db::connect_filters(&self.root)?;
        conn.execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// App version recorded by the last successful update run, or an empty
    /// string if nothing was ever recorded.
    pub fn recorded_app_version(&self) -> Result<String, error::FiltergateError> {
        Ok(self.get(APP_VERSION_KEY)?.unwrap_or_default())
    }

    pub fn record_app_version(&self, version: &str) -> Result<(), error::FiltergateError> {
        self.set(APP_VERSION_KEY, version)
    }

    /// Filters update period in milliseconds. An absent or malformed value
    /// falls back to the current default.
    pub fn update_period_ms(&self) -> Result<i64, error::FiltergateError> {
        let stored = self.get(UPDATE_PERIOD_KEY)?;
        Ok(stored
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_UPDATE_PERIOD_MS))
    }

    pub fn set_update_period_ms(&self, period_ms: i64) -> Result<(), error::FiltergateError> {
        self.set(UPDATE_PERIOD_KEY, &period_ms.to_string())
    }
}
