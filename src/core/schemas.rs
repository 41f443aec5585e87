//! Centralized database schema definitions for filtergate storage.
//!
//! All persisted filter-subscription state lives in a single SQLite file
//! under the storage root:
//! - settings: key/value pairs (recorded app version, update period, ...)
//! - filters_state: per-filter enabled flag and group membership
//! - groups_state: per-group enabled flag
//! - filter_rules: raw rule lines per filter, joined with newlines

pub const FILTERS_DB_NAME: &str = "filters.db";

pub const SETTINGS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
";

pub const FILTERS_STATE_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS filters_state (
        filter_id INTEGER PRIMARY KEY,
        enabled INTEGER NOT NULL,
        group_id INTEGER NOT NULL
    )
";

pub const GROUPS_STATE_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS groups_state (
        group_id INTEGER PRIMARY KEY,
        enabled INTEGER NOT NULL
    )
";

pub const FILTER_RULES_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS filter_rules (
        filter_id INTEGER PRIMARY KEY,
        rules TEXT NOT NULL
    )
";
