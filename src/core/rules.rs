//! Raw rule-line storage per filter.
//!
//! Rules are stored as a single newline-joined text blob per filter id.
//! Callers work in lines; joining is an implementation detail of this store.

use crate::core::db;
use crate::core::error;
use rusqlite::OptionalExtension;
use rusqlite::params;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FilterRuleStore {
    root: PathBuf,
}

impl FilterRuleStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Stored rule lines for a filter, or None if the filter has no record.
    pub fn get(&self, filter_id: i64) -> Result<Option<Vec<String>>, error::FiltergateError> {
        let conn = db::connect_filters(&self.root)?;
        let blob = conn
            .query_row(
                "SELECT rules FROM filter_rules WHERE filter_id = ?1",
                params![filter_id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(blob.map(|text| {
            if text.is_empty() {
                Vec::new()
            } else {
                text.split('\n').map(str::to_string).collect()
            }
        }))
    }

    pub fn set(&self, filter_id: i64, lines: &[String]) -> Result<(), error::FiltergateError> {
        let conn = db::connect_filters(&self.root)?;
        conn.execute(
            "INSERT INTO filter_rules(filter_id, rules) VALUES(?1, ?2)
             ON CONFLICT(filter_id) DO UPDATE SET rules = excluded.rules",
            params![filter_id, lines.join("\n")],
        )?;
        Ok(())
    }

    pub fn remove(&self, filter_id: i64) -> Result<(), error::FiltergateError> {
        let conn = db::connect_filters(&self.root)?;
        conn.execute(
            "DELETE FROM filter_rules WHERE filter_id = ?1",
            params![filter_id],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_filter_has_no_record() {
        let tmp = TempDir::new().expect("tempdir");
        let store = FilterRuleStore::new(tmp.path());
        assert!(store.get(1).unwrap().is_none());
    }

    #[test]
    fn test_set_then_get_preserves_lines() {
        let tmp = TempDir::new().expect("tempdir");
        let store = FilterRuleStore::new(tmp.path());
        let lines = vec!["||example.org^".to_string(), "##.banner".to_string()];
        store.set(2, &lines).unwrap();
        assert_eq!(store.get(2).unwrap().unwrap(), lines);
    }

    #[test]
    fn test_empty_rule_list_round_trips_as_empty() {
        let tmp = TempDir::new().expect("tempdir");
        let store = FilterRuleStore::new(tmp.path());
        store.set(3, &[]).unwrap();
        assert_eq!(store.get(3).unwrap().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_remove_deletes_record() {
        let tmp = TempDir::new().expect("tempdir");
        let store = FilterRuleStore::new(tmp.path());
        store.set(4, &["rule".to_string()]).unwrap();
        store.remove(4).unwrap();
        assert!(store.get(4).unwrap().is_none());
    }
}
