//! Persisted enabled/group state for filters and filter groups.
//!
//! `filters_state` may reference group ids that have no `groups_state` row
//! ("undefined group status") and filter ids no longer present in the
//! catalog ("obsolete"). Both are expected drift, repaired by migration
//! steps rather than reported as errors.

use crate::core::db;
use crate::core::error;
use rusqlite::params;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Filter id reserved for the user's own custom rules. Never subject to
/// rule-format conversion.
pub const USER_FILTER_ID: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub enabled: bool,
    pub group_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupState {
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct FilterStateStore {
    root: PathBuf,
}

impl FilterStateStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn get_filters_state(&self) -> Result<FxHashMap<i64, FilterState>, error::FiltergateError> {
        let conn = db::connect_filters(&self.root)?;
        let mut stmt = conn.prepare("SELECT filter_id, enabled, group_id FROM filters_state")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                FilterState {
                    enabled: row.get::<_, i64>(1)? != 0,
                    group_id: row.get::<_, i64>(2)?,
                },
            ))
        })?;
        let mut state = FxHashMap::default();
        for row in rows {
            let (filter_id, filter_state) = row?;
            state.insert(filter_id, filter_state);
        }
        Ok(state)
    }

    pub fn get_groups_state(&self) -> Result<FxHashMap<i64, GroupState>, error::FiltergateError> {
        let conn = db::connect_filters(&self.root)?;
        let mut stmt = conn.prepare("SELECT group_id, enabled FROM groups_state")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                GroupState {
                    enabled: row.get::<_, i64>(1)? != 0,
                },
            ))
        })?;
        let mut state = FxHashMap::default();
        for row in rows {
            let (group_id, group_state) = row?;
            state.insert(group_id, group_state);
        }
        Ok(state)
    }

    pub fn set_filter_state(
        &self,
        filter_id: i64,
        state: FilterState,
    ) -> Result<(), error::FiltergateError> {
        let conn = db::connect_filters(&self.root)?;
        conn.execute(
            "INSERT INTO filters_state(filter_id, enabled, group_id) VALUES(?1, ?2, ?3)
             ON CONFLICT(filter_id) DO UPDATE SET
                enabled = excluded.enabled,
                group_id = excluded.group_id",
            params![filter_id, state.enabled as i64, state.group_id],
        )?;
        Ok(())
    }

    pub fn remove_filter(&self, filter_id: i64) -> Result<(), error::FiltergateError> {
        let conn = db::connect_filters(&self.root)?;
        conn.execute(
            "DELETE FROM filters_state WHERE filter_id = ?1",
            params![filter_id],
        )?;
        Ok(())
    }

    pub fn set_group_state(
        &self,
        group_id: i64,
        state: GroupState,
    ) -> Result<(), error::FiltergateError> {
        let conn = db::connect_filters(&self.root)?;
        conn.execute(
            "INSERT INTO groups_state(group_id, enabled) VALUES(?1, ?2)
             ON CONFLICT(group_id) DO UPDATE SET enabled = excluded.enabled",
            params![group_id, state.enabled as i64],
        )?;
        Ok(())
    }

    pub fn enable_group(&self, group_id: i64) -> Result<(), error::FiltergateError> {
        self.set_group_state(group_id, GroupState { enabled: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_filters_state_round_trip() {
        let tmp = TempDir::new().expect("tempdir");
        let store = FilterStateStore::new(tmp.path());
        store
            .set_filter_state(
                10,
                FilterState {
                    enabled: true,
                    group_id: 2,
                },
            )
            .unwrap();

        let state = store.get_filters_state().unwrap();
        assert_eq!(state.len(), 1);
        assert_eq!(state[&10].group_id, 2);
        assert!(state[&10].enabled);
    }

    #[test]
    fn test_remove_filter_is_idempotent() {
        let tmp = TempDir::new().expect("tempdir");
        let store = FilterStateStore::new(tmp.path());
        store
            .set_filter_state(
                7,
                FilterState {
                    enabled: false,
                    group_id: 1,
                },
            )
            .unwrap();
        store.remove_filter(7).unwrap();
        store.remove_filter(7).unwrap();
        assert!(store.get_filters_state().unwrap().is_empty());
    }

    #[test]
    fn test_enable_group_upserts() {
        let tmp = TempDir::new().expect("tempdir");
        let store = FilterStateStore::new(tmp.path());
        store
            .set_group_state(3, GroupState { enabled: false })
            .unwrap();
        store.enable_group(3).unwrap();
        store.enable_group(5).unwrap();

        let groups = store.get_groups_state().unwrap();
        assert!(groups[&3].enabled);
        assert!(groups[&5].enabled);
    }
}
