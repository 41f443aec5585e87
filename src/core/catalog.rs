//! Static metadata describing the filters and groups this build knows about.
//!
//! Loaded once from a JSON file. Filter ids present in storage but absent
//! here are considered obsolete and removed on every update run.

use crate::core::error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterMetadata {
    pub filter_id: i64,
    pub group_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMetadata {
    pub group_id: i64,
    pub group_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCatalog {
    #[serde(default)]
    pub groups: Vec<GroupMetadata>,
    #[serde(default)]
    pub filters: Vec<FilterMetadata>,
}

impl FilterCatalog {
    pub fn load(path: &Path) -> Result<Self, error::FiltergateError> {
        let text = fs::read_to_string(path).map_err(error::FiltergateError::IoError)?;
        serde_json::from_str(&text).map_err(|e| {
            error::FiltergateError::CatalogError(format!("{}: {}", path.display(), e))
        })
    }

    pub fn get_filters(&self) -> &[FilterMetadata] {
        &self.filters
    }

    pub fn has_filter(&self, filter_id: i64) -> bool {
        self.filters.iter().any(|f| f.filter_id == filter_id)
    }

    pub fn find_filter(&self, filter_id: i64) -> Option<&FilterMetadata> {
        self.filters.iter().find(|f| f.filter_id == filter_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> FilterCatalog {
        serde_json::from_str(
            r#"{
                "groups": [
                    { "groupId": 1, "groupName": "Ad Blocking" },
                    { "groupId": 2, "groupName": "Privacy" }
                ],
                "filters": [
                    { "filterId": 1, "groupId": 1, "name": "Base filter" },
                    { "filterId": 3, "groupId": 2, "name": "Tracking protection",
                      "description": "Blocks trackers" }
                ]
            }"#,
        )
        .expect("parse sample catalog")
    }

    #[test]
    fn test_parse_camel_case_metadata() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get_filters().len(), 2);
        assert_eq!(catalog.groups.len(), 2);
        assert_eq!(catalog.find_filter(3).unwrap().group_id, 2);
    }

    #[test]
    fn test_has_filter() {
        let catalog = sample_catalog();
        assert!(catalog.has_filter(1));
        assert!(!catalog.has_filter(42));
    }
}
