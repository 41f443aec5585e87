//! Dotted version string comparison for migration gating.
//!
//! Versions are dot-separated non-negative integers ("3.3.5", "4.0.67").
//! Missing trailing components count as zero, so "3.3" == "3.3.0". A string
//! that does not parse as a version (empty string included) is treated as
//! older than any valid version, which makes an absent previous-version
//! record behave as minimally old. Comparison never fails.

use std::cmp::Ordering;

/// Returns true if version `a` is strictly greater than version `b`.
pub fn is_greater_version(a: &str, b: &str) -> bool {
    compare_versions(a, b) == Ordering::Greater
}

pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(a), Some(b)) => compare_components(&a, &b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Parses a dotted numeric version. Any component that is not a plain
/// non-negative integer invalidates the whole string.
fn parse_version(version: &str) -> Option<Vec<u64>> {
    if version.is_empty() {
        return None;
    }
    version
        .split('.')
        .map(|part| part.parse::<u64>().ok())
        .collect()
}

fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_patch_version() {
        assert!(is_greater_version("3.3.5", "3.3.4"));
        assert!(!is_greater_version("3.3.4", "3.3.5"));
    }

    #[test]
    fn test_equal_versions_are_not_greater() {
        assert!(!is_greater_version("3.3.5", "3.3.5"));
    }

    #[test]
    fn test_empty_previous_version_is_minimally_old() {
        assert!(is_greater_version("3.3.5", ""));
        assert!(!is_greater_version("", "3.3.5"));
    }

    #[test]
    fn test_missing_trailing_components_are_zero() {
        assert!(!is_greater_version("3.3", "3.3.0"));
        assert!(!is_greater_version("3.3.0", "3.3"));
        assert!(is_greater_version("3.3.1", "3.3"));
    }

    #[test]
    fn test_component_count_does_not_dominate() {
        assert!(is_greater_version("4.0", "3.9.9.9"));
        assert!(is_greater_version("10.0.0", "9.9.9"));
    }

    #[test]
    fn test_unparsable_versions_degrade_to_oldest() {
        assert!(is_greater_version("1.0", "not-a-version"));
        assert!(!is_greater_version("3.3.5-beta", "1.0"));
        assert!(!is_greater_version("garbage", "junk"));
    }

    #[test]
    fn test_antisymmetry_for_distinct_versions() {
        let pairs = [("3.0.3", "3.0.0"), ("4.0.67", "3.3.5"), ("0.1", "0.0.9")];
        for (a, b) in pairs {
            assert_ne!(is_greater_version(a, b), is_greater_version(b, a));
        }
    }
}
