//! Version-gated migration steps over persisted filter state.
//!
//! Each step repairs one historical storage-shape change and is listed in
//! [`builtin_migrations`] in chronological order. Steps must be idempotent:
//! the whole pipeline may be re-run on the next start after a failure, and a
//! step may run against storage its precondition no longer describes.
//!
//! Gate semantics: a step applies when its gate version is strictly greater
//! than the version the user is upgrading from, i.e. the fix shipped after
//! the user's installed version.

use crate::core::catalog::FilterCatalog;
use crate::core::convert::RuleConverter;
use crate::core::error;
use crate::core::rules::FilterRuleStore;
use crate::core::settings::{
    DEFAULT_UPDATE_PERIOD_MS, PREVIOUS_DEFAULT_UPDATE_PERIOD_MS, SettingsStore,
};
use crate::core::state::{FilterStateStore, USER_FILTER_ID};
use rayon::prelude::*;
use std::path::Path;

/// Everything a migration step may touch, constructed once at process start
/// and handed to the coordinator.
pub struct UpdateContext {
    pub settings: SettingsStore,
    pub state: FilterStateStore,
    pub rules: FilterRuleStore,
    pub catalog: FilterCatalog,
    pub converter: Box<dyn RuleConverter>,
}

impl UpdateContext {
    pub fn new(
        root: &Path,
        catalog: FilterCatalog,
        converter: Box<dyn RuleConverter>,
    ) -> Self {
        Self {
            settings: SettingsStore::new(root),
            state: FilterStateStore::new(root),
            rules: FilterRuleStore::new(root),
            catalog,
            converter,
        }
    }
}

/// Migration definition
pub struct Migration {
    /// Step applies when upgrading from a version older than this gate.
    pub gate: &'static str,
    /// Stable step name, used in progress output and tests.
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Migration function
    pub run: fn(&UpdateContext) -> Result<(), error::FiltergateError>,
}

/// All gated migrations in chronological order. The unconditional
/// obsolete-filter removal is not listed here; the coordinator appends it to
/// every update run.
pub fn builtin_migrations() -> Vec<Migration> {
    vec![
        Migration {
            gate: "3.0.3",
            name: "handle_undefined_group_statuses",
            description: "Enable groups left without state by pre-group versions",
            run: handle_undefined_group_statuses,
        },
        Migration {
            gate: "3.3.5",
            name: "handle_default_update_period_setting",
            description: "Move the old 48h default update period to the 12h default",
            run: handle_default_update_period_setting,
        },
        Migration {
            gate: "4.0.67",
            name: "on_update_rule_converter",
            description: "Re-save stored filter rules in converted form",
            run: on_update_rule_converter,
        },
    ]
}

/// Versions before multi-group support wrote filter state with no group
/// state at all. Every enabled filter whose recorded group has no status row
/// gets that group enabled, restoring "enabled filter implies defined group
/// state".
pub fn handle_undefined_group_statuses(
    ctx: &UpdateContext,
) -> Result<(), error::FiltergateError> {
    let filters_state = ctx.state.get_filters_state()?;
    let groups_state = ctx.state.get_groups_state()?;

    for state in filters_state.values() {
        if state.enabled && !groups_state.contains_key(&state.group_id) {
            ctx.state.enable_group(state.group_id)?;
        }
    }
    Ok(())
}

/// Overwrites the stored update period only when it exactly equals the old
/// default. A user who deliberately chose 48h is migrated too; the stored
/// value carries no "user changed this" marker to tell the cases apart.
pub fn handle_default_update_period_setting(
    ctx: &UpdateContext,
) -> Result<(), error::FiltergateError> {
    if ctx.settings.update_period_ms()? == PREVIOUS_DEFAULT_UPDATE_PERIOD_MS {
        ctx.settings.set_update_period_ms(DEFAULT_UPDATE_PERIOD_MS)?;
    }
    Ok(())
}

/// From 4.0.67 rule texts are stored already converted. Re-saves every
/// installed filter's rules through the converter, except the user's custom
/// filter. A filter with no stored rules converts the empty sequence, which
/// leaves an empty record behind.
///
/// Per-filter conversions run in parallel; they touch disjoint filter ids.
/// Any single failure fails the whole step.
pub fn on_update_rule_converter(ctx: &UpdateContext) -> Result<(), error::FiltergateError> {
    let filters_state = ctx.state.get_filters_state()?;
    let installed_ids: Vec<i64> = filters_state.keys().copied().collect();

    installed_ids
        .par_iter()
        .filter(|&&filter_id| filter_id != USER_FILTER_ID)
        .try_for_each(|&filter_id| {
            let lines = ctx.rules.get(filter_id)?.unwrap_or_default();
            let converted_text = ctx.converter.convert(&lines.join("\n"))?;
            let converted: Vec<String> = if converted_text.is_empty() {
                Vec::new()
            } else {
                converted_text.split('\n').map(str::to_string).collect()
            };
            ctx.rules.set(filter_id, &converted)
        })
}

/// Removes state and rules of every installed filter the catalog no longer
/// knows. Runs on every update regardless of version. Re-running with
/// nothing obsolete is a no-op.
pub fn remove_obsolete_filters(ctx: &UpdateContext) -> Result<(), error::FiltergateError> {
    let filters_state = ctx.state.get_filters_state()?;

    let to_remove: Vec<i64> = filters_state
        .keys()
        .copied()
        .filter(|&filter_id| !ctx.catalog.has_filter(filter_id))
        .collect();

    to_remove.par_iter().try_for_each(|&filter_id| {
        ctx.state.remove_filter(filter_id)?;
        ctx.rules.remove(filter_id)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::version::is_greater_version;

    #[test]
    fn test_registry_order_is_chronological() {
        let migrations = builtin_migrations();
        let names: Vec<&str> = migrations.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "handle_undefined_group_statuses",
                "handle_default_update_period_setting",
                "on_update_rule_converter",
            ]
        );
        for pair in migrations.windows(2) {
            assert!(
                is_greater_version(pair[1].gate, pair[0].gate),
                "gates must ascend: {} then {}",
                pair[0].gate,
                pair[1].gate
            );
        }
    }
}
