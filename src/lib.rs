//! filtergate: versioned update engine for persisted content-filter state.
//!
//! When a content-filtering installation upgrades, its persisted
//! filter-subscription state may be shaped by any historical version of the
//! storage schema, and pieces of it may be missing entirely. This crate
//! brings that state into a consistent, reachable shape on every upgrade:
//! a sequential, idempotent, version-gated migration pipeline over a small
//! local SQLite store.
//!
//! # Architecture
//!
//! - [`core::version`]: dotted version comparison used for migration gating
//! - [`core::settings`], [`core::state`], [`core::rules`]: persisted stores
//!   for settings, filter/group enabled state, and raw rule lines
//! - [`core::catalog`]: static metadata of known filters and groups
//! - [`core::convert`]: pluggable rule-format conversion seam
//! - [`core::migration`]: ordered registry of version-gated migration steps
//! - [`core::update`]: run-info derivation and the sequential, fail-fast
//!   step executor
//!
//! # Guarantees
//!
//! - Steps run strictly in registry order; a step starts only after the
//!   previous one completed.
//! - The first failure aborts the pipeline; nothing later runs. Every step
//!   is idempotent, so the whole pipeline is safe to retry on the next
//!   start.
//! - Obsolete filters (ids the catalog no longer lists) are removed at the
//!   end of every update run, regardless of version gates.
//! - First runs perform no migration at all; there is no legacy state to
//!   repair.

pub mod cli;
pub mod core;
