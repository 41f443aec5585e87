//! Core modules for the filtergate update engine.
//!
//! Leaf stores and helpers live beside the migration registry and the
//! update coordinator that drives them.

pub mod catalog;
pub mod convert;
pub mod db;
pub mod error;
pub mod migration;
pub mod rules;
pub mod schemas;
pub mod settings;
pub mod state;
pub mod update;
pub mod version;
