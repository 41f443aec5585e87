//! Rule-format conversion seam.
//!
//! The update engine treats rule conversion as an opaque text transform:
//! `convert` receives the full newline-joined rule text of one filter and
//! returns the converted text. The engine re-splits on newlines afterwards.
//!
//! [`LegacyModifierConverter`] is the built-in implementation used by the
//! CLI. It rewrites response-modifier aliases that older filter lists used
//! before redirect resources became the canonical form.

use crate::core::error;
use regex::Regex;

pub trait RuleConverter: Send + Sync {
    fn convert(&self, text: &str) -> Result<String, error::FiltergateError>;
}

/// Rewrites legacy `$empty` and `$mp4` modifier aliases to their redirect
/// equivalents. Lines without a modifier section pass through untouched.
pub struct LegacyModifierConverter {
    empty_modifier: Regex,
    mp4_modifier: Regex,
}

impl LegacyModifierConverter {
    pub fn new() -> Self {
        // Match the alias only inside a modifier list: after `$` or `,`,
        // terminated by `,` or end of line.
        Self {
            empty_modifier: Regex::new(r"([$,])empty(,|$)").unwrap(),
            mp4_modifier: Regex::new(r"([$,])mp4(,|$)").unwrap(),
        }
    }
}

impl Default for LegacyModifierConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleConverter for LegacyModifierConverter {
    fn convert(&self, text: &str) -> Result<String, error::FiltergateError> {
        let converted: Vec<String> = text
            .split('\n')
            .map(|line| {
                let line = self
                    .empty_modifier
                    .replace_all(line, "${1}redirect=nooptext${2}");
                let line = self
                    .mp4_modifier
                    .replace_all(&line, "${1}redirect=noopmp4-1s,media${2}");
                line.into_owned()
            })
            .collect();
        Ok(converted.join("\n"))
    }
}
