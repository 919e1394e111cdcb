#![deny(missing_docs)]

//! # Naming Rules
//!
//! Derives canonical model names from raw table-style identifiers.
//!
//! `scm_production_orders` becomes `ScmProductionOrder`: the last segment is
//! singularized, known short prefixes get their fixed spelling, and every
//! other segment has its first character upper-cased.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Lookup tables driving `canonical_name`.
///
/// Passed explicitly to every transform; loaded from the `naming` section
/// of the config file when one is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingRules {
    /// Words that look plural but must never be singularized.
    pub singular_exceptions: IndexSet<String>,
    /// Exact segment -> replacement spelling.
    pub prefixes: IndexMap<String, String>,
}

impl Default for NamingRules {
    fn default() -> Self {
        let singular_exceptions = ["status", "news", "series"]
            .into_iter()
            .map(String::from)
            .collect();
        let prefixes = [
            ("scm", "Scm"),
            ("mdm", "Mdm"),
            ("bcm", "Bcm"),
            ("os", "Os"),
            ("ad", "Ad"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            singular_exceptions,
            prefixes,
        }
    }
}

impl NamingRules {
    /// Rules with empty tables (plain singularize + capitalize).
    pub fn empty() -> Self {
        Self {
            singular_exceptions: IndexSet::new(),
            prefixes: IndexMap::new(),
        }
    }

    /// Singularizes a single word.
    ///
    /// Checked in order: exception set, `-ies` -> `-y`, `-ses` -> `-se`,
    /// then a lone trailing `s` (but not `ss`).
    pub fn singularize(&self, word: &str) -> String {
        if self.singular_exceptions.contains(word) {
            return word.to_string();
        }
        if word.len() > 3 {
            if let Some(stem) = word.strip_suffix("ies") {
                return format!("{}y", stem);
            }
            if word.ends_with("ses") {
                return word[..word.len() - 1].to_string();
            }
        }
        if word.len() > 1 && word.ends_with('s') && !word.ends_with("ss") {
            return word[..word.len() - 1].to_string();
        }
        word.to_string()
    }

    /// Maps one segment through the prefix table, or capitalizes it.
    pub fn segment(&self, segment: &str) -> String {
        match self.prefixes.get(segment) {
            Some(fixed) => fixed.clone(),
            None => capitalize_first(segment),
        }
    }

    /// Computes the canonical name for a raw declaration name.
    ///
    /// Names that already contain an upper-case character are treated as
    /// canonical and returned untouched.
    pub fn canonical_name(&self, raw: &str) -> String {
        if raw.chars().any(char::is_uppercase) {
            return raw.to_string();
        }

        let mut parts: Vec<String> = raw.split('_').map(String::from).collect();
        if let Some(last) = parts.last_mut() {
            *last = self.singularize(last);
        }

        parts.iter().map(|p| self.segment(p)).collect()
    }
}

/// Upper-cases the first character, leaving the rest as is.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
