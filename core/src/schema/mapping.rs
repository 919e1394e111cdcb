use crate::naming::NamingRules;
use indexmap::IndexMap;

/// Insertion-ordered raw name -> canonical name table.
///
/// A raw name seen twice keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelMapping {
    entries: IndexMap<String, String>,
}

impl ModelMapping {
    /// Builds the table for `names` using `rules`.
    pub fn build<I, S>(names: I, rules: &NamingRules) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .map(|raw| {
                let raw = raw.as_ref();
                (raw.to_string(), rules.canonical_name(raw))
            })
            .collect();
        Self { entries }
    }

    /// All entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries whose canonical name differs, in discovery order.
    pub fn renamed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(raw, canonical)| raw != canonical)
    }

    /// Renamed entries ordered for the global rename pass.
    ///
    /// Longest raw name first (by character count). Equal lengths keep
    /// discovery order.
    pub fn rename_order(&self) -> Vec<(&str, &str)> {
        let mut order: Vec<(&str, &str)> = self.renamed().collect();
        order.sort_by_key(|(raw, _)| std::cmp::Reverse(raw.chars().count()));
        order
    }
}
