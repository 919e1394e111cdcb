#![deny(missing_docs)]

//! # Whole-Word Matcher
//!
//! Finds and replaces identifiers in a document without touching longer
//! identifiers that merely contain them.
//!
//! Boundary contract: an occurrence of the needle is a match only if it is
//! bounded on both sides by a Unicode word boundary (`\b`), i.e. the
//! neighbouring characters are not word characters (letters, digits, `_`).
//! The start and end of the document count as boundaries. Matches never
//! overlap and are reported left to right.

use regex::{NoExpand, Regex};
use std::ops::Range;

/// A single identifier to search for.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    // `None` for an empty needle, which matches nothing.
    re: Option<Regex>,
}

impl WordMatcher {
    /// Creates a matcher for `word`.
    pub fn new(word: &str) -> Self {
        let re = if word.is_empty() {
            None
        } else {
            Regex::new(&format!(r"\b{}\b", regex::escape(word))).ok()
        };
        Self { re }
    }

    /// Byte ranges of every whole-word occurrence in `text`.
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        match &self.re {
            Some(re) => re.find_iter(text).map(|m| m.range()).collect(),
            None => Vec::new(),
        }
    }

    /// Returns true if `text` contains at least one whole-word occurrence.
    pub fn is_match(&self, text: &str) -> bool {
        self.re.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Replaces every whole-word occurrence with `replacement`.
    ///
    /// Returns the new text and how many occurrences were replaced.
    pub fn replace_all(&self, text: &str, replacement: &str) -> (String, usize) {
        let Some(re) = &self.re else {
            return (text.to_string(), 0);
        };

        let count = re.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        (re.replace_all(text, NoExpand(replacement)).into_owned(), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_respects_boundaries() {
        let m = WordMatcher::new("orders");
        let text = "orders scm_orders orders_items (orders) orders";
        let found: Vec<&str> = m.find_all(text).into_iter().map(|r| &text[r]).collect();
        assert_eq!(found, vec!["orders", "orders", "orders"]);
        assert_eq!(m.find_all(text)[1], 32..38);
    }

    #[test]
    fn test_replace_counts() {
        let m = WordMatcher::new("users");
        let (out, n) = m.replace_all("user users users2 [users]", "User");
        assert_eq!(out, "user User users2 [User]");
        assert_eq!(n, 2);
    }

    #[test]
    fn test_replacement_is_literal() {
        let m = WordMatcher::new("orders");
        let (out, _) = m.replace_all("x orders y", "$1Order");
        assert_eq!(out, "x $1Order y");
    }

    #[test]
    fn test_occurrence_inside_rejected_candidate() {
        // "aa" inside "aaa" is never bounded, but the trailing "aa" of "x aa" is.
        let m = WordMatcher::new("aa");
        assert_eq!(m.find_all("aaa aa"), vec![4..6]);
    }

    #[test]
    fn test_unicode_neighbours_are_identifier_chars() {
        let m = WordMatcher::new("item");
        assert!(!m.is_match("éitem"));
        assert!(m.is_match("«item»"));
    }

    #[test]
    fn test_empty_word_matches_nothing() {
        let m = WordMatcher::new("");
        assert!(m.find_all("anything").is_empty());
        assert!(!m.is_match("anything"));
        assert_eq!(m.replace_all("anything", "x"), ("anything".to_string(), 0));
    }

    #[test]
    fn test_no_match_returns_original() {
        let m = WordMatcher::new("suppliers");
        let (out, n) = m.replace_all("model supplier {}", "Supplier");
        assert_eq!(out, "model supplier {}");
        assert_eq!(n, 0);
    }
}
