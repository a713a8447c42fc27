use crate::data::list::KeyValueList;
use anyhow::{Context, Result};
use regex::Regex;

/// Handles search and filter operations on listings
///
/// Matching is key-only: the filter decides which rows to keep, it never
/// inspects value text.
pub struct SearchFilter;

impl SearchFilter {
    /// Indices of entries whose key matches the pattern
    pub fn matching_indices(list: &KeyValueList, pattern: &str) -> Result<Vec<usize>> {
        let regex = Self::compile(pattern)?;
        Ok(list
            .iter()
            .enumerate()
            .filter(|(_, entry)| regex.is_match(entry.key()))
            .map(|(idx, _)| idx)
            .collect())
    }

    /// A filtered copy of the listing, keeping title and header flag
    pub fn filter_list(list: &KeyValueList, pattern: &str) -> Result<KeyValueList> {
        let regex = Self::compile(pattern)?;
        Ok(list.filter_keys(&regex))
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern).with_context(|| format!("Invalid filter pattern: {}", pattern))
    }
}
