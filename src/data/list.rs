use crate::data::entry::Entry;
use crate::data::value::Value;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// An ordered key/value listing plus its view options
///
/// This is the single input to every renderer. The title is shown only when
/// present and non-empty; the `Key`/`Value` header row is shown only when
/// `show_head` is set. Entries render top to bottom in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyValueList {
    entries: Vec<Entry>,
    title: Option<String>,
    show_head: bool,
}

impl KeyValueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a listing from `(key, value)` pairs, keeping their order
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| Entry::new(k, v))
                .collect(),
            title: None,
            show_head: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_head(mut self, show_head: bool) -> Self {
        self.show_head = show_head;
        self
    }

    pub fn push(&mut self, entry: Entry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// The title, if one was set and is non-empty
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    pub fn show_head(&self) -> bool {
        self.show_head
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_show_head(&mut self, show_head: bool) {
        self.show_head = show_head;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only entries whose key matches, preserving order and view options
    pub fn filter_keys(&self, pattern: &Regex) -> KeyValueList {
        KeyValueList {
            entries: self
                .entries
                .iter()
                .filter(|e| pattern.is_match(e.key()))
                .cloned()
                .collect(),
            title: self.title.clone(),
            show_head: self.show_head,
        }
    }
}

impl<'a> IntoIterator for &'a KeyValueList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
