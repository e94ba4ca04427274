//! Session ledger of accepted guesses
//!
//! Append-only for the lifetime of a game session. Uniqueness is keyed on
//! the case-insensitive canonical title, so the duplicate predicate must be
//! consulted with the title the encyclopedia returned, never the raw guess.

use crate::primitives::Entry;

/// The set of already-accepted entries for one game session
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicate predicate: case-insensitive exact equality on the
    /// canonical name
    pub fn contains_title(&self, title: &str) -> bool {
        let needle = title.to_lowercase();
        self.entries
            .iter()
            .any(|entry| entry.name.to_lowercase() == needle)
    }

    /// Append an accepted entry. The verification chain guarantees
    /// uniqueness before calling this.
    pub fn record(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Unique categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(entry.category.as_str());
            }
        }
        seen
    }

    /// Entries carrying the given category, newest first
    pub fn entries_in_category(&self, category: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .rev()
            .filter(|entry| entry.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    include!("ledger.test.rs");
}
