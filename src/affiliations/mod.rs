mod index;
pub use index::{AffiliationIndex, IndexStyle};

/// Ordered list of affiliations, indexed by position of first appearance.
///
/// `add` never checks for an existing entry: callers look the affiliation up
/// with `get_index` first and only add it when absent.
#[derive(Debug, Clone, Default)]
pub struct AffiliationRegistry {
    entries: Vec<String>,
    style: IndexStyle,
}

impl AffiliationRegistry {
    pub fn new(style: IndexStyle) -> Self {
        Self {
            entries: Vec::new(),
            style,
        }
    }

    /// Append an affiliation and return the index of the new entry
    pub fn add(&mut self, affiliation: &str) -> AffiliationIndex {
        self.entries.push(affiliation.to_string());
        self.style.index_for(self.entries.len() - 1)
    }

    /// Index of the first entry equal to `affiliation`
    pub fn get_index(&self, affiliation: &str) -> Option<AffiliationIndex> {
        self.entries
            .iter()
            .position(|entry| entry == affiliation)
            .map(|position| self.style.index_for(position))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn indexed_entries(&self) -> impl Iterator<Item = (AffiliationIndex, &str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(move |(position, entry)| (self.style.index_for(position), entry.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
