use std::collections::HashMap;
use crate::core::stats::IndexStats;
use crate::core::types::{Record, RecordId};
use crate::index::posting::PostingList;

/// Inverted index structure: postings map plus the record store.
/// Populated by `IndexBuilder` in one pass, read-only afterwards,
/// safe to share behind an `Arc` across any number of queries.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    pub(crate) postings: HashMap<String, PostingList>,
    pub(crate) records: Vec<Record>,
}

impl InvertedIndex {
    pub(crate) fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
            records: Vec::new(),
        }
    }

    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Record lookup by its 1-based id.
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        let slot = id.value().checked_sub(1)? as usize;
        self.records.get(slot)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Iterator over all distinct terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            record_count: self.records.len(),
            term_count: self.postings.len(),
            posting_count: self.postings.values().map(PostingList::len).sum(),
        }
    }
}
