use std::sync::Arc;
use crate::core::types::RecordId;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::PostingList;

/// Boolean AND query execution over a built index.
pub struct QueryProcessor {
    index: Arc<InvertedIndex>,
}

impl QueryProcessor {
    pub fn new(index: Arc<InvertedIndex>) -> Self {
        QueryProcessor { index }
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Processes a keyword query and returns matching record ids in
    /// ascending order. An empty keyword list yields an empty result;
    /// so does any keyword without postings — one unmatched term vetoes
    /// the whole query, there is no partial-match fallback.
    pub fn process<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<RecordId> {
        if keywords.is_empty() {
            return Vec::new();
        }

        let mut lists: Vec<&PostingList> = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let keyword = keyword.as_ref().to_lowercase();
            match self.index.postings(&keyword) {
                Some(list) if !list.is_empty() => lists.push(list),
                _ => return Vec::new(),
            }
        }

        // Shortest lists first: bounds intermediate result size and the
        // total merge work.
        lists.sort_by_key(|list| list.len());

        let mut result = lists[0].clone();
        for list in &lists[1..] {
            result = result.intersect(list);
            if result.is_empty() {
                break;
            }
        }
        result.into_ids()
    }
}
