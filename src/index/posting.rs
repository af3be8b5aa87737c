use serde::{Serialize, Deserialize};
use crate::core::types::RecordId;

/// Posting list for a term
/// Note: kept strictly increasing so intersection is a linear merge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    ids: Vec<RecordId>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList { ids: Vec::new() }
    }

    /// Precondition: `ids` is strictly increasing.
    pub fn from_ids(ids: Vec<RecordId>) -> Self {
        PostingList { ids }
    }

    /// Appends a record id unless it already sits at the tail.
    /// Ids arrive in ascending build order, so this keeps the list
    /// strictly increasing even if the caller skips its own de-duplication.
    pub fn push(&mut self, id: RecordId) {
        if self.ids.last() != Some(&id) {
            self.ids.push(id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn into_ids(self) -> Vec<RecordId> {
        self.ids
    }

    /// Two-pointer merge intersection in O(|self| + |other|).
    /// Precondition: both lists are strictly increasing; violations are
    /// not repaired beyond the duplicate guard on emit.
    pub fn intersect(&self, other: &PostingList) -> PostingList {
        let a = &self.ids;
        let b = &other.ids;
        let mut out: Vec<RecordId> = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            if a[i] == b[j] {
                if out.last() != Some(&a[i]) {
                    out.push(a[i]);
                }
                i += 1;
                j += 1;
            } else if a[i] < b[j] {
                i += 1;
            } else {
                j += 1;
            }
        }

        PostingList { ids: out }
    }
}
