use serde::{Serialize, Deserialize};

/// Index statistics for reporting after a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub record_count: usize,
    pub term_count: usize,
    pub posting_count: usize,
}
