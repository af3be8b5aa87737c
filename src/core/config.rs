/// Which columns of a record feed the index.
/// Must stay the same between build and query, or recall breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSelection {
    /// Title and description only.
    TitleDescription,
    /// All five columns, trailing numeric columns included.
    AllFields,
}

/// Which character class delimits tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Split on runs of non-letters.
    Letters,
    /// Split on runs of non-letters and non-digits.
    Alphanumeric,
}

#[derive(Debug, Clone)]
pub struct IndexConfig {
    pub indexed_fields: FieldSelection,
    pub split_policy: SplitPolicy,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            indexed_fields: FieldSelection::AllFields,
            split_policy: SplitPolicy::Alphanumeric,
        }
    }
}
