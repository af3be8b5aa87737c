use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;
use crate::analysis::tokenizer::Tokenizer;
use crate::core::config::IndexConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Record, RecordId};
use crate::index::inverted::InvertedIndex;

/// Builds an `InvertedIndex` in a single linear pass over a tab-separated
/// source, one record per line. No global sort, no backtracking.
pub struct IndexBuilder {
    config: IndexConfig,
    tokenizer: Tokenizer,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> Self {
        let tokenizer = Tokenizer::new(config.split_policy);
        IndexBuilder { config, tokenizer }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// An unreadable file is fatal; no partial index is returned.
    pub fn build_from_file<P: AsRef<Path>>(&self, path: P) -> Result<InvertedIndex> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            Error::new(
                ErrorKind::Io,
                format!("cannot open '{}': {}", path.display(), err),
            )
        })?;
        self.build_from_reader(BufReader::new(file))
    }

    pub fn build_from_reader<R: BufRead>(&self, reader: R) -> Result<InvertedIndex> {
        let mut index = InvertedIndex::new();
        // Transient per-record set, so a token occurring many times in one
        // record contributes its id only once.
        let mut seen: HashSet<String> = HashSet::new();

        for line in reader.lines() {
            let line = line?;
            let record_id = RecordId::new(index.records.len() as u32 + 1);
            let record = Record::from_line(&line);
            let text = record.indexed_text(self.config.indexed_fields);
            index.records.push(record);

            seen.clear();
            for token in self.tokenizer.tokenize(&text) {
                if !seen.insert(token.clone()) {
                    continue;
                }
                index.postings.entry(token).or_default().push(record_id);
            }
        }

        let stats = index.stats();
        info!(
            records = stats.record_count,
            terms = stats.term_count,
            postings = stats.posting_count,
            "index built"
        );
        Ok(index)
    }
}
