use serde::{Serialize, Deserialize};
use crate::core::config::FieldSelection;

/// 1-based record identifier, assigned sequentially in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u32);

impl RecordId {
    pub fn new(id: u32) -> Self {
        RecordId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        RecordId(id)
    }
}

/// One input line, fields kept verbatim.
/// Missing trailing columns default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub description: String,
    pub num_ratings: String,
    pub rating: String,
    pub num_sitelinks: String,
}

impl Record {
    /// Splits a raw line on tabs into at most five fields.
    /// A line with more than four tabs keeps the excess in the last field.
    pub fn from_line(line: &str) -> Self {
        let mut parts = line.splitn(5, '\t');
        Record {
            title: parts.next().unwrap_or("").to_string(),
            description: parts.next().unwrap_or("").to_string(),
            num_ratings: parts.next().unwrap_or("").to_string(),
            rating: parts.next().unwrap_or("").to_string(),
            num_sitelinks: parts.next().unwrap_or("").to_string(),
        }
    }

    pub fn fields(&self) -> [&str; 5] {
        [
            &self.title,
            &self.description,
            &self.num_ratings,
            &self.rating,
            &self.num_sitelinks,
        ]
    }

    /// The text blob that gets tokenized for this record.
    pub fn indexed_text(&self, selection: FieldSelection) -> String {
        match selection {
            FieldSelection::TitleDescription => {
                format!("{} {}", self.title, self.description)
            }
            FieldSelection::AllFields => self.fields().join(" "),
        }
    }
}
