use std::fs;

use crate::domain::FeedDocument;
use crate::errors::MergeResult;

/// Serializes the feed document to its fixed output path, fully replacing
/// any prior content. No atomic rename; the tool is re-run on schedule.
pub struct FeedWriter {
    path: String,
}

impl FeedWriter {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    pub fn write(&self, document: &FeedDocument) -> MergeResult<()> {
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
