use serde::{Deserialize, Serialize};

use super::FeedItem;

pub const JSONFEED_VERSION: &str = "https://jsonfeed.org/version/1";

/// The generated JSON Feed document. Rebuilt from scratch every run and
/// fully replaced on write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedDocument {
    pub version: String,
    pub title: String,
    pub home_page_url: String,
    pub feed_url: String,
    pub description: String,
    pub items: Vec<FeedItem>,
}

impl FeedDocument {
    pub fn new(
        title: String,
        home_page_url: String,
        feed_url: String,
        description: String,
    ) -> Self {
        Self {
            version: JSONFEED_VERSION.to_string(),
            title,
            home_page_url,
            feed_url,
            description,
            items: Vec::new(),
        }
    }
}
