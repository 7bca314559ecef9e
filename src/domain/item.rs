use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

/// Coarse content category, emitted as the `_type` extension field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Article,
    Video,
}

/// One entry of the generated JSON Feed.
///
/// `_source` and `_type` are bookkeeping extension fields recording
/// provenance; feed readers ignore them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub content_html: String,
    pub content_text: String,
    pub date_published: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    pub author: Author,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "_source")]
    pub source_tag: String,
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
}

impl FeedItem {
    pub fn new(id: String, title: String, source_tag: String) -> Self {
        Self {
            id,
            title,
            url: None,
            content_html: String::new(),
            content_text: String::new(),
            date_published: String::new(),
            external_url: None,
            author: Author {
                name: String::new(),
            },
            image: None,
            source_tag,
            item_type: None,
        }
    }

    /// Key used by the deduplicator: canonical link when present, id otherwise.
    pub fn identity_key(&self) -> &str {
        self.url.as_deref().unwrap_or(&self.id)
    }
}
