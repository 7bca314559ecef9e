use feed_rs::parser;
use reqwest::blocking::Client;

use crate::domain::Source;
use crate::errors::{MergeError, MergeResult};

/// A feed entry in a source's native shape, reduced to the optional fields
/// the normalizer cares about. Nothing outside the fetch/normalize boundary
/// sees feed-rs types.
#[derive(Debug, Clone, Default)]
pub struct RawItem {
    pub guid: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub content_html: Option<String>,
    pub summary: Option<String>,
    pub published: Option<String>,
    pub author: Option<String>,
    pub enclosure_url: Option<String>,
    pub media_thumbnail: Option<String>,
}

pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Retrieve and parse one remote feed into raw items.
    pub fn fetch(&self, source: &Source) -> MergeResult<Vec<RawItem>> {
        let response = self.client.get(&source.url).send()?;
        let bytes = response.bytes()?;

        Self::raw_items_from_bytes(&bytes)
    }

    fn raw_items_from_bytes(bytes: &[u8]) -> MergeResult<Vec<RawItem>> {
        let parsed = parser::parse(bytes).map_err(|e| MergeError::FeedParse(e.to_string()))?;

        let items = parsed
            .entries
            .into_iter()
            .map(|entry| {
                let guid = if entry.id.is_empty() {
                    None
                } else {
                    Some(entry.id)
                };

                let link = entry.links.first().map(|l| l.href.clone());

                // RSS <enclosure> lands in the entry content's src link;
                // some feeds surface it as image/audio media content instead
                let enclosure_url = entry
                    .content
                    .as_ref()
                    .and_then(|c| c.src.as_ref())
                    .map(|l| l.href.clone())
                    .or_else(|| {
                        entry
                            .media
                            .iter()
                            .flat_map(|m| m.content.iter())
                            .filter(|c| {
                                c.content_type.as_ref().is_some_and(|t| {
                                    let ty = t.ty().as_str();
                                    ty == "image" || ty == "audio"
                                })
                            })
                            .find_map(|c| c.url.as_ref().map(|u| u.to_string()))
                    });

                let media_thumbnail = entry
                    .media
                    .iter()
                    .flat_map(|m| m.thumbnails.iter())
                    .next()
                    .map(|t| t.image.uri.clone());

                RawItem {
                    guid,
                    title: entry.title.map(|t| t.content),
                    link,
                    content_html: entry.content.and_then(|c| c.body),
                    summary: entry.summary.map(|s| s.content),
                    published: entry
                        .published
                        .or(entry.updated)
                        .map(|dt| dt.to_rfc3339()),
                    author: entry.authors.first().map(|p| p.name.clone()),
                    enclosure_url,
                    media_thumbnail,
                }
            })
            .collect();

        Ok(items)
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}
