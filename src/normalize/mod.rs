pub mod enrich;
pub mod sanitize;

use chrono::Utc;
use url::Url;

use crate::domain::{Author, FeedItem, ItemType, Source, SourceKind};
use crate::sources::RawItem;

pub use sanitize::{strip_html, CONTENT_TEXT_MAX};

/// Maps raw origin items into the unified feed-item schema. The only place
/// raw origin shapes are interpreted.
pub struct Normalizer {
    default_author: String,
}

impl Normalizer {
    pub fn new(default_author: &str) -> Self {
        Self {
            default_author: default_author.to_string(),
        }
    }

    pub fn normalize(&self, source: &Source, index: usize, raw: RawItem) -> FeedItem {
        let id = derive_id(&source.name, &raw, index);

        let title = raw
            .title
            .clone()
            .unwrap_or_else(|| "Untitled".to_string());

        let url = raw.link.clone().or_else(|| raw.guid.clone());

        let content_html = raw
            .content_html
            .clone()
            .or_else(|| raw.summary.clone())
            .unwrap_or_default();

        let content_text = strip_html(
            raw.summary
                .as_deref()
                .or(raw.content_html.as_deref())
                .unwrap_or(""),
        );

        let date_published = raw
            .published
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        let author = Author {
            name: raw
                .author
                .clone()
                .unwrap_or_else(|| self.default_author.clone()),
        };

        let mut item = FeedItem {
            id,
            title,
            url,
            content_html,
            content_text,
            date_published,
            external_url: raw.link.clone(),
            author,
            image: None,
            source_tag: source.name.clone(),
            item_type: None,
        };

        self.enrich(&mut item, source.kind, &raw);

        // An explicit enclosure always wins over enrichment-derived images
        if let Some(enclosure) = raw.enclosure_url {
            item.image = Some(enclosure);
        }

        item
    }

    /// Source-category enrichment, keyed on the registry's declared kind.
    fn enrich(&self, item: &mut FeedItem, kind: SourceKind, raw: &RawItem) {
        match kind {
            SourceKind::Video => {
                item.image = raw.media_thumbnail.clone().or_else(|| {
                    raw.link.as_deref().and_then(enrich::youtube_thumbnail)
                });
                // Video descriptions are plain text already; keep them whole
                if let Some(text) = raw.content_html.clone().or_else(|| raw.summary.clone()) {
                    item.content_text = text;
                }
                item.item_type = Some(ItemType::Video);
            }
            SourceKind::Article => {
                item.image = enrich::first_image_src(&item.content_html);
                item.item_type = Some(ItemType::Article);
            }
            SourceKind::Generic => {}
        }
    }
}

/// Identity key derivation, in strict priority order: origin guid, then the
/// last path segment of the link, then a synthetic timestamp+index key.
fn derive_id(source: &str, raw: &RawItem, index: usize) -> String {
    if let Some(guid) = &raw.guid {
        return format!("{}-{}", source, guid);
    }

    if let Some(segment) = raw.link.as_deref().and_then(last_path_segment) {
        return format!("{}-{}", source, segment);
    }

    format!("{}-{}-{}", source, Utc::now().timestamp_millis(), index)
}

fn last_path_segment(link: &str) -> Option<String> {
    let parsed = Url::parse(link).ok()?;
    parsed
        .path_segments()?
        .filter(|s| !s.is_empty())
        .last()
        .map(|s| s.to_string())
}
