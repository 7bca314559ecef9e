use crate::config::Config;
use crate::domain::{FeedDocument, FeedItem};
use crate::normalize::Normalizer;
use crate::services::merge_service::MergeService;
use crate::sources::{FeedFetcher, SourceRegistry};

/// One full feed rebuild: fetch every registered source, normalize, merge,
/// and assemble the output document. Holds no state across runs.
pub struct GenerateService {
    config: Config,
    registry: SourceRegistry,
    fetcher: FeedFetcher,
    normalizer: Normalizer,
}

impl GenerateService {
    pub fn new(config: &Config, registry: SourceRegistry) -> Self {
        let normalizer = Normalizer::new(&config.default_author);
        Self {
            config: config.clone(),
            registry,
            fetcher: FeedFetcher::new(),
            normalizer,
        }
    }

    /// Run the pipeline. A failing source contributes zero items and never
    /// aborts the run; the failure is logged with source context.
    pub fn generate(&self) -> FeedDocument {
        let mut all_items: Vec<FeedItem> = Vec::new();

        for source in self.registry.iter() {
            println!("Fetching from {}...", source.name);

            match self.fetcher.fetch(source) {
                Ok(raw_items) => {
                    let count = raw_items.len();
                    all_items.extend(
                        raw_items
                            .into_iter()
                            .enumerate()
                            .map(|(index, raw)| self.normalizer.normalize(source, index, raw)),
                    );
                    println!("Added {} items from {}", count, source.name);
                }
                Err(e) => {
                    eprintln!("Error fetching from {}: {}", source.name, e);
                }
            }
        }

        let mut document = FeedDocument::new(
            self.config.site_title.clone(),
            self.config.home_page_url.clone(),
            self.config.feed_url.clone(),
            self.config.description.clone(),
        );
        document.items = MergeService::merge(all_items);
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Source, SourceKind};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on an ephemeral port, returning the
    /// URL to request.
    fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/rss+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}/feed", addr)
    }

    fn rss(title: &str, link: &str, date: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>t</title><link>https://example.com</link>
<description>d</description>
<item><title>{}</title><link>{}</link><guid>{}</guid>
<description>body</description><pubDate>{}</pubDate></item>
</channel></rss>"#,
            title, link, link, date
        )
    }

    fn test_config() -> Config {
        Config {
            output_path: "feed.json".to_string(),
            sources_path: None,
            site_title: "Test Feed".to_string(),
            home_page_url: "https://example.com/".to_string(),
            feed_url: "https://example.com/feed.json".to_string(),
            description: "test".to_string(),
            default_author: "Owner".to_string(),
        }
    }

    #[test]
    fn test_failing_source_is_isolated() {
        let good_one = rss(
            "Post One",
            "https://example.com/one",
            "Mon, 04 Mar 2024 10:00:00 +0000",
        );
        let good_two = rss(
            "Post Two",
            "https://example.com/two",
            "Tue, 05 Mar 2024 10:00:00 +0000",
        );

        let sources = vec![
            Source::new(
                "alpha",
                &serve_once(Box::leak(good_one.into_boxed_str())),
                SourceKind::Generic,
            ),
            // Nothing listens on port 9; this source fails every run
            Source::new("broken", "http://127.0.0.1:9/feed", SourceKind::Generic),
            Source::new(
                "beta",
                &serve_once(Box::leak(good_two.into_boxed_str())),
                SourceKind::Generic,
            ),
        ];

        let registry = SourceRegistry::from_sources(sources);
        let service = GenerateService::new(&test_config(), registry);

        let document = service.generate();

        assert_eq!(document.items.len(), 2);
        let tags: Vec<&str> = document.items.iter().map(|i| i.source_tag.as_str()).collect();
        assert!(tags.contains(&"alpha"));
        assert!(tags.contains(&"beta"));
    }

    #[test]
    fn test_document_metadata_from_config() {
        let registry = SourceRegistry::from_sources(Vec::new());
        let service = GenerateService::new(&test_config(), registry);

        let document = service.generate();

        assert_eq!(document.version, "https://jsonfeed.org/version/1");
        assert_eq!(document.title, "Test Feed");
        assert_eq!(document.feed_url, "https://example.com/feed.json");
        assert!(document.items.is_empty());
    }
}
