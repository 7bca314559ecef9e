pub mod fetcher;
pub mod registry;

pub use fetcher::{FeedFetcher, RawItem};
pub use registry::SourceRegistry;
