pub mod document;
pub mod item;
pub mod source;

pub use document::{FeedDocument, JSONFEED_VERSION};
pub use item::{Author, FeedItem, ItemType};
pub use source::{Source, SourceKind};
