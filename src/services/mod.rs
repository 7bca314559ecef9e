pub mod generate_service;
pub mod merge_service;

pub use generate_service::GenerateService;
pub use merge_service::{MergeService, MAX_ITEMS};
