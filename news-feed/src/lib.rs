pub mod types;
pub mod traits;
pub mod utils;
pub mod parser;
pub mod markdown;
pub mod builder;
pub mod aggregator;
pub mod writer;

pub use types::*;
pub use traits::{Clock, FixedClock, SystemClock};
pub use parser::FrontmatterParser;
pub use markdown::MiniMarkdownRenderer;
pub use builder::ArticleRecordBuilder;
pub use aggregator::FeedAggregator;
pub use writer::FeedWriter;
