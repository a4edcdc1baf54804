pub mod cache;
pub mod config;
pub mod labels;
pub mod review;

pub use cache::{ModelCache, ModelOptions};
pub use config::{BatchMode, PipelineConfig};
pub use labels::{FineSentiment, SentimentLabel};
pub use review::{Aspect, AspectMention, AspectSentimentMap, Review};
