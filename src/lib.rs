pub mod core;
pub mod error;
pub mod history;
mod loaders;
pub mod models;
pub mod pipelines;

pub use error::{Result, SentimentError};

// Re-export core types
pub use crate::core::{
    Aspect, AspectMention, AspectSentimentMap, BatchMode, FineSentiment, ModelCache,
    PipelineConfig, Review, SentimentLabel,
};

// Re-export the pieces most callers need to assemble a pipeline
pub use history::{HistoryRecord, HistoryStore, MemoryHistory};
pub use models::{BertStarOptions, TfidfLogisticModel};
pub use pipelines::language::Normalization;
pub use pipelines::overall::{OverallVerdict, VerdictTier};
pub use pipelines::review::{
    BatchOutput, BatchRow, PipelineResult, ReviewPipeline, ReviewPipelineBuilder, RowError,
};
