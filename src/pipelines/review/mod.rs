//! End-to-end review analysis: language normalization, aspect extraction,
//! per-aspect classification and aggregation, for single reviews and batches.

pub mod batch;
pub mod builder;
pub mod pipeline;

pub use batch::{BatchOutput, BatchResult, BatchRow, BatchSummary, RowError};
pub use builder::ReviewPipelineBuilder;
pub use pipeline::{PipelineResult, ReviewPipeline};
