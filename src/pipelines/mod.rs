// Pipeline stages, each behind a model trait so implementations can be swapped
pub mod aspects;
pub mod language;
pub mod overall;
pub mod review;
pub mod text;
pub mod utils;

pub use review::{ReviewPipeline, ReviewPipelineBuilder};
