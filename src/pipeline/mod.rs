pub mod builder;
pub mod director;
pub mod pipeline;

pub use builder::AnalysisPipelineBuilder;
pub use director::AnalysisPipelineDirector;
pub use pipeline::{AnalysisPipeline, AnalysisReport};
