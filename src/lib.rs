pub mod data_loading;
pub mod decomposition;
pub mod error;
pub mod evaluation;
pub mod feature_selection;
pub mod interpretation;
pub mod models;
pub mod pipeline;
pub mod processing;

pub use data_loading::{CsvLoader, ObservationTable, SplitConfig, TrainTestSplit};
pub use decomposition::{Decomposer, DecompositionResult};
pub use error::{PipelineError, Result};
pub use evaluation::{ComponentSelectionTable, ComponentSelector, Effect, EffectExtractor};
pub use feature_selection::{FeatureSelector, FeatureSet, NameRule};
pub use interpretation::{ComponentInterpreter, ComponentProfile, LabelTable};
pub use models::{Coefficient, FittedLinearModel, OlsRegressor, RegressionFitter};
pub use pipeline::{AnalysisPipeline, AnalysisPipelineBuilder, AnalysisPipelineDirector, AnalysisReport};
pub use processing::{EntropyTransformer, EntropyWeightedMatrix};
