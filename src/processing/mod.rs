pub mod entropy_transformer;

pub use entropy_transformer::{EntropyTransformer, EntropyWeightedMatrix};
