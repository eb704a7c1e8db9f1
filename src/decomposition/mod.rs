pub mod svd_decomposer;

pub use svd_decomposer::{Decomposer, DecompositionResult};
