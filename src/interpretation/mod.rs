pub mod component_profile;
pub mod labels;

pub use component_profile::{ComponentInterpreter, ComponentProfile};
pub use labels::LabelTable;
