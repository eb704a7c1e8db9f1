pub mod component_selector;
pub mod effects;

pub use component_selector::{ComponentSelectionTable, ComponentSelector, SelectionRow};
pub use effects::{Effect, EffectExtractor};
