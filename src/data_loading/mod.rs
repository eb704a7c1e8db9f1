pub mod csv_loader;
pub mod split;
pub mod table;

pub use csv_loader::CsvLoader;
pub use split::{SplitConfig, TrainTestSplit};
pub use table::ObservationTable;
