pub mod arff;
mod data_lines;
pub mod stream;
pub mod uci_mushroom;

pub use arff::ArffFileStream;
pub use stream::Stream;
pub use uci_mushroom::MushroomCsvStream;
