pub mod headers;
pub mod instances;

pub use headers::{binary_header, toy_mushroom_header};
pub use instances::{dataset, instance};
