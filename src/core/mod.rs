pub mod attributes;
pub mod class_label;
pub mod dataset;
pub mod error;
pub mod instance_header;
pub mod instances;
pub mod mushroom;
