pub mod instance_conditional_test;
pub mod nominal_attribute_multiway_test;

pub use instance_conditional_test::InstanceConditionalTest;
pub use nominal_attribute_multiway_test::NominalAttributeMultiwayTest;
