pub mod scripted_driver;
pub mod vec_stream;

pub use scripted_driver::{Answer, ScriptedDriver};
pub use vec_stream::VecStream;
