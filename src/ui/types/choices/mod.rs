mod dataset_choice;
mod learner_choice;
mod schema;
mod split_choice;
mod task_choice;
mod ui_choice;

pub use dataset_choice::*;
pub use learner_choice::*;
pub use schema::*;
pub use split_choice::*;
pub use task_choice::*;
pub use ui_choice::UIChoice;
