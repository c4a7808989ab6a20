mod schema;
mod task_choice;

pub use schema::*;
pub use task_choice::*;
