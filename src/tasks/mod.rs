mod classify_text;
mod error;
mod load_evaluate;
mod task;
mod train_evaluate;

pub use classify_text::ClassifyTextTask;
pub use error::TaskError;
pub use load_evaluate::LoadEvaluateTask;
pub use task::{Task, TaskOutcome};
pub use train_evaluate::{TrainEvaluateTask, TrainOptions};
