use crate::streams::{CsvTextStream, Stream};
use crate::tasks::{ClassifyTextTask, LoadEvaluateTask, Task, TrainEvaluateTask, TrainOptions};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{ClassifyParameters, LoadParameters, TaskChoice, TrainParameters};
use std::path::PathBuf;

fn open_stream(path: &str) -> Result<Box<dyn Stream>, BuildError> {
    Ok(Box::new(CsvTextStream::new(path)?))
}

impl TryFrom<TrainParameters> for TrainEvaluateTask {
    type Error = BuildError;

    fn try_from(p: TrainParameters) -> Result<Self, Self::Error> {
        let min_word_count = usize::try_from(p.min_word_count).map_err(|_| {
            BuildError::InvalidParameter(format!(
                "min_word_count {} does not fit this platform",
                p.min_word_count
            ))
        })?;
        let train = open_stream(&p.train_path)?;
        let test = p.test_path.as_deref().map(open_stream).transpose()?;
        let options = TrainOptions {
            shuffle_seed: p.shuffle_seed,
            train_ratio: p.train_ratio,
            min_word_count,
            save_tree_to: p.save_tree_to.map(PathBuf::from),
        };
        Ok(TrainEvaluateTask::new(train, test, options)?)
    }
}

impl TryFrom<LoadParameters> for LoadEvaluateTask {
    type Error = BuildError;

    fn try_from(p: LoadParameters) -> Result<Self, Self::Error> {
        let test = open_stream(&p.test_path)?;
        Ok(LoadEvaluateTask::new(PathBuf::from(p.tree_path), test))
    }
}

impl From<ClassifyParameters> for ClassifyTextTask {
    fn from(p: ClassifyParameters) -> Self {
        ClassifyTextTask::new(PathBuf::from(p.tree_path), p.text)
    }
}

pub fn build_task(choice: TaskChoice) -> Result<Box<dyn Task>, BuildError> {
    match choice {
        TaskChoice::TrainAndEvaluate(p) => Ok(Box::new(TrainEvaluateTask::try_from(p)?)),
        TaskChoice::LoadAndEvaluate(p) => Ok(Box::new(LoadEvaluateTask::try_from(p)?)),
        TaskChoice::ClassifyText(p) => Ok(Box::new(ClassifyTextTask::from(p))),
    }
}
