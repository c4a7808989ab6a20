use crate::classifiers::DecisionClassifier;
use crate::streams::{Dataset, Stream};
use crate::tasks::{Task, TaskError, TaskOutcome};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Measures a previously saved tree against a labeled stream.
pub struct LoadEvaluateTask {
    tree_path: PathBuf,
    test: Box<dyn Stream>,
}

impl LoadEvaluateTask {
    pub fn new(tree_path: PathBuf, test: Box<dyn Stream>) -> Self {
        Self { tree_path, test }
    }
}

impl Task for LoadEvaluateTask {
    #[instrument(skip_all, name = "load_evaluate", fields(tree = %self.tree_path.display()))]
    fn run(&mut self) -> Result<TaskOutcome, TaskError> {
        let classifier: DecisionClassifier = DecisionClassifier::load(&self.tree_path)?;

        self.test.restart()?;
        let dataset = Dataset::from_stream(self.test.as_mut())?;
        // Saved trees keep no vocabulary; features missing from a text read as zero.
        let report = classifier.calculate_accuracy(&dataset.to_blocks(None), dataset.labels())?;
        info!(
            samples = dataset.len(),
            overall = report.overall(),
            "evaluation finished"
        );

        Ok(TaskOutcome::Evaluated {
            report,
            samples: dataset.len(),
            depth: classifier.depth(),
            leaves: classifier.leaf_count(),
        })
    }
}
