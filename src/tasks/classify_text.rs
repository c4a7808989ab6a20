use crate::classifiers::DecisionClassifier;
use crate::core::features::TextBlock;
use crate::tasks::{Task, TaskError, TaskOutcome};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Labels a single text with a previously saved tree.
pub struct ClassifyTextTask {
    tree_path: PathBuf,
    text: String,
}

impl ClassifyTextTask {
    pub fn new(tree_path: PathBuf, text: String) -> Self {
        Self { tree_path, text }
    }
}

impl Task for ClassifyTextTask {
    #[instrument(skip_all, name = "classify_text", fields(tree = %self.tree_path.display()))]
    fn run(&mut self) -> Result<TaskOutcome, TaskError> {
        let classifier: DecisionClassifier = DecisionClassifier::load(&self.tree_path)?;
        let label = classifier
            .classify(&TextBlock::from_text(&self.text, None))
            .to_string();
        info!(label = %label, "text classified");
        Ok(TaskOutcome::Classified { label })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::ClassifierError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn classify(tree: &str, text: &str) -> Result<TaskOutcome, TaskError> {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(tree.as_bytes()).unwrap();
        tf.flush().unwrap();
        ClassifyTextTask::new(tf.path().to_path_buf(), text.into()).run()
    }

    #[test]
    fn routes_text_by_word_frequency() {
        let tree = "Feature: free\nThreshold: 0.2\nham\nspam\n";
        assert_eq!(
            classify(tree, "FREE free money").unwrap(),
            TaskOutcome::Classified {
                label: "spam".into()
            }
        );
        assert_eq!(
            classify(tree, "lunch is free today or maybe tomorrow").unwrap(),
            TaskOutcome::Classified { label: "ham".into() }
        );
    }

    #[test]
    fn missing_tree_file_fails() {
        let err = ClassifyTextTask::new("/no/such/model.tree".into(), "hi".into())
            .run()
            .unwrap_err();
        assert!(matches!(err, TaskError::Classifier(ClassifierError::Io(_))));
    }
}
