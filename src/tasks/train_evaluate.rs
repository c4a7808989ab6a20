use crate::classifiers::DecisionClassifier;
use crate::streams::{Dataset, Stream};
use crate::tasks::{Task, TaskError, TaskOutcome};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct TrainOptions {
    /// Shuffle the training stream with this seed before growing the tree.
    pub shuffle_seed: Option<u64>,
    /// Share of the training stream used for growing the tree; the rest is
    /// held out for evaluation when no test stream is given.
    pub train_ratio: f64,
    /// Words seen fewer times than this in the training texts are not used
    /// as features.
    pub min_word_count: usize,
    pub save_tree_to: Option<PathBuf>,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            shuffle_seed: None,
            train_ratio: 1.0,
            min_word_count: 1,
            save_tree_to: None,
        }
    }
}

/// Grows a tree from a training stream and measures it on test data.
///
/// Test data is, in order of preference: the test stream, the held-out tail
/// of the training stream, or the training samples themselves.
pub struct TrainEvaluateTask {
    train: Box<dyn Stream>,
    test: Option<Box<dyn Stream>>,
    options: TrainOptions,
    classifier: Option<DecisionClassifier>,
}

impl TrainEvaluateTask {
    pub fn new(
        train: Box<dyn Stream>,
        test: Option<Box<dyn Stream>>,
        options: TrainOptions,
    ) -> Result<Self, TaskError> {
        if !(options.train_ratio > 0.0 && options.train_ratio <= 1.0) {
            return Err(TaskError::InvalidParameter(format!(
                "train_ratio must be in (0, 1], got {}",
                options.train_ratio
            )));
        }
        if options.min_word_count == 0 {
            return Err(TaskError::InvalidParameter(
                "min_word_count must be > 0".into(),
            ));
        }

        Ok(Self {
            train,
            test,
            options,
            classifier: None,
        })
    }

    /// Tree grown by the last [`run`](Task::run).
    pub fn classifier(&self) -> Option<&DecisionClassifier> {
        self.classifier.as_ref()
    }
}

impl Task for TrainEvaluateTask {
    #[instrument(skip_all, name = "train_evaluate")]
    fn run(&mut self) -> Result<TaskOutcome, TaskError> {
        self.train.restart()?;
        let mut dataset = Dataset::from_stream(self.train.as_mut())?;
        info!(samples = dataset.len(), "training stream read");

        if let Some(seed) = self.options.shuffle_seed {
            dataset.shuffle(seed);
        }
        let (train, held_out) = dataset.split(self.options.train_ratio);

        let vocabulary = train.vocabulary(self.options.min_word_count);
        info!(words = vocabulary.len(), "vocabulary built");
        if vocabulary.is_empty() {
            warn!("vocabulary is empty; every sample will look alike");
        }

        let classifier = DecisionClassifier::from_training_data(
            train.to_blocks(Some(&vocabulary)),
            train.labels().to_vec(),
        )?;

        if let Some(path) = &self.options.save_tree_to {
            classifier.save_to_path(path)?;
        }

        let evaluation = match self.test.as_mut() {
            Some(test) => {
                test.restart()?;
                Dataset::from_stream(test.as_mut())?
            }
            None if !held_out.is_empty() => held_out,
            None => train,
        };

        let report = classifier.calculate_accuracy(
            &evaluation.to_blocks(Some(&vocabulary)),
            evaluation.labels(),
        )?;
        info!(
            samples = evaluation.len(),
            overall = report.overall(),
            "evaluation finished"
        );

        let outcome = TaskOutcome::Evaluated {
            report,
            samples: evaluation.len(),
            depth: classifier.depth(),
            leaves: classifier.leaf_count(),
        };
        self.classifier = Some(classifier);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::ClassifierError;
    use crate::core::features::TextBlock;
    use crate::evaluation::OVERALL;
    use crate::streams::{LabeledText, StreamError};
    use crate::testing::{VecStream, spam_ham_corpus};
    use tempfile::NamedTempFile;

    fn stream(examples: Vec<LabeledText>) -> Box<dyn Stream> {
        Box::new(VecStream::new(examples))
    }

    fn evaluated(outcome: TaskOutcome) -> (crate::evaluation::AccuracyReport, usize) {
        match outcome {
            TaskOutcome::Evaluated {
                report, samples, ..
            } => (report, samples),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn ctor_guards() {
        for ratio in [0.0, -0.5, 1.5, f64::NAN] {
            let opts = TrainOptions {
                train_ratio: ratio,
                ..TrainOptions::default()
            };
            let err = TrainEvaluateTask::new(stream(spam_ham_corpus()), None, opts)
                .err()
                .unwrap();
            assert!(matches!(err, TaskError::InvalidParameter(_)));
        }

        let opts = TrainOptions {
            min_word_count: 0,
            ..TrainOptions::default()
        };
        let err = TrainEvaluateTask::new(stream(spam_ham_corpus()), None, opts)
            .err()
            .unwrap();
        assert!(matches!(err, TaskError::InvalidParameter(_)));
    }

    #[test]
    fn training_data_is_fit_perfectly() {
        let mut task =
            TrainEvaluateTask::new(stream(spam_ham_corpus()), None, TrainOptions::default())
                .unwrap();
        let (report, samples) = evaluated(task.run().unwrap());

        assert_eq!(samples, 8);
        assert_eq!(report.get("ham"), Some(1.0));
        assert_eq!(report.get("spam"), Some(1.0));
        assert_eq!(report.get(OVERALL), Some(1.0));
        assert!(task.classifier().unwrap().leaf_count() >= 2);
    }

    #[test]
    fn test_stream_takes_precedence() {
        let test = vec![
            LabeledText::new("spam", "free money click now"),
            LabeledText::new("ham", "meeting at lunch"),
            LabeledText::new("ham", "review the notes"),
        ];
        let mut task = TrainEvaluateTask::new(
            stream(spam_ham_corpus()),
            Some(stream(test)),
            TrainOptions::default(),
        )
        .unwrap();
        let (report, samples) = evaluated(task.run().unwrap());

        assert_eq!(samples, 3);
        assert!(report.iter().all(|(_, v)| (0.0..=1.0).contains(&v)));
        assert!(report.overall().is_some());
    }

    #[test]
    fn held_out_tail_is_evaluated_when_no_test_stream() {
        let opts = TrainOptions {
            train_ratio: 0.75,
            ..TrainOptions::default()
        };
        let mut task = TrainEvaluateTask::new(stream(spam_ham_corpus()), None, opts).unwrap();
        let (_, samples) = evaluated(task.run().unwrap());
        assert_eq!(samples, 2);
    }

    #[test]
    fn shuffled_runs_are_reproducible() {
        let opts = TrainOptions {
            shuffle_seed: Some(42),
            ..TrainOptions::default()
        };
        let mut a = TrainEvaluateTask::new(stream(spam_ham_corpus()), None, opts.clone()).unwrap();
        let mut b = TrainEvaluateTask::new(stream(spam_ham_corpus()), None, opts).unwrap();
        assert_eq!(a.run().unwrap(), b.run().unwrap());
        assert_eq!(a.classifier(), b.classifier());
    }

    #[test]
    fn saved_tree_classifies_like_the_trained_one() {
        let tf = NamedTempFile::new().unwrap();
        let opts = TrainOptions {
            save_tree_to: Some(tf.path().to_path_buf()),
            ..TrainOptions::default()
        };
        let mut task = TrainEvaluateTask::new(stream(spam_ham_corpus()), None, opts).unwrap();
        task.run().unwrap();

        let loaded: DecisionClassifier = DecisionClassifier::load(tf.path()).unwrap();
        let trained = task.classifier().unwrap();
        for example in spam_ham_corpus() {
            let block = TextBlock::from_text(&example.text, None);
            assert_eq!(loaded.classify(&block), trained.classify(&block));
        }
    }

    #[test]
    fn empty_training_stream_fails() {
        let mut task =
            TrainEvaluateTask::new(stream(vec![]), None, TrainOptions::default()).unwrap();
        let err = task.run().unwrap_err();
        assert!(matches!(
            err,
            TaskError::Classifier(ClassifierError::InvalidArgument(_))
        ));
    }

    #[test]
    fn bad_training_record_fails() {
        let train = VecStream::with_error_at(spam_ham_corpus(), 3);
        let mut task =
            TrainEvaluateTask::new(Box::new(train), None, TrainOptions::default()).unwrap();
        let err = task.run().unwrap_err();
        assert!(matches!(
            err,
            TaskError::Stream(StreamError::MalformedRow { line: 4, .. })
        ));
    }
}
