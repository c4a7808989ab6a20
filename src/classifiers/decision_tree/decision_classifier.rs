use crate::classifiers::Classifier;
use crate::classifiers::decision_tree::nodes::Node;
use crate::classifiers::decision_tree::tree_format::{read_node, write_node};
use crate::classifiers::error::ClassifierError;
use crate::core::features::{FeatureVector, TextBlock};
use crate::evaluation::{AccuracyReport, calculate_accuracy};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Binary decision-tree classifier over named numeric features.
///
/// A tree is either read back from its textual form
/// ([`from_reader`](Self::from_reader)) or grown one labeled sample at a time
/// ([`from_training_data`](Self::from_training_data)). Once built it is only
/// read.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionClassifier<B: FeatureVector = TextBlock> {
    root: Node<B>,
}

impl<B: FeatureVector> DecisionClassifier<B> {
    /// Reads a tree written by [`save`](Self::save).
    ///
    /// Leaves read this way carry no sample, so the tree can classify but
    /// not be grown further.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ClassifierError> {
        let mut lines = reader.lines();
        let root = read_node(&mut lines)?.ok_or_else(|| {
            ClassifierError::InvalidArgument("serialized tree is empty".into())
        })?;
        Ok(Self { root })
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ClassifierError> {
        let file = File::open(path.as_ref())?;
        let classifier = Self::from_reader(BufReader::new(file))?;
        info!(
            depth = classifier.depth(),
            leaves = classifier.leaf_count(),
            "tree loaded"
        );
        Ok(classifier)
    }

    /// Grows a tree by inserting `data[i]` with `labels[i]` in order.
    ///
    /// The first sample seeds a single leaf; every later sample either lands
    /// on a leaf with its own label or splits the leaf it reaches.
    #[instrument(skip_all, fields(samples = data.len()))]
    pub fn from_training_data(data: Vec<B>, labels: Vec<String>) -> Result<Self, ClassifierError> {
        if data.len() != labels.len() {
            return Err(ClassifierError::InvalidArgument(format!(
                "length of provided data [{}] doesn't match provided labels [{}]",
                data.len(),
                labels.len()
            )));
        }

        let mut samples = data.into_iter().zip(labels);
        let Some((first_block, first_label)) = samples.next() else {
            return Err(ClassifierError::InvalidArgument("training data is empty".into()));
        };

        let mut root = Node::leaf(first_label, Some(first_block));
        for (block, label) in samples {
            root.insert(label, block)?;
        }

        let classifier = Self { root };
        info!(
            depth = classifier.depth(),
            leaves = classifier.leaf_count(),
            "tree trained"
        );
        Ok(classifier)
    }

    /// Label of the leaf `vector` reaches.
    pub fn classify(&self, vector: &B) -> &str {
        self.root.classify(vector)
    }

    /// Writes the tree in pre-order, in the format [`from_reader`](Self::from_reader) reads.
    pub fn save<W: Write>(&self, mut writer: W) -> Result<(), ClassifierError> {
        write_node(&self.root, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ClassifierError> {
        let file = File::create(path.as_ref())?;
        self.save(BufWriter::new(file))?;
        info!(leaves = self.leaf_count(), "tree saved");
        Ok(())
    }

    pub fn calculate_accuracy(
        &self,
        data: &[B],
        labels: &[String],
    ) -> Result<AccuracyReport, ClassifierError> {
        calculate_accuracy(self, data, labels)
    }

    pub fn root(&self) -> &Node<B> {
        &self.root
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

impl<B: FeatureVector> Classifier<B> for DecisionClassifier<B> {
    fn classify(&self, vector: &B) -> &str {
        self.root.classify(vector)
    }
}
