use crate::classifiers::decision_tree::nodes::{DecisionNode, LeafNode};
use crate::classifiers::error::ClassifierError;
use crate::core::features::FeatureVector;
use crate::utils::math::midpoint;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Node<B> {
    Decision(DecisionNode<B>),
    Leaf(LeafNode<B>),
}

impl<B: FeatureVector> Node<B> {
    pub fn leaf<L: Into<String>>(label: L, block: Option<B>) -> Self {
        Node::Leaf(LeafNode::new(label.into(), block))
    }

    pub fn decision<F: Into<String>>(
        feature: F,
        threshold: f64,
        left: Node<B>,
        right: Node<B>,
    ) -> Self {
        Node::Decision(DecisionNode::new(feature.into(), threshold, left, right))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Label of a leaf; `None` for decision nodes.
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => Some(leaf.label()),
            Node::Decision(_) => None,
        }
    }

    /// Walks from this node down to a leaf and returns its label.
    pub fn classify(&self, vector: &B) -> &str {
        match self {
            Node::Leaf(leaf) => leaf.label(),
            Node::Decision(decision) => decision.child_for(vector).classify(vector),
        }
    }

    /// Adds one labeled sample to the subtree rooted here.
    ///
    /// A leaf with the same label absorbs the sample. A leaf with a different
    /// label is replaced by a decision node on the feature where the two
    /// samples differ most, thresholded at the midpoint of their values; the
    /// sample with the smaller value becomes the left child.
    ///
    /// On error the subtree is left untouched.
    pub(crate) fn insert(&mut self, label: String, block: B) -> Result<(), ClassifierError> {
        match self {
            Node::Decision(decision) => decision.child_for_mut(&block).insert(label, block),
            Node::Leaf(leaf) => {
                if leaf.label() == label {
                    return Ok(());
                }

                let stored = leaf.block().ok_or_else(|| {
                    ClassifierError::InvalidArgument(format!(
                        "leaf '{}' holds no sample to split against",
                        leaf.label()
                    ))
                })?;
                let feature = stored.find_biggest_difference(&block).ok_or_else(|| {
                    ClassifierError::InvalidArgument(
                        "cannot split between two samples without features".into(),
                    )
                })?;
                let threshold = midpoint(stored.get(&feature), block.get(&feature));
                let new_goes_left = block.get(&feature) < threshold;

                debug!(
                    feature = %feature,
                    threshold,
                    existing = leaf.label(),
                    incoming = %label,
                    "splitting leaf"
                );

                let existing = std::mem::replace(self, Node::leaf(String::new(), None));
                let incoming = Node::leaf(label, Some(block));
                *self = if new_goes_left {
                    Node::decision(feature, threshold, incoming, existing)
                } else {
                    Node::decision(feature, threshold, existing, incoming)
                };
                Ok(())
            }
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Decision(d) => 1 + d.left().depth().max(d.right().depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Decision(d) => d.left().leaf_count() + d.right().leaf_count(),
        }
    }
}
