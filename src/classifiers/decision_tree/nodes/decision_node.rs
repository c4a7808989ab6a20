use crate::classifiers::decision_tree::nodes::node::Node;
use crate::core::features::FeatureVector;

/// Binary test `value(feature) < threshold`.
///
/// Samples passing the test descend into `left`, all others into `right`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionNode<B> {
    feature: String,
    threshold: f64,
    left: Box<Node<B>>,
    right: Box<Node<B>>,
}

impl<B: FeatureVector> DecisionNode<B> {
    pub fn new(feature: String, threshold: f64, left: Node<B>, right: Node<B>) -> Self {
        Self {
            feature,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn left(&self) -> &Node<B> {
        &self.left
    }

    pub fn right(&self) -> &Node<B> {
        &self.right
    }

    #[inline]
    pub fn goes_left(&self, vector: &B) -> bool {
        vector.get(&self.feature) < self.threshold
    }

    pub fn child_for(&self, vector: &B) -> &Node<B> {
        if self.goes_left(vector) {
            &self.left
        } else {
            &self.right
        }
    }

    pub(crate) fn child_for_mut(&mut self, vector: &B) -> &mut Node<B> {
        if self.goes_left(vector) {
            &mut self.left
        } else {
            &mut self.right
        }
    }
}
