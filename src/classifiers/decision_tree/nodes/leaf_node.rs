use crate::core::features::FeatureVector;

/// Terminal node carrying a class label.
///
/// Leaves grown from training data keep the sample that created them so the
/// leaf can be split later; leaves read from a serialized tree have none.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode<B> {
    label: String,
    block: Option<B>,
}

impl<B: FeatureVector> LeafNode<B> {
    pub fn new(label: String, block: Option<B>) -> Self {
        Self { label, block }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn block(&self) -> Option<&B> {
        self.block.as_ref()
    }
}
