use crate::core::features::FeatureVector;

/// Anything that maps a feature vector to a class label.
pub trait Classifier<B: FeatureVector> {
    fn classify(&self, vector: &B) -> &str;
}
