mod decision_classifier;
pub mod nodes;
pub mod tree_format;

pub use decision_classifier::DecisionClassifier;
