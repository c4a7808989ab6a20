pub mod classifier;
pub mod decision_tree;
mod error;

pub use classifier::Classifier;
pub use decision_tree::DecisionClassifier;
pub use error::ClassifierError;
