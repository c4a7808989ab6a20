use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("decision on feature '{feature}' is not followed by a 'Threshold: ' line")]
    MissingThreshold { feature: String },

    #[error("threshold '{value}' for feature '{feature}' is not a number")]
    InvalidThreshold {
        feature: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("decision on feature '{feature}' is missing a subtree")]
    MissingSubtree { feature: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
