use crate::classifiers::ClassifierError;
use crate::streams::StreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error(transparent)]
    Stream(#[from] StreamError),
}
