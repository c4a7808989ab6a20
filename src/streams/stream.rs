use crate::streams::StreamError;

/// One raw text sample and its class label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledText {
    pub label: String,
    pub text: String,
}

impl LabeledText {
    pub fn new<L: Into<String>, T: Into<String>>(label: L, text: T) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Pull-based source of labeled texts.
///
/// Implementations may be backed by files or by in-memory collections. The
/// order in which examples are produced is the order in which a tree trained
/// on them sees them, so it must be stable across [`restart`](Stream::restart).
pub trait Stream {
    /// Indicates whether a further call to [`next_example`] may yield an item.
    ///
    /// Once this returns `false`, [`next_example`] must return `None`.
    ///
    /// [`next_example`]: Stream::next_example
    fn has_more_examples(&self) -> bool;

    /// Produces the next example, `None` at end of stream, or an error for a
    /// record that cannot be read. After an error the stream is exhausted.
    fn next_example(&mut self) -> Option<Result<LabeledText, StreamError>>;

    /// Rewinds the stream to its first example.
    fn restart(&mut self) -> Result<(), StreamError>;
}
