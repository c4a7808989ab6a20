use crate::streams::{LabeledText, Stream, StreamError};

/// In-memory stream over a fixed list of examples.
pub struct VecStream {
    examples: Vec<LabeledText>,
    error_at: Option<usize>,
    idx: usize,
}

impl VecStream {
    pub fn new(examples: Vec<LabeledText>) -> Self {
        Self {
            examples,
            error_at: None,
            idx: 0,
        }
    }

    /// Behaves like [`VecStream::new`] but reports a malformed record in
    /// place of the example at `index`, after which the stream ends.
    pub fn with_error_at(examples: Vec<LabeledText>, index: usize) -> Self {
        Self {
            examples,
            error_at: Some(index),
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn has_more_examples(&self) -> bool {
        self.idx < self.examples.len()
    }

    fn next_example(&mut self) -> Option<Result<LabeledText, StreamError>> {
        if !self.has_more_examples() {
            return None;
        }

        let i = self.idx;
        if self.error_at == Some(i) {
            self.idx = self.examples.len();
            return Some(Err(StreamError::MalformedRow {
                line: i + 1,
                content: self.examples[i].text.clone(),
            }));
        }

        self.idx += 1;
        Some(Ok(self.examples[i].clone()))
    }

    fn restart(&mut self) -> Result<(), StreamError> {
        self.idx = 0;
        Ok(())
    }
}
