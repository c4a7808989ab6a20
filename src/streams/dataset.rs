use crate::core::features::{TextBlock, Vocabulary};
use crate::streams::{LabeledText, Stream, StreamError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Parallel lists of raw texts and their labels, in stream order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    texts: Vec<String>,
    labels: Vec<String>,
}

impl Dataset {
    /// Drains `stream` from its current position.
    ///
    /// Stops at the first unreadable record and returns its error.
    pub fn from_stream(stream: &mut dyn Stream) -> Result<Self, StreamError> {
        let mut dataset = Self::default();
        while stream.has_more_examples() {
            let Some(example) = stream.next_example() else {
                break;
            };
            dataset.push(example?);
        }
        Ok(dataset)
    }

    pub fn push(&mut self, example: LabeledText) {
        self.texts.push(example.text);
        self.labels.push(example.label);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Reorders the samples with a permutation derived from `seed`.
    pub fn shuffle(&mut self, seed: u64) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));

        let mut texts = std::mem::take(&mut self.texts);
        let mut labels = std::mem::take(&mut self.labels);
        self.texts = order.iter().map(|&i| std::mem::take(&mut texts[i])).collect();
        self.labels = order.iter().map(|&i| std::mem::take(&mut labels[i])).collect();
    }

    /// Splits off the tail of the dataset.
    ///
    /// The first `round(len * train_ratio)` samples stay in the returned
    /// training part; `train_ratio` is clamped to `[0, 1]`.
    pub fn split(mut self, train_ratio: f64) -> (Dataset, Dataset) {
        let ratio = train_ratio.clamp(0.0, 1.0);
        let at = ((self.len() as f64) * ratio).round() as usize;
        let test = Dataset {
            texts: self.texts.split_off(at),
            labels: self.labels.split_off(at),
        };
        (self, test)
    }

    pub fn vocabulary(&self, min_count: usize) -> Vocabulary {
        Vocabulary::from_texts_with_min_count(self.texts.iter().map(String::as_str), min_count)
    }

    pub fn to_blocks(&self, vocabulary: Option<&Vocabulary>) -> Vec<TextBlock> {
        self.texts
            .iter()
            .map(|t| TextBlock::from_text(t, vocabulary))
            .collect()
    }

    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::FeatureVector;
    use crate::testing::VecStream;

    fn sample() -> Dataset {
        let mut d = Dataset::default();
        for i in 0..10 {
            let label = if i % 2 == 0 { "ham" } else { "spam" };
            d.push(LabeledText::new(label, format!("text {i}")));
        }
        d
    }

    #[test]
    fn from_stream_keeps_order() {
        let mut s = VecStream::new(vec![
            LabeledText::new("ham", "hello"),
            LabeledText::new("spam", "win"),
        ]);
        let d = Dataset::from_stream(&mut s).unwrap();
        assert_eq!(d.labels(), ["ham", "spam"]);
        assert_eq!(d.texts(), ["hello", "win"]);
    }

    #[test]
    fn from_stream_surfaces_bad_records() {
        let mut s = VecStream::with_error_at(
            vec![LabeledText::new("ham", "a"), LabeledText::new("spam", "b")],
            1,
        );
        let err = Dataset::from_stream(&mut s).unwrap_err();
        assert!(matches!(err, StreamError::MalformedRow { .. }));
    }

    #[test]
    fn shuffle_is_seeded_and_keeps_pairs() {
        let mut a = sample();
        let mut b = sample();
        a.shuffle(7);
        b.shuffle(7);
        assert_eq!(a, b);
        assert_ne!(a, sample());

        for (text, label) in a.texts().iter().zip(a.labels()) {
            let i: usize = text.trim_start_matches("text ").parse().unwrap();
            assert_eq!(label, if i % 2 == 0 { "ham" } else { "spam" });
        }
    }

    #[test]
    fn split_rounds_and_preserves_order() {
        let (train, test) = sample().split(0.75);
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
        assert_eq!(test.texts(), ["text 8", "text 9"]);
    }

    #[test]
    fn split_clamps_ratio() {
        let (train, test) = sample().split(1.5);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());
    }

    #[test]
    fn blocks_follow_vocabulary() {
        let mut d = Dataset::default();
        d.push(LabeledText::new("spam", "free free money"));
        d.push(LabeledText::new("ham", "lunch"));
        let vocab = d.vocabulary(1);
        let blocks = d.to_blocks(Some(&vocab));

        assert_eq!(vocab.len(), 3);
        assert_eq!(blocks[0].feature_names(), vec!["free", "lunch", "money"]);
        assert!((blocks[0].get("free") - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(blocks[1].get("lunch"), 1.0);
    }
}
