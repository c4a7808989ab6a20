use crate::core::features::feature_vector::FeatureVector;
use crate::core::features::tokenizer::tokenize;
use crate::core::features::vocabulary::Vocabulary;
use std::collections::{BTreeMap, BTreeSet};

/// Word-frequency feature vector for one piece of text.
///
/// Each feature is a word and its value is the word's relative frequency
/// (occurrences / total tokens). Features iterate in ascending word order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBlock {
    values: BTreeMap<String, f64>,
}

impl TextBlock {
    /// Computes word frequencies of `text`.
    ///
    /// With a vocabulary the block carries exactly the vocabulary words
    /// (zero for words the text lacks); without one it carries every token
    /// seen in the text.
    pub fn from_text(text: &str, vocabulary: Option<&Vocabulary>) -> Self {
        let tokens = tokenize(text);
        let total = tokens.len();

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for token in tokens {
            if vocabulary.is_none_or(|v| v.contains(&token)) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let frequency = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            }
        };

        let values = match vocabulary {
            Some(vocabulary) => vocabulary
                .iter()
                .map(|w| (w.to_string(), frequency(counts.get(w).copied().unwrap_or(0))))
                .collect(),
            None => counts
                .into_iter()
                .map(|(w, c)| (w, frequency(c)))
                .collect(),
        };

        Self { values }
    }

    /// Builds a block from explicit `(feature, value)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FeatureVector for TextBlock {
    fn get(&self, feature: &str) -> f64 {
        self.values.get(feature).copied().unwrap_or(0.0)
    }

    fn feature_names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    fn find_biggest_difference(&self, other: &Self) -> Option<String> {
        let domain: BTreeSet<&str> = self
            .values
            .keys()
            .chain(other.values.keys())
            .map(String::as_str)
            .collect();

        let mut best: Option<(&str, f64)> = None;
        for feature in domain {
            let diff = (self.get(feature) - other.get(feature)).abs();
            match best {
                Some((_, best_diff)) if diff <= best_diff => {}
                _ => best = Some((feature, diff)),
            }
        }
        best.map(|(feature, _)| feature.to_string())
    }
}
