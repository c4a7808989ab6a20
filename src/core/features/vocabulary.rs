use crate::core::features::tokenizer::tokenize;
use std::collections::{BTreeMap, BTreeSet};

/// Fixed, ordered set of words used as features.
///
/// Ordering is lexicographic, which is also the order in which
/// [`TextBlock`](crate::core::features::TextBlock) iterates its features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a vocabulary from every token appearing in `texts`.
    pub fn from_texts<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_texts_with_min_count(texts, 1)
    }

    /// Like [`from_texts`](Self::from_texts) but keeps only words seen at
    /// least `min_count` times across the corpus.
    pub fn from_texts_with_min_count<'a, I>(texts: I, min_count: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for text in texts {
            for token in tokenize(text) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        let words = counts
            .into_iter()
            .filter(|(_, c)| *c >= min_count)
            .map(|(w, _)| w)
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
