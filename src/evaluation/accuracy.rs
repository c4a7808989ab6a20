use crate::classifiers::{Classifier, ClassifierError};
use crate::core::features::FeatureVector;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use tracing::{debug, instrument};

/// Key of the aggregate entry in an [`AccuracyReport`].
pub const OVERALL: &str = "Overall";

/// Per-label accuracy plus an [`OVERALL`] entry.
///
/// For a label `l`, the value is the share of test samples truly labeled `l`
/// that the classifier also labeled `l`. Only labels predicted correctly at
/// least once get an entry. [`OVERALL`] is present for any non-empty test set,
/// even when nothing was predicted correctly. An empty test set yields an
/// empty report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccuracyReport {
    accuracies: BTreeMap<String, f64>,
}

impl AccuracyReport {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.accuracies.get(label).copied()
    }

    pub fn overall(&self) -> Option<f64> {
        self.get(OVERALL)
    }

    pub fn len(&self) -> usize {
        self.accuracies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accuracies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.accuracies.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn into_map(self) -> BTreeMap<String, f64> {
        self.accuracies
    }
}

impl Display for AccuracyReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (label, accuracy) in self.iter() {
            writeln!(f, "{label}: {accuracy:.6}")?;
        }
        Ok(())
    }
}

/// Classifies every sample of `data` and compares against `labels`.
#[instrument(skip_all, fields(samples = data.len()))]
pub fn calculate_accuracy<B, C>(
    classifier: &C,
    data: &[B],
    labels: &[String],
) -> Result<AccuracyReport, ClassifierError>
where
    B: FeatureVector,
    C: Classifier<B> + ?Sized,
{
    if data.len() != labels.len() {
        return Err(ClassifierError::InvalidArgument(format!(
            "length of provided data [{}] doesn't match provided labels [{}]",
            data.len(),
            labels.len()
        )));
    }

    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    let mut correct: BTreeMap<&str, usize> = BTreeMap::new();

    for (vector, label) in data.iter().zip(labels) {
        let predicted = classifier.classify(vector);

        *totals.entry(label.as_str()).or_insert(0) += 1;
        *totals.entry(OVERALL).or_insert(0) += 1;
        if predicted == label {
            *correct.entry(label.as_str()).or_insert(0) += 1;
            *correct.entry(OVERALL).or_insert(0) += 1;
        }
    }

    let accuracies = totals
        .into_iter()
        .filter_map(|(label, total)| {
            let hits = match correct.get(label) {
                Some(&hits) => hits,
                None if label == OVERALL => 0,
                None => return None,
            };
            Some((label.to_string(), hits as f64 / total as f64))
        })
        .collect();

    let report = AccuracyReport { accuracies };
    debug!(overall = report.overall(), "accuracy computed");
    Ok(report)
}
