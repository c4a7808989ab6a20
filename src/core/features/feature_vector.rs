/// Read-only view over a sample's numeric features, keyed by feature name.
///
/// Implementations must iterate their features in a fixed order: the
/// decision-tree learner relies on [`find_biggest_difference`] picking the
/// same feature every time it compares the same two vectors.
///
/// [`find_biggest_difference`]: FeatureVector::find_biggest_difference
pub trait FeatureVector {
    /// Value of `feature`, or `0.0` when the vector does not carry it.
    fn get(&self, feature: &str) -> f64;

    /// Feature names in the vector's iteration order.
    fn feature_names(&self) -> Vec<&str>;

    /// Name of the feature whose values differ the most (in absolute terms)
    /// between `self` and `other`.
    ///
    /// Ties keep the first feature in iteration order. Returns `None` only if
    /// neither vector carries any feature.
    fn find_biggest_difference(&self, other: &Self) -> Option<String>
    where
        Self: Sized;
}
