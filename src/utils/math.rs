/// Returns the value exactly halfway between `one` and `two`.
///
/// This is the split threshold used when a leaf is divided between two
/// disagreeing samples.
#[inline]
pub fn midpoint(one: f64, two: f64) -> f64 {
    one.min(two) + (one - two).abs() / 2.0
}
