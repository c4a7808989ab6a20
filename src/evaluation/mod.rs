mod accuracy;

pub use accuracy::{AccuracyReport, OVERALL, calculate_accuracy};
