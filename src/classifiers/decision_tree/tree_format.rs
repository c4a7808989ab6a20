//! Line-oriented pre-order tree format.
//!
//! A decision node is written as two lines followed by its left and right
//! subtrees:
//!
//! ```text
//! Feature: <feature-name>
//! Threshold: <number>
//! <left subtree>
//! <right subtree>
//! ```
//!
//! A leaf is a single line holding its label.

use crate::classifiers::decision_tree::nodes::Node;
use crate::classifiers::error::ClassifierError;
use crate::core::features::FeatureVector;
use std::io::{self, Write};

pub const FEATURE_PREFIX: &str = "Feature: ";
pub const THRESHOLD_PREFIX: &str = "Threshold: ";

/// Reads one subtree from `lines`.
///
/// Returns `Ok(None)` when the lines are exhausted before a node starts.
pub fn read_node<B, I>(lines: &mut I) -> Result<Option<Node<B>>, ClassifierError>
where
    B: FeatureVector,
    I: Iterator<Item = io::Result<String>>,
{
    let Some(line) = lines.next().transpose()? else {
        return Ok(None);
    };
    let line = line.trim();

    let Some(feature) = line.strip_prefix(FEATURE_PREFIX) else {
        return Ok(Some(Node::leaf(line, None)));
    };
    let feature = feature.to_string();
    let threshold = read_threshold(lines, &feature)?;

    let left = read_node(lines)?;
    let right = read_node(lines)?;
    match (left, right) {
        (Some(left), Some(right)) => Ok(Some(Node::decision(feature, threshold, left, right))),
        _ => Err(ClassifierError::MissingSubtree { feature }),
    }
}

fn read_threshold<I>(lines: &mut I, feature: &str) -> Result<f64, ClassifierError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let missing = || ClassifierError::MissingThreshold {
        feature: feature.to_string(),
    };

    let line = lines.next().transpose()?.ok_or_else(missing)?;
    let value = line
        .trim()
        .strip_prefix(THRESHOLD_PREFIX)
        .ok_or_else(missing)?
        .trim();

    value
        .parse::<f64>()
        .map_err(|source| ClassifierError::InvalidThreshold {
            feature: feature.to_string(),
            value: value.to_string(),
            source,
        })
}

/// Writes `node` and its subtrees in pre-order.
pub fn write_node<B, W>(node: &Node<B>, writer: &mut W) -> io::Result<()>
where
    B: FeatureVector,
    W: Write + ?Sized,
{
    match node {
        Node::Leaf(leaf) => writeln!(writer, "{}", leaf.label()),
        Node::Decision(decision) => {
            writeln!(writer, "{FEATURE_PREFIX}{}", decision.feature())?;
            writeln!(writer, "{THRESHOLD_PREFIX}{:?}", decision.threshold())?;
            write_node(decision.left(), writer)?;
            write_node(decision.right(), writer)
        }
    }
}
