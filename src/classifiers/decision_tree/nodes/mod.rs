mod decision_node;
mod leaf_node;
mod node;

pub use decision_node::DecisionNode;
pub use leaf_node::LeafNode;
pub use node::Node;
