pub mod found_node;
pub mod leaf_node;
pub mod node;
pub mod split_node;

pub use found_node::FoundNode;
pub use leaf_node::LeafNode;
pub use node::{Node, NodeIter};
pub use split_node::SplitNode;
