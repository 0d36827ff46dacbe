//! Tree command collaborator

use std::collections::HashMap;
use std::sync::RwLock;

use frontedit_core::Result;

/// A node of the page tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
	/// Stable node identifier
	pub identifier: String,
	/// Current display label
	pub label: String,
}

/// Narrow interface onto the CMS's page tree
pub trait TreeCommands: Send + Sync {
	/// Look up a node by identifier
	fn get_node(&self, identifier: &str) -> Option<TreeNode>;

	/// Update a node's display label
	fn update_node_label(&self, node: &TreeNode, label: &str) -> Result<()>;

	/// Remove a node from the tree
	fn remove_node(&self, node: &TreeNode) -> Result<()>;
}

/// In-memory tree command store
///
/// Stands in for the CMS tree backend in tests and demos.
#[derive(Debug, Default)]
pub struct InMemoryTreeCommands {
	nodes: RwLock<HashMap<String, TreeNode>>,
}

impl InMemoryTreeCommands {
	/// Create a store holding the given nodes
	pub fn with_nodes(nodes: impl IntoIterator<Item = TreeNode>) -> Self {
		let nodes = nodes
			.into_iter()
			.map(|node| (node.identifier.clone(), node))
			.collect();
		Self {
			nodes: RwLock::new(nodes),
		}
	}
}

impl TreeCommands for InMemoryTreeCommands {
	fn get_node(&self, identifier: &str) -> Option<TreeNode> {
		self.nodes
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.get(identifier)
			.cloned()
	}

	fn update_node_label(&self, node: &TreeNode, label: &str) -> Result<()> {
		let mut nodes = self.nodes.write().unwrap_or_else(|e| e.into_inner());
		if let Some(stored) = nodes.get_mut(&node.identifier) {
			stored.label = label.to_string();
		}
		Ok(())
	}

	fn remove_node(&self, node: &TreeNode) -> Result<()> {
		let mut nodes = self.nodes.write().unwrap_or_else(|e| e.into_inner());
		nodes.remove(&node.identifier);
		Ok(())
	}
}
