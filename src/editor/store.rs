//! Node and edge collections plus the change sets the flow surface emits.

use super::geometry::Position;
use super::model::{Connection, Edge, Node, NodeId};

/// A mutation requested by the flow surface for a single node.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeChange {
	Position {
		id: NodeId,
		position: Position,
		dragging: bool,
	},
	Select {
		id: NodeId,
		selected: bool,
	},
	Remove {
		id: NodeId,
	},
}

/// A mutation requested by the flow surface for a single edge.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeChange {
	Select { id: String, selected: bool },
	Remove { id: String },
}

/// Current graph contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphStore {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
}

impl GraphStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Appends a node and returns a reference to it.
	pub fn add_node(&mut self, node: Node) -> &Node {
		self.nodes.push(node);
		&self.nodes[self.nodes.len() - 1]
	}

	/// Merges a connection into the edge list.
	///
	/// Connections missing an endpoint are ignored, and a connection already present
	/// with the same endpoints and handles is not added twice. Returns the new edge.
	pub fn add_edge(&mut self, connection: Connection) -> Option<&Edge> {
		if connection.source.as_str().is_empty() || connection.target.as_str().is_empty() {
			return None;
		}
		if self.edges.iter().any(|e| e.matches(&connection)) {
			return None;
		}
		self.edges.push(connection.into());
		self.edges.last()
	}

	/// Applies node changes in order. Changes naming unknown nodes are skipped.
	pub fn apply_node_changes(&mut self, changes: impl IntoIterator<Item = NodeChange>) {
		for change in changes {
			match change {
				NodeChange::Position {
					id,
					position,
					dragging,
				} => {
					if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
						node.position = position;
						node.dragging = dragging;
					}
				}
				NodeChange::Select { id, selected } => {
					if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
						node.selected = selected;
					}
				}
				NodeChange::Remove { id } => self.nodes.retain(|n| n.id != id),
			}
		}
	}

	/// Applies edge changes in order. Changes naming unknown edges are skipped.
	pub fn apply_edge_changes(&mut self, changes: impl IntoIterator<Item = EdgeChange>) {
		for change in changes {
			match change {
				EdgeChange::Select { id, selected } => {
					if let Some(edge) = self.edges.iter_mut().find(|e| e.id == id) {
						edge.selected = selected;
					}
				}
				EdgeChange::Remove { id } => self.edges.retain(|e| e.id != id),
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::editor::model::DEFAULT_NODE_TYPE;

	fn store_with(ids: &[&str]) -> GraphStore {
		let mut store = GraphStore::new();
		for (i, id) in ids.iter().enumerate() {
			store.add_node(Node::new(
				(*id).into(),
				DEFAULT_NODE_TYPE,
				Position::new(i as f64 * 10.0, 0.0),
				*id,
			));
		}
		store
	}

	#[test]
	fn add_edge_merges_duplicates() {
		let mut store = store_with(&["a", "b"]);
		assert!(store.add_edge(Connection::new("a", "b")).is_some());
		assert!(store.add_edge(Connection::new("a", "b")).is_none());
		assert!(store.add_edge(Connection::new("b", "a")).is_some());
		assert_eq!(store.edges().len(), 2);
	}

	#[test]
	fn add_edge_allows_self_loops_but_not_missing_endpoints() {
		let mut store = store_with(&["a"]);
		assert!(store.add_edge(Connection::new("a", "a")).is_some());
		assert!(store.add_edge(Connection::new("", "a")).is_none());
		assert_eq!(store.edges().len(), 1);
	}

	#[test]
	fn position_change_moves_only_target() {
		let mut store = store_with(&["a", "b"]);
		store.apply_node_changes([NodeChange::Position {
			id: "b".into(),
			position: Position::new(42.0, 7.0),
			dragging: true,
		}]);
		assert_eq!(store.nodes()[0].position, Position::new(0.0, 0.0));
		assert_eq!(store.nodes()[1].position, Position::new(42.0, 7.0));
		assert!(store.nodes()[1].dragging);
	}

	#[test]
	fn remove_changes_drop_nodes_and_edges() {
		let mut store = store_with(&["a", "b", "c"]);
		store.add_edge(Connection::new("a", "b"));
		store.add_edge(Connection::new("b", "c"));

		let edge_ids: Vec<String> = store.edges().iter().map(|e| e.id.clone()).collect();

		store.apply_node_changes([NodeChange::Remove { id: "b".into() }]);
		store.apply_edge_changes(edge_ids.into_iter().map(|id| EdgeChange::Remove { id }));

		let remaining: Vec<&str> = store.nodes().iter().map(|n| n.id.as_str()).collect();
		assert_eq!(remaining, ["a", "c"]);
		assert!(store.edges().is_empty());
	}

	#[test]
	fn unknown_ids_are_ignored() {
		let mut store = store_with(&["a"]);
		let before = store.clone();
		store.apply_node_changes([NodeChange::Select {
			id: "zzz".into(),
			selected: true,
		}]);
		store.apply_edge_changes([EdgeChange::Remove { id: "nope".into() }]);
		assert_eq!(store, before);
	}
}
