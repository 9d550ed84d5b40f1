//! Graph data: nodes, edges and connections.
//!
//! Serialized shapes use the same camelCase keys as the JavaScript flow libraries
//! (`type`, `sourceHandle`, `targetHandle`), so a graph can be inspected or exchanged
//! as plain JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::Position;

/// Node type assigned to every dropped block.
pub const DEFAULT_NODE_TYPE: &str = "default";

/// Identifier of a node, e.g. `node_3`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for NodeId {
	fn from(s: &str) -> Self {
		Self::new(s)
	}
}

/// Display payload of a node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
	pub label: String,
}

/// A node on the canvas. `position` is the top-left corner in flow coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
	pub id: NodeId,
	#[serde(rename = "type")]
	pub kind: String,
	pub position: Position,
	pub data: NodeData,
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub selected: bool,
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub dragging: bool,
}

impl Node {
	pub fn new(
		id: NodeId,
		kind: impl Into<String>,
		position: Position,
		label: impl Into<String>,
	) -> Self {
		Self {
			id,
			kind: kind.into(),
			position,
			data: NodeData {
				label: label.into(),
			},
			selected: false,
			dragging: false,
		}
	}

	pub fn label(&self) -> &str {
		&self.data.label
	}
}

/// The endpoints of a connect gesture, before it becomes an [`Edge`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
	pub source: NodeId,
	pub target: NodeId,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source_handle: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target_handle: Option<String>,
}

impl Connection {
	pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			source_handle: None,
			target_handle: None,
		}
	}

	/// Id an edge created from this connection receives.
	pub fn edge_id(&self) -> String {
		format!(
			"reactflow__edge-{}{}-{}{}",
			self.source,
			self.source_handle.as_deref().unwrap_or_default(),
			self.target,
			self.target_handle.as_deref().unwrap_or_default(),
		)
	}
}

/// A directed connection between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
	pub id: String,
	pub source: NodeId,
	pub target: NodeId,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source_handle: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target_handle: Option<String>,
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub selected: bool,
}

impl Edge {
	/// Whether this edge joins the same endpoints and handles as `connection`.
	pub fn matches(&self, connection: &Connection) -> bool {
		self.source == connection.source
			&& self.target == connection.target
			&& self.source_handle == connection.source_handle
			&& self.target_handle == connection.target_handle
	}

	/// Whether `id` is either endpoint.
	pub fn touches(&self, id: &NodeId) -> bool {
		&self.source == id || &self.target == id
	}
}

impl From<Connection> for Edge {
	fn from(connection: Connection) -> Self {
		Self {
			id: connection.edge_id(),
			source: connection.source,
			target: connection.target,
			source_handle: connection.source_handle,
			target_handle: connection.target_handle,
			selected: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	#[test]
	fn node_serializes_like_flow_json() {
		let node = Node::new(
			"node_0".into(),
			DEFAULT_NODE_TYPE,
			Position::new(100.0, 150.0),
			"block A",
		);
		assert_eq!(
			serde_json::to_value(&node).unwrap(),
			json!({
				"id": "node_0",
				"type": "default",
				"position": { "x": 100.0, "y": 150.0 },
				"data": { "label": "block A" },
			})
		);
	}

	#[test]
	fn edge_id_includes_handles() {
		let mut c = Connection::new("node_0", "node_1");
		assert_eq!(c.edge_id(), "reactflow__edge-node_0-node_1");
		c.source_handle = Some("out".into());
		assert_eq!(c.edge_id(), "reactflow__edge-node_0out-node_1");
	}

	#[test]
	fn edge_deserializes_camel_case() {
		let edge: Edge = serde_json::from_value(json!({
			"id": "e1",
			"source": "node_0",
			"target": "node_1",
			"targetHandle": "in",
		}))
		.unwrap();
		assert_eq!(edge.target_handle.as_deref(), Some("in"));
		assert!(edge.touches(&NodeId::from("node_0")));
		assert!(!edge.selected);
	}
}
