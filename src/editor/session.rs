//! One editor instance: ids, graph, drop target and context menu.

use log::{debug, info};

use super::context_menu::{ContextMenu, ContextMenuState};
use super::drop_target::{DropError, DropTarget};
use super::geometry::{Position, to_canvas_position};
use super::id::IdGenerator;
use super::model::{Connection, Edge, Node};
use super::store::{EdgeChange, GraphStore, NodeChange};
use super::transfer::DragTransfer;
use crate::config::EditorConfig;

/// All mutable state behind one mounted editor.
///
/// The UI keeps a session in a signal and routes every DOM and flow-surface event
/// through these methods.
#[derive(Clone, Debug)]
pub struct EditorSession {
	ids: IdGenerator,
	node_type: String,
	store: GraphStore,
	drop_target: DropTarget,
	context_menu: ContextMenuState,
}

impl EditorSession {
	pub fn new(config: &EditorConfig) -> Self {
		Self {
			ids: IdGenerator::new(config.id_prefix.clone()),
			node_type: config.node_type.clone(),
			store: GraphStore::new(),
			drop_target: DropTarget::new(config.drag_format.clone()),
			context_menu: ContextMenuState::default(),
		}
	}

	pub fn nodes(&self) -> &[Node] {
		self.store.nodes()
	}

	pub fn edges(&self) -> &[Edge] {
		self.store.edges()
	}

	pub fn store(&self) -> &GraphStore {
		&self.store
	}

	pub fn drop_target(&self) -> &DropTarget {
		&self.drop_target
	}

	pub fn drag_over(&mut self, transfer: &mut impl DragTransfer) {
		self.drop_target.drag_over(transfer);
	}

	pub fn drag_leave(&mut self) {
		self.drop_target.drag_leave();
	}

	/// Creates a node from a drop at viewport point `pointer` on a canvas whose
	/// bounding box starts at `canvas_origin`.
	///
	/// A drop without a payload creates nothing and consumes no id.
	pub fn handle_drop(
		&mut self,
		transfer: &impl DragTransfer,
		pointer: Position,
		canvas_origin: Position,
	) -> Result<&Node, DropError> {
		let kind = self.drop_target.take_payload(transfer)?;
		let position = to_canvas_position(pointer, canvas_origin);
		let node = Node::new(self.ids.next_id(), self.node_type.clone(), position, kind);
		info!(
			"dnd-flow: created {} ({}) at ({}, {})",
			node.id,
			node.label(),
			position.x,
			position.y
		);
		Ok(self.store.add_node(node))
	}

	/// Adds an edge for a connect gesture. Returns `None` when the connection was
	/// merged into an existing edge.
	pub fn connect(&mut self, connection: Connection) -> Option<&Edge> {
		let edge = self.store.add_edge(connection);
		match edge {
			Some(e) => info!("dnd-flow: connected {} -> {}", e.source, e.target),
			None => debug!("dnd-flow: connection already present"),
		}
		edge
	}

	pub fn apply_node_changes(&mut self, changes: Vec<NodeChange>) {
		self.store.apply_node_changes(changes);
	}

	pub fn apply_edge_changes(&mut self, changes: Vec<EdgeChange>) {
		self.store.apply_edge_changes(changes);
	}

	/// Right-click on `node` at viewport point `(x, y)`.
	pub fn open_context_menu(&mut self, x: f64, y: f64, node: Node) {
		debug!("dnd-flow: context menu for {} at ({}, {})", node.id, x, y);
		self.context_menu.open(x, y, node);
	}

	/// Any click on the canvas.
	pub fn close_context_menu(&mut self) {
		self.context_menu.close();
	}

	pub fn context_menu(&self) -> Option<&ContextMenu> {
		self.context_menu.current()
	}
}

impl Default for EditorSession {
	fn default() -> Self {
		Self::new(&EditorConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::editor::transfer::{DRAG_FORMAT, MemoryTransfer};

	#[test]
	fn failed_drop_does_not_consume_an_id() {
		let mut session = EditorSession::default();
		let origin = Position::default();
		assert!(session
			.handle_drop(&MemoryTransfer::new(), Position::new(5.0, 5.0), origin)
			.is_err());
		let transfer = MemoryTransfer::with_data(DRAG_FORMAT, "block A");
		let id = session
			.handle_drop(&transfer, Position::new(5.0, 5.0), origin)
			.unwrap()
			.id
			.clone();
		assert_eq!(id.as_str(), "node_0");
	}

	#[test]
	fn drag_enter_and_over_accept_a_move_until_drop() {
		use crate::editor::drop_target::DropState;
		use crate::editor::transfer::DropEffect;

		let mut session = EditorSession::default();
		let mut transfer = MemoryTransfer::with_data(DRAG_FORMAT, "block A");
		assert_eq!(session.drop_target().state(), DropState::Idle);

		// dragenter, then dragover, go through the same handler.
		session.drag_over(&mut transfer);
		session.drag_over(&mut transfer);
		assert_eq!(session.drop_target().state(), DropState::DragOver);
		assert_eq!(transfer.drop_effect, DropEffect::Move);

		session.drag_leave();
		assert_eq!(session.drop_target().state(), DropState::Idle);

		session.drag_over(&mut transfer);
		session
			.handle_drop(&transfer, Position::new(5.0, 5.0), Position::default())
			.unwrap();
		assert_eq!(session.drop_target().state(), DropState::Idle);
	}

	#[test]
	fn config_controls_ids_and_type() {
		let config = EditorConfig {
			id_prefix: "n".into(),
			node_type: "input".into(),
			..EditorConfig::default()
		};
		let mut session = EditorSession::new(&config);
		let transfer = MemoryTransfer::with_data(DRAG_FORMAT, "block B");
		let node = session
			.handle_drop(&transfer, Position::new(1.0, 2.0), Position::default())
			.unwrap();
		assert_eq!((node.id.as_str(), node.kind.as_str()), ("n0", "input"));
	}
}
