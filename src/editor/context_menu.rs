//! Right-click menu state for nodes.

use super::model::Node;

/// An open context menu: viewport coordinates of the right-click and its node.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextMenu {
	pub x: f64,
	pub y: f64,
	pub node: Node,
}

/// Holds at most one open menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextMenuState {
	open: Option<ContextMenu>,
}

impl ContextMenuState {
	/// Opens (or moves) the menu to `(x, y)` for `node`.
	pub fn open(&mut self, x: f64, y: f64, node: Node) {
		self.open = Some(ContextMenu { x, y, node });
	}

	pub fn close(&mut self) {
		self.open = None;
	}

	pub fn current(&self) -> Option<&ContextMenu> {
		self.open.as_ref()
	}
}
