//! Draggable block templates shown in the sidebar.

use serde::Deserialize;

use super::transfer::{DragTransfer, DropEffect};

/// A template the user can drag onto the canvas.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PaletteItem {
	/// Type label carried in the drag payload; becomes the node label.
	pub kind: String,
	/// CSS background colour of the sidebar tile.
	pub color: String,
}

impl PaletteItem {
	pub fn new(kind: impl Into<String>, color: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			color: color.into(),
		}
	}

	/// Inline style for the sidebar tile.
	pub fn style(&self) -> String {
		format!(
			"margin-bottom: 10px; background: {}; padding: 10px; border-radius: 4px; cursor: grab;",
			self.color
		)
	}
}

/// The two stock blocks.
pub fn default_palette() -> Vec<PaletteItem> {
	vec![
		PaletteItem::new("block A", "#A0D8B3"),
		PaletteItem::new("block B", "#F6D776"),
	]
}

/// Encodes `item` into the drag payload under `format` and allows a move.
pub fn drag_start(item: &PaletteItem, format: &str, transfer: &mut impl DragTransfer) {
	transfer.set_data(format, &item.kind);
	transfer.set_effect_allowed(DropEffect::Move);
}
