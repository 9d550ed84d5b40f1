//! Drag-and-drop payload plumbing.
//!
//! The palette and the drop target only talk through [`DragTransfer`], which the
//! browser's `DataTransfer` implements in `components::transfer`. Tests use
//! [`MemoryTransfer`].

use std::collections::HashMap;

/// Payload key under which a palette item stores its type label.
pub const DRAG_FORMAT: &str = "application/reactflow";

/// Drag operation effect, mirroring the DOM's `effectAllowed`/`dropEffect` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropEffect {
	#[default]
	None,
	Move,
}

impl DropEffect {
	pub fn as_str(self) -> &'static str {
		match self {
			DropEffect::None => "none",
			DropEffect::Move => "move",
		}
	}
}

/// The parts of a drag data store the editor needs.
pub trait DragTransfer {
	fn set_data(&mut self, format: &str, data: &str);
	/// Stored value for `format`. Absent and empty payloads both yield `None`.
	fn get_data(&self, format: &str) -> Option<String>;
	fn set_effect_allowed(&mut self, effect: DropEffect);
	fn set_drop_effect(&mut self, effect: DropEffect);
}

/// In-memory drag data store.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransfer {
	data: HashMap<String, String>,
	pub effect_allowed: DropEffect,
	pub drop_effect: DropEffect,
}

impl MemoryTransfer {
	pub fn new() -> Self {
		Self::default()
	}

	/// A store already carrying `data` under `format`.
	pub fn with_data(format: &str, data: &str) -> Self {
		let mut transfer = Self::new();
		transfer.set_data(format, data);
		transfer
	}
}

impl DragTransfer for MemoryTransfer {
	fn set_data(&mut self, format: &str, data: &str) {
		self.data.insert(format.to_string(), data.to_string());
	}

	fn get_data(&self, format: &str) -> Option<String> {
		self.data.get(format).filter(|s| !s.is_empty()).cloned()
	}

	fn set_effect_allowed(&mut self, effect: DropEffect) {
		self.effect_allowed = effect;
	}

	fn set_drop_effect(&mut self, effect: DropEffect) {
		self.drop_effect = effect;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_payload_reads_as_absent() {
		let transfer = MemoryTransfer::with_data(DRAG_FORMAT, "");
		assert_eq!(transfer.get_data(DRAG_FORMAT), None);
		assert_eq!(MemoryTransfer::new().get_data(DRAG_FORMAT), None);
	}

	#[test]
	fn payload_is_keyed_by_format() {
		let transfer = MemoryTransfer::with_data(DRAG_FORMAT, "block A");
		assert_eq!(transfer.get_data(DRAG_FORMAT).as_deref(), Some("block A"));
		assert_eq!(transfer.get_data("text/plain"), None);
	}
}
