//! Drop handling for the canvas.

use std::fmt;

use super::transfer::{DragTransfer, DropEffect};

/// Where the canvas is in a drag-and-drop interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropState {
	#[default]
	Idle,
	DragOver,
}

/// Reasons a drop does not create a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
	/// The drag carried no (or an empty) type label.
	MissingPayload,
}

impl fmt::Display for DropError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DropError::MissingPayload => write!(f, "drop carried no block type"),
		}
	}
}

impl std::error::Error for DropError {}

/// Tracks drag-over state and extracts the payload on drop.
///
/// The browser only fires `drop` on elements whose `dragover` handler cancels the
/// default action, so the caller must also `prevent_default()` on every dragover.
#[derive(Clone, Debug)]
pub struct DropTarget {
	format: String,
	state: DropState,
}

impl DropTarget {
	pub fn new(format: impl Into<String>) -> Self {
		Self {
			format: format.into(),
			state: DropState::Idle,
		}
	}

	pub fn state(&self) -> DropState {
		self.state
	}

	/// `dragenter`/`dragover`: accept the drag as a move.
	pub fn drag_over(&mut self, transfer: &mut impl DragTransfer) {
		transfer.set_drop_effect(DropEffect::Move);
		self.state = DropState::DragOver;
	}

	/// `dragleave`: the pointer left without dropping.
	pub fn drag_leave(&mut self) {
		self.state = DropState::Idle;
	}

	/// `drop`: returns the dragged type label. Always ends back in `Idle`.
	pub fn take_payload(&mut self, transfer: &impl DragTransfer) -> Result<String, DropError> {
		self.state = DropState::Idle;
		transfer
			.get_data(&self.format)
			.ok_or(DropError::MissingPayload)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::editor::transfer::{DRAG_FORMAT, MemoryTransfer};

	#[test]
	fn dragover_marks_move() {
		let mut target = DropTarget::new(DRAG_FORMAT);
		let mut transfer = MemoryTransfer::new();
		target.drag_over(&mut transfer);
		assert_eq!(target.state(), DropState::DragOver);
		assert_eq!(transfer.drop_effect, DropEffect::Move);
		target.drag_leave();
		assert_eq!(target.state(), DropState::Idle);
	}

	#[test]
	fn drop_without_payload_returns_to_idle() {
		let mut target = DropTarget::new(DRAG_FORMAT);
		let mut transfer = MemoryTransfer::new();
		target.drag_over(&mut transfer);
		assert_eq!(target.take_payload(&transfer), Err(DropError::MissingPayload));
		assert_eq!(target.state(), DropState::Idle);
	}

	#[test]
	fn drop_reads_configured_format() {
		let mut target = DropTarget::new("text/x-block");
		let transfer = MemoryTransfer::with_data("text/x-block", "block A");
		assert_eq!(target.take_payload(&transfer).as_deref(), Ok("block A"));
		assert_eq!(
			target.take_payload(&MemoryTransfer::with_data(DRAG_FORMAT, "block A")),
			Err(DropError::MissingPayload)
		);
	}
}
