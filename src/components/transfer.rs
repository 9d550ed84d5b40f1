//! Browser `DataTransfer` as a [`DragTransfer`].

use log::debug;
use web_sys::DataTransfer;

use crate::editor::transfer::{DragTransfer, DropEffect};

impl DragTransfer for DataTransfer {
	fn set_data(&mut self, format: &str, data: &str) {
		if let Err(e) = DataTransfer::set_data(self, format, data) {
			debug!("dnd-flow: could not set drag data: {:?}", e);
		}
	}

	fn get_data(&self, format: &str) -> Option<String> {
		DataTransfer::get_data(self, format)
			.ok()
			.filter(|s| !s.is_empty())
	}

	fn set_effect_allowed(&mut self, effect: DropEffect) {
		DataTransfer::set_effect_allowed(self, effect.as_str());
	}

	fn set_drop_effect(&mut self, effect: DropEffect) {
		DataTransfer::set_drop_effect(self, effect.as_str());
	}
}
