//! Sidebar listing the draggable blocks.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::editor::palette::{PaletteItem, drag_start};

/// Fixed-width column of draggable palette tiles.
#[component]
pub fn Sidebar(
	items: Vec<PaletteItem>,
	#[prop(into)] drag_format: String,
	#[prop(default = 120.0)] width: f64,
) -> impl IntoView {
	let tiles = items
		.into_iter()
		.map(|item| {
			let format = drag_format.clone();
			let style = item.style();
			let label = item.kind.clone();
			let on_dragstart = move |ev: DragEvent| {
				if let Some(mut transfer) = ev.data_transfer() {
					drag_start(&item, &format, &mut transfer);
				}
			};
			view! {
				<div class="palette-item" draggable="true" style=style on:dragstart=on_dragstart>
					{label}
				</div>
			}
		})
		.collect_view();

	view! {
		<aside class="sidebar" style={format!("width: {}px; padding: 10px; flex-shrink: 0;", width)}>
			{tiles}
		</aside>
	}
}
