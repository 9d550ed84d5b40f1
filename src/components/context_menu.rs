//! Overlay shown after right-clicking a node.

use leptos::prelude::*;

use crate::editor::ContextMenu;

/// Small box at the right-click position. Has no actions yet.
#[component]
pub fn ContextMenuOverlay(menu: ContextMenu, #[prop(into)] text: String) -> impl IntoView {
	let style = format!(
		"position: absolute; top: {}px; left: {}px; background-color: white; border: 1px solid black; padding: 5px 10px; border-radius: 4px; z-index: 100;",
		menu.y, menu.x
	);

	view! {
		<div class="context-menu" style=style data-node={menu.node.id.to_string()}>
			{text}
		</div>
	}
}
