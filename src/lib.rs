//! dnd-flow: drag-and-drop node graph editor.
//!
//! A sidebar of block templates is dragged onto a canvas to create nodes, which can
//! then be moved, connected and right-clicked for a context menu. Editor logic lives
//! in [`editor`] and is browser-independent; [`components`] holds the Leptos views.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info};
use web_sys::DragEvent;

pub mod components;
pub mod config;
pub mod editor;

use crate::components::context_menu::ContextMenuOverlay;
use crate::components::flow::{FlowCanvas, NodeContextMenu, Theme};
use crate::components::sidebar::Sidebar;
pub use crate::config::EditorConfig;
use crate::editor::drop_target::DropState;
use crate::editor::{Connection, EdgeChange, EditorSession, NodeChange, Position};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("dnd-flow: logging initialized");
}

/// Main application component.
/// Reads configuration from the DOM and renders the editor full-screen.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = EditorConfig::load();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Drag and Drop Flow" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<DndFlow config=config />
	}
}

/// Sidebar, canvas and context menu wired to one [`EditorSession`].
#[component]
pub fn DndFlow(config: EditorConfig) -> impl IntoView {
	let session = RwSignal::new(EditorSession::new(&config));
	let nodes = Signal::derive(move || session.with(|s| s.nodes().to_vec()));
	let edges = Signal::derive(move || session.with(|s| s.edges().to_vec()));
	let menu = Memo::new(move |_| session.with(|s| s.context_menu().cloned()));
	let drag_over =
		Memo::new(move |_| session.with(|s| s.drop_target().state() == DropState::DragOver));
	let drop_ref = NodeRef::<leptos::html::Div>::new();

	// Drop never fires unless dragenter and every dragover cancel the default action.
	// Only the Idle -> DragOver edge notifies; repeated dragovers stay untracked.
	let on_dragover = move |ev: DragEvent| {
		ev.prevent_default();
		let Some(mut transfer) = ev.data_transfer() else {
			return;
		};
		if session.with_untracked(|s| s.drop_target().state() == DropState::DragOver) {
			session.update_untracked(|s| s.drag_over(&mut transfer));
		} else {
			session.update(|s| s.drag_over(&mut transfer));
		}
	};

	let on_dragleave = move |_: DragEvent| {
		if session.with_untracked(|s| s.drop_target().state() == DropState::DragOver) {
			session.update(|s| s.drag_leave());
		}
	};

	let on_drop = move |ev: DragEvent| {
		ev.prevent_default();
		let (Some(transfer), Some(target)) = (ev.data_transfer(), drop_ref.get()) else {
			return;
		};
		let rect = target.get_bounding_client_rect();
		let pointer = Position::new(ev.client_x() as f64, ev.client_y() as f64);
		let origin = Position::new(rect.left(), rect.top());
		session.update(|s| {
			if let Err(e) = s.handle_drop(&transfer, pointer, origin) {
				debug!("dnd-flow: drop ignored: {}", e);
			}
		});
	};

	let on_click = move |_: web_sys::MouseEvent| {
		if session.with_untracked(|s| s.context_menu().is_some()) {
			session.update(|s| s.close_context_menu());
		}
	};

	let on_nodes_change =
		move |changes: Vec<NodeChange>| session.update(|s| s.apply_node_changes(changes));
	let on_edges_change =
		move |changes: Vec<EdgeChange>| session.update(|s| s.apply_edge_changes(changes));
	let on_connect = move |connection: Connection| {
		session.update(|s| {
			s.connect(connection);
		})
	};
	let on_node_context_menu = move |ev: NodeContextMenu| {
		session.update(|s| s.open_context_menu(ev.client_x, ev.client_y, ev.node))
	};

	let drag_format = config.drag_format.clone();
	let menu_text = config.context_menu_text.clone();

	view! {
		<div class="dnd-flow" style="height: 100vh; width: 100%;">
			<div style="display: flex; height: 100%;">
				<Sidebar
					items={config.palette.clone()}
					drag_format=drag_format
					width={config.sidebar_width}
				/>
				<div
					node_ref=drop_ref
					class="dnd-canvas"
					style=move || {
						if drag_over.get() {
							"flex-grow: 1; outline: 2px dashed #b1b1b7; outline-offset: -2px;"
						} else {
							"flex-grow: 1;"
						}
					}
					on:drop=on_drop
					on:dragenter=on_dragover
					on:dragover=on_dragover
					on:dragleave=on_dragleave
					on:click=on_click
				>
					<FlowCanvas
						nodes=nodes
						edges=edges
						on_nodes_change=on_nodes_change
						on_edges_change=on_edges_change
						on_connect=on_connect
						on_node_context_menu=on_node_context_menu
						fit_view={config.fit_view}
						min_zoom={config.min_zoom}
						max_zoom={config.max_zoom}
						theme={Theme::from_name(config.theme)}
					/>
					{move || {
						menu.get()
							.map(|m| view! { <ContextMenuOverlay menu=m text={menu_text.clone()} /> })
					}}
				</div>
			</div>
		</div>
	}
}
