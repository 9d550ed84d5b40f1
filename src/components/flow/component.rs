//! Leptos component wrapping the flow canvas.
//!
//! The component creates an HTML canvas and wires mouse, wheel, keyboard and
//! context-menu handlers for node dragging, connecting, selecting, panning and
//! zooming. The graph itself is owned by the caller: every mutation is reported
//! through the change callbacks and comes back in through the `nodes`/`edges`
//! signals. An animation loop runs via `requestAnimationFrame` and redraws each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent, Window,
};

use crate::editor::{Connection, Edge, EdgeChange, Node, NodeChange, NodeId};

use super::render;
use super::scale::ScaleConfig;
use super::state::{FlowState, Hit, ZOOM_STEP, removal_changes, selection_changes};
use super::theme::Theme;

/// A right-click on a node, in viewport coordinates.
#[derive(Clone, Debug)]
pub struct NodeContextMenu {
	pub client_x: f64,
	pub client_y: f64,
	pub node: Node,
}

/// Bundles interaction state with visual configuration.
struct FlowContext {
	state: FlowState,
	scale: ScaleConfig,
	theme: Theme,
}

type SharedContext = Rc<RefCell<Option<FlowContext>>>;

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0))
}

/// Renders an interactive node graph on a canvas element.
///
/// Nodes are dragged by their body, connected by dragging from the bottom handle to
/// another node, and deleted with Backspace/Delete once selected. The empty pane
/// pans; the wheel zooms. A minimap and zoom controls are drawn on top.
#[component]
pub fn FlowCanvas(
	#[prop(into)] nodes: Signal<Vec<Node>>,
	#[prop(into)] edges: Signal<Vec<Edge>>,
	#[prop(into)] on_nodes_change: Callback<Vec<NodeChange>>,
	#[prop(into)] on_edges_change: Callback<Vec<EdgeChange>>,
	#[prop(into)] on_connect: Callback<Connection>,
	#[prop(optional, into)] on_node_context_menu: Option<Callback<NodeContextMenu>>,
	#[prop(default = false)] fit_view: bool,
	#[prop(default = 0.5)] min_zoom: f64,
	#[prop(default = 2.0)] max_zoom: f64,
	#[prop(optional)] theme: Option<Theme>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: SharedContext = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());
	let (locked, set_locked) = signal(false);

	let emit = move |node_changes: Vec<NodeChange>, edge_changes: Vec<EdgeChange>| {
		if !node_changes.is_empty() {
			on_nodes_change.run(node_changes);
		}
		if !edge_changes.is_empty() {
			on_edges_change.run(edge_changes);
		}
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let window: Window = web_sys::window().unwrap();

		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::warn!("dnd-flow: canvas 2d context unavailable");
			return;
		};

		let scale = ScaleConfig::default();
		let mut state = FlowState::new(w, h, min_zoom, max_zoom);
		if fit_view {
			nodes.with_untracked(|ns| state.fit_view(ns, &scale));
		}
		*context_init.borrow_mut() = Some(FlowContext {
			state,
			scale,
			theme: theme.clone().unwrap_or_default(),
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let (Some(ns), Some(es)) = (nodes.try_get_untracked(), edges.try_get_untracked()) {
				if let Some(ref c) = *context_anim.borrow() {
					render::render(&c.state, &ns, &es, &ctx, &c.scale, &c.theme);
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		// Secondary buttons belong to the context menu.
		if ev.button() != 0 {
			return;
		}
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(canvas) = canvas_ref.get() {
			let _ = canvas.focus();
		}

		let changes = {
			let mut guard = context_md.borrow_mut();
			let Some(c) = guard.as_mut() else {
				return;
			};
			let hit = nodes.with_untracked(|ns| {
				edges.with_untracked(|es| c.state.hit_test(ns, es, x, y, &c.scale))
			});

			match hit {
				Hit::SourceHandle(id) if c.state.interactive => {
					c.state.connect.active = true;
					c.state.connect.pointer = c.state.transform.screen_to_flow(x, y);
					c.state.connect.source = Some(id);
					None
				}
				Hit::SourceHandle(id) | Hit::TargetHandle(id) | Hit::Node(id) => {
					if c.state.interactive {
						let start = nodes.with_untracked(|ns| {
							ns.iter().find(|n| n.id == id).map(|n| n.position)
						});
						if let Some(start) = start {
							c.state.drag.active = true;
							c.state.drag.moved = false;
							c.state.drag.start_x = x;
							c.state.drag.start_y = y;
							c.state.drag.node_start = start;
							c.state.drag.node = Some(id.clone());
						}
					}
					Some(nodes.with_untracked(|ns| {
						edges.with_untracked(|es| selection_changes(ns, es, Some(&id), None))
					}))
				}
				Hit::Edge(id) => Some(nodes.with_untracked(|ns| {
					edges.with_untracked(|es| selection_changes(ns, es, None, Some(&id)))
				})),
				Hit::Pane => {
					c.state.pan.active = true;
					c.state.pan.start_x = x;
					c.state.pan.start_y = y;
					c.state.pan.transform_start_x = c.state.transform.x;
					c.state.pan.transform_start_y = c.state.transform.y;
					Some(nodes.with_untracked(|ns| {
						edges.with_untracked(|es| selection_changes(ns, es, None, None))
					}))
				}
			}
		};
		if let Some((node_changes, edge_changes)) = changes {
			emit(node_changes, edge_changes);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		let moved = {
			let mut guard = context_mm.borrow_mut();
			let Some(c) = guard.as_mut() else {
				return;
			};

			if c.state.drag.active {
				let (dx, dy) = (
					(x - c.state.drag.start_x) / c.state.transform.k,
					(y - c.state.drag.start_y) / c.state.transform.k,
				);
				c.state.drag.moved = true;
				c.state
					.drag
					.node
					.clone()
					.map(|id| (id, c.state.drag.node_start.offset(dx, dy)))
			} else if c.state.connect.active {
				c.state.connect.pointer = c.state.transform.screen_to_flow(x, y);
				None
			} else if c.state.pan.active {
				c.state.transform.x = c.state.pan.transform_start_x + (x - c.state.pan.start_x);
				c.state.transform.y = c.state.pan.transform_start_y + (y - c.state.pan.start_y);
				None
			} else {
				let hovered = nodes.with_untracked(|ns| {
					match c.state.hit_test(ns, &[], x, y, &c.scale) {
						Hit::Node(id) | Hit::SourceHandle(id) | Hit::TargetHandle(id) => Some(id),
						_ => None,
					}
				});
				c.state.hovered = hovered;
				None
			}
		};
		if let Some((id, position)) = moved {
			on_nodes_change.run(vec![NodeChange::Position {
				id,
				position,
				dragging: true,
			}]);
		}
	};

	// Ends every gesture; returns the connection to create and the node whose drag
	// just finished.
	let finish_gestures = move |c: &mut FlowContext,
	                            release: Option<(f64, f64)>|
	      -> (Option<Connection>, Option<NodeId>) {
		let connection = match (&c.state.connect.source, release) {
			(Some(source), Some((x, y))) if c.state.connect.active => nodes
				.with_untracked(|ns| c.state.connection_target(ns, x, y, &c.scale))
				.map(|target| Connection::new(source.clone(), target)),
			_ => None,
		};
		let dropped = c.state.drag.node.clone().filter(|_| c.state.drag.moved);
		c.state.cancel_gestures();
		(connection, dropped)
	};

	let report_finish = move |connection: Option<Connection>, dropped: Option<NodeId>| {
		if let Some(connection) = connection {
			on_connect.run(connection);
		}
		if let Some(id) = dropped {
			let position =
				nodes.with_untracked(|ns| ns.iter().find(|n| n.id == id).map(|n| n.position));
			if let Some(position) = position {
				on_nodes_change.run(vec![NodeChange::Position {
					id,
					position,
					dragging: false,
				}]);
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let release = canvas_point(canvas_ref, &ev);
		let finished = context_mu
			.borrow_mut()
			.as_mut()
			.map(|c| finish_gestures(c, release));
		if let Some((connection, dropped)) = finished {
			report_finish(connection, dropped);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let finished = context_ml.borrow_mut().as_mut().map(|c| {
			c.state.hovered = None;
			finish_gestures(c, None)
		});
		if let Some((connection, dropped)) = finished {
			report_finish(connection, dropped);
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_wh.borrow_mut() {
			c.state.wheel_zoom(x, y, ev.delta_y());
		}
	};

	let context_cm = context.clone();
	let on_contextmenu = move |ev: MouseEvent| {
		let Some(callback) = on_node_context_menu else {
			return;
		};
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		let node = context_cm.borrow().as_ref().and_then(|c| {
			nodes.with_untracked(|ns| match c.state.hit_test(ns, &[], x, y, &c.scale) {
				Hit::Node(id) | Hit::SourceHandle(id) | Hit::TargetHandle(id) => {
					ns.iter().find(|n| n.id == id).cloned()
				}
				_ => None,
			})
		});
		// Right-clicks on the empty pane keep the browser menu.
		if let Some(node) = node {
			ev.prevent_default();
			callback.run(NodeContextMenu {
				client_x: ev.client_x() as f64,
				client_y: ev.client_y() as f64,
				node,
			});
		}
	};

	let context_kd = context.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		if !matches!(ev.key().as_str(), "Backspace" | "Delete") {
			return;
		}
		let interactive = context_kd
			.borrow()
			.as_ref()
			.is_some_and(|c| c.state.interactive);
		if !interactive {
			return;
		}
		ev.prevent_default();
		let (node_changes, edge_changes) =
			nodes.with_untracked(|ns| edges.with_untracked(|es| removal_changes(ns, es)));
		emit(node_changes, edge_changes);
	};

	let context_zi = context.clone();
	let zoom_in = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_zi.borrow_mut() {
			c.state.zoom_by(ZOOM_STEP);
		}
	};

	let context_zo = context.clone();
	let zoom_out = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_zo.borrow_mut() {
			c.state.zoom_by(1.0 / ZOOM_STEP);
		}
	};

	let context_fv = context.clone();
	let fit = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_fv.borrow_mut() {
			nodes.with_untracked(|ns| c.state.fit_view(ns, &c.scale));
		}
	};

	let context_lk = context.clone();
	let toggle_lock = move |_: MouseEvent| {
		let now_locked = !locked.get_untracked();
		set_locked.set(now_locked);
		if let Some(ref mut c) = *context_lk.borrow_mut() {
			c.state.interactive = !now_locked;
			c.state.cancel_gestures();
		}
	};

	view! {
		<div class="flow" style="position: relative; width: 100%; height: 100%; overflow: hidden;">
			<canvas
				node_ref=canvas_ref
				class="flow-canvas"
				tabindex="0"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				on:contextmenu=on_contextmenu
				on:keydown=on_keydown
				style="display: block; position: absolute; top: 0; left: 0; outline: none;"
			/>
			<div
				class="flow-controls"
				style="position: absolute; left: 15px; bottom: 15px; display: flex; flex-direction: column; box-shadow: 0 0 2px 1px rgba(0, 0, 0, 0.08);"
			>
				<button class="flow-controls-button" title="zoom in" on:click=zoom_in>"+"</button>
				<button class="flow-controls-button" title="zoom out" on:click=zoom_out>"-"</button>
				<button class="flow-controls-button" title="fit view" on:click=fit>"⤢"</button>
				<button class="flow-controls-button" title="toggle interactivity" on:click=toggle_lock>
					{move || if locked.get() { "🔒" } else { "🔓" }}
				</button>
			</div>
		</div>
	}
}
