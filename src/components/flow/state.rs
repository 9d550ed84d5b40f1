//! Flow surface interaction state.
//!
//! Holds the pan/zoom transform, in-progress gestures (node drag, pan, connection)
//! and hit testing against the current nodes and edges. Gesture handlers in the
//! component mutate this, then turn the outcome into change sets for the owner.

use crate::editor::geometry::{Position, Rect};
use crate::editor::model::{Edge, Node, NodeId};
use crate::editor::store::{EdgeChange, NodeChange};

use super::edge_path::CubicBezier;
use super::scale::{ScaleConfig, ScaledValues};

/// Zoom step of the zoom buttons.
pub const ZOOM_STEP: f64 = 1.2;

/// Zoom step of one wheel notch. Zooming out divides by it, so a notch out and a
/// notch back in restore the scale.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Pan and zoom transform: `screen = flow * k + (x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%).
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	pub fn screen_to_flow(&self, sx: f64, sy: f64) -> Position {
		Position::new((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Zooms by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64, min_k: f64, max_k: f64) {
		let new_k = (self.k * factor).clamp(min_k, max_k);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}

	/// Centres `bounds` in a `width` × `height` canvas, leaving `padding` (fraction
	/// of the canvas) free around it.
	pub fn fit(bounds: Rect, width: f64, height: f64, padding: f64, min_k: f64, max_k: f64) -> Self {
		let (avail_w, avail_h) = (width * (1.0 - padding), height * (1.0 - padding));
		let k = if bounds.width <= 0.0 || bounds.height <= 0.0 {
			1.0
		} else {
			(avail_w / bounds.width).min(avail_h / bounds.height)
		}
		.clamp(min_k, max_k);
		let c = bounds.center();
		Self {
			x: width / 2.0 - c.x * k,
			y: height / 2.0 - c.y * k,
			k,
		}
	}

	/// The flow-space rectangle visible in a `width` × `height` canvas.
	pub fn visible_rect(&self, width: f64, height: f64) -> Rect {
		let origin = self.screen_to_flow(0.0, 0.0);
		Rect::new(origin.x, origin.y, width / self.k, height / self.k)
	}
}

/// Tracks an in-progress node drag.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<NodeId>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start: Position,
	pub moved: bool,
}

/// Tracks an in-progress canvas pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Tracks a connection being drawn out of a source handle.
#[derive(Clone, Debug, Default)]
pub struct ConnectState {
	pub active: bool,
	pub source: Option<NodeId>,
	/// Current pointer position in flow coordinates.
	pub pointer: Position,
}

/// What lies under the pointer, in priority order.
#[derive(Clone, Debug, PartialEq)]
pub enum Hit {
	SourceHandle(NodeId),
	TargetHandle(NodeId),
	Node(NodeId),
	Edge(String),
	Pane,
}

/// Box of a node in flow coordinates.
pub fn node_rect(node: &Node, config: &ScaleConfig) -> Rect {
	Rect::new(
		node.position.x,
		node.position.y,
		config.node.width,
		config.node.height,
	)
}

/// Bottom-centre handle where outgoing edges start.
pub fn source_handle(node: &Node, config: &ScaleConfig) -> Position {
	let r = node_rect(node, config);
	Position::new(r.center().x, r.bottom())
}

/// Top-centre handle where incoming edges end.
pub fn target_handle(node: &Node, config: &ScaleConfig) -> Position {
	let r = node_rect(node, config);
	Position::new(r.center().x, r.y)
}

/// Curve of `edge`, or `None` if an endpoint is not in `nodes`.
pub fn edge_curve(edge: &Edge, nodes: &[Node], config: &ScaleConfig) -> Option<CubicBezier> {
	let source = nodes.iter().find(|n| n.id == edge.source)?;
	let target = nodes.iter().find(|n| n.id == edge.target)?;
	Some(CubicBezier::between(
		source_handle(source, config),
		target_handle(target, config),
		config.edge.curvature,
	))
}

/// Changes that leave exactly `node` or `edge` (or nothing) selected. Items already
/// in the wanted state produce no change.
pub fn selection_changes(
	nodes: &[Node],
	edges: &[Edge],
	node: Option<&NodeId>,
	edge: Option<&str>,
) -> (Vec<NodeChange>, Vec<EdgeChange>) {
	let node_changes = nodes
		.iter()
		.filter_map(|n| {
			let want = node == Some(&n.id);
			(n.selected != want).then(|| NodeChange::Select {
				id: n.id.clone(),
				selected: want,
			})
		})
		.collect();
	let edge_changes = edges
		.iter()
		.filter_map(|e| {
			let want = edge == Some(e.id.as_str());
			(e.selected != want).then(|| EdgeChange::Select {
				id: e.id.clone(),
				selected: want,
			})
		})
		.collect();
	(node_changes, edge_changes)
}

/// Changes deleting the selected nodes, the selected edges and every edge attached
/// to a deleted node.
pub fn removal_changes(nodes: &[Node], edges: &[Edge]) -> (Vec<NodeChange>, Vec<EdgeChange>) {
	let removed: Vec<&NodeId> = nodes.iter().filter(|n| n.selected).map(|n| &n.id).collect();
	let node_changes = removed
		.iter()
		.map(|&id| NodeChange::Remove { id: id.clone() })
		.collect();
	let edge_changes = edges
		.iter()
		.filter(|e| e.selected || removed.iter().any(|id| e.touches(id)))
		.map(|e| EdgeChange::Remove { id: e.id.clone() })
		.collect();
	(node_changes, edge_changes)
}

/// Interaction state of one mounted flow surface.
pub struct FlowState {
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub connect: ConnectState,
	pub hovered: Option<NodeId>,
	pub width: f64,
	pub height: f64,
	/// When false, nodes cannot be dragged, connected or deleted.
	pub interactive: bool,
	pub min_zoom: f64,
	pub max_zoom: f64,
}

impl FlowState {
	pub fn new(width: f64, height: f64, min_zoom: f64, max_zoom: f64) -> Self {
		Self {
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			connect: ConnectState::default(),
			hovered: None,
			width,
			height,
			interactive: true,
			min_zoom,
			max_zoom,
		}
	}

	/// Finds what is under the canvas point `(sx, sy)`. Later nodes are drawn on
	/// top, so they win.
	pub fn hit_test(
		&self,
		nodes: &[Node],
		edges: &[Edge],
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Hit {
		let p = self.transform.screen_to_flow(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);

		// Topmost node first; a node's handles sit above its own body only.
		for node in nodes.iter().rev() {
			if source_handle(node, config).distance(p) <= scale.handle_hit_radius {
				return Hit::SourceHandle(node.id.clone());
			}
			if target_handle(node, config).distance(p) <= scale.handle_hit_radius {
				return Hit::TargetHandle(node.id.clone());
			}
			if node_rect(node, config).contains(p) {
				return Hit::Node(node.id.clone());
			}
		}
		edges
			.iter()
			.rev()
			.find(|e| {
				edge_curve(e, nodes, config)
					.is_some_and(|c| c.distance_to(p) <= scale.edge_hit_tolerance)
			})
			.map_or(Hit::Pane, |e| Hit::Edge(e.id.clone()))
	}

	/// Node a connection released at `(sx, sy)` should end on: a target handle, or
	/// the body of any node other than the source.
	pub fn connection_target(
		&self,
		nodes: &[Node],
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<NodeId> {
		match self.hit_test(nodes, &[], sx, sy, config) {
			Hit::TargetHandle(id) => Some(id),
			Hit::Node(id) | Hit::SourceHandle(id) if self.connect.source.as_ref() != Some(&id) => {
				Some(id)
			}
			_ => None,
		}
	}

	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		self.transform
			.zoom_at(sx, sy, factor, self.min_zoom, self.max_zoom);
	}

	/// Wheel zoom around the cursor. Positive `delta_y` (scrolling down) zooms out.
	pub fn wheel_zoom(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 {
			1.0 / WHEEL_ZOOM_STEP
		} else {
			WHEEL_ZOOM_STEP
		};
		self.zoom_at(sx, sy, factor);
	}

	/// Zoom around the canvas centre (zoom buttons).
	pub fn zoom_by(&mut self, factor: f64) {
		let (cx, cy) = (self.width / 2.0, self.height / 2.0);
		self.zoom_at(cx, cy, factor);
	}

	/// Fits all `nodes` into view. Does nothing for an empty graph.
	pub fn fit_view(&mut self, nodes: &[Node], config: &ScaleConfig) {
		let Some(bounds) = Rect::bounding(nodes.iter().map(|n| node_rect(n, config))) else {
			return;
		};
		self.transform = ViewTransform::fit(
			bounds,
			self.width,
			self.height,
			0.1,
			self.min_zoom,
			self.max_zoom,
		);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Abandons every gesture in progress.
	pub fn cancel_gestures(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
		self.connect = ConnectState::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::editor::model::Connection;

	fn node(id: &str, x: f64, y: f64) -> Node {
		Node::new(id.into(), "default", Position::new(x, y), id)
	}

	#[test]
	fn zoom_keeps_cursor_point_fixed() {
		let mut t = ViewTransform {
			x: 30.0,
			y: -10.0,
			k: 1.0,
		};
		let before = t.screen_to_flow(200.0, 120.0);
		t.zoom_at(200.0, 120.0, ZOOM_STEP, 0.5, 2.0);
		let after = t.screen_to_flow(200.0, 120.0);
		assert!((before.x - after.x).abs() < 1e-9 && (before.y - after.y).abs() < 1e-9);
		assert!((t.k - 1.2).abs() < 1e-12);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut t = ViewTransform::default();
		for _ in 0..20 {
			t.zoom_at(0.0, 0.0, ZOOM_STEP, 0.5, 2.0);
		}
		assert_eq!(t.k, 2.0);
	}

	#[test]
	fn wheel_out_then_in_restores_scale() {
		let mut s = FlowState::new(800.0, 600.0, 0.5, 2.0);
		s.wheel_zoom(310.0, 170.0, 100.0);
		assert!(s.transform.k < 1.0);
		s.wheel_zoom(310.0, 170.0, -100.0);
		assert!((s.transform.k - 1.0).abs() < 1e-12);
		assert!(s.transform.x.abs() < 1e-9 && s.transform.y.abs() < 1e-9);
	}

	#[test]
	fn fit_centres_bounds() {
		let bounds = Rect::new(100.0, 100.0, 200.0, 100.0);
		let t = ViewTransform::fit(bounds, 800.0, 600.0, 0.1, 0.5, 2.0);
		assert_eq!(t.k, 2.0);
		assert_eq!(t.screen_to_flow(400.0, 300.0), bounds.center());
	}

	#[test]
	fn fit_view_ignores_empty_graph() {
		let mut s = FlowState::new(800.0, 600.0, 0.5, 2.0);
		s.fit_view(&[], &ScaleConfig::default());
		assert_eq!(s.transform, ViewTransform::default());
	}

	#[test]
	fn hit_test_priorities() {
		let config = ScaleConfig::default();
		let s = FlowState::new(800.0, 600.0, 0.5, 2.0);
		let nodes = vec![node("a", 0.0, 0.0), node("b", 0.0, 200.0)];
		let edges = vec![Edge::from(Connection::new("a", "b"))];

		assert_eq!(s.hit_test(&nodes, &edges, 75.0, 40.0, &config), Hit::SourceHandle("a".into()));
		assert_eq!(s.hit_test(&nodes, &edges, 75.0, 200.0, &config), Hit::TargetHandle("b".into()));
		assert_eq!(s.hit_test(&nodes, &edges, 20.0, 20.0, &config), Hit::Node("a".into()));
		assert_eq!(s.hit_test(&nodes, &edges, 75.0, 120.0, &config), Hit::Edge(edges[0].id.clone()));
		assert_eq!(s.hit_test(&nodes, &edges, 500.0, 500.0, &config), Hit::Pane);
	}

	#[test]
	fn upper_node_hides_handles_beneath_it() {
		let config = ScaleConfig::default();
		let s = FlowState::new(800.0, 600.0, 0.5, 2.0);
		let nodes = vec![node("a", 0.0, 0.0), node("b", 0.0, 20.0)];

		// a's source handle lies under b's body.
		assert_eq!(s.hit_test(&nodes, &[], 75.0, 40.0, &config), Hit::Node("b".into()));
		assert_eq!(s.hit_test(&nodes, &[], 20.0, 5.0, &config), Hit::Node("a".into()));
		assert_eq!(s.hit_test(&nodes, &[], 75.0, 60.0, &config), Hit::SourceHandle("b".into()));
	}

	#[test]
	fn selecting_a_node_deselects_the_rest() {
		let mut nodes = vec![node("a", 0.0, 0.0), node("b", 0.0, 100.0)];
		nodes[0].selected = true;
		let mut edges = vec![Edge::from(Connection::new("a", "b"))];
		edges[0].selected = true;

		let (n, e) = selection_changes(&nodes, &edges, Some(&"b".into()), None);
		assert_eq!(
			n,
			vec![
				NodeChange::Select {
					id: "a".into(),
					selected: false
				},
				NodeChange::Select {
					id: "b".into(),
					selected: true
				},
			]
		);
		assert_eq!(
			e,
			vec![EdgeChange::Select {
				id: edges[0].id.clone(),
				selected: false
			}]
		);
	}

	#[test]
	fn removal_takes_attached_edges() {
		let mut nodes = vec![node("a", 0.0, 0.0), node("b", 0.0, 100.0), node("c", 0.0, 200.0)];
		nodes[1].selected = true;
		let edges = vec![
			Edge::from(Connection::new("a", "b")),
			Edge::from(Connection::new("a", "c")),
		];
		let (n, e) = removal_changes(&nodes, &edges);
		assert_eq!(n, vec![NodeChange::Remove { id: "b".into() }]);
		assert_eq!(
			e,
			vec![EdgeChange::Remove {
				id: edges[0].id.clone()
			}]
		);
	}

	#[test]
	fn connection_never_ends_on_source_body() {
		let config = ScaleConfig::default();
		let mut s = FlowState::new(800.0, 600.0, 0.5, 2.0);
		let nodes = vec![node("a", 0.0, 0.0), node("b", 300.0, 0.0)];
		s.connect.source = Some("a".into());
		assert_eq!(s.connection_target(&nodes, 20.0, 20.0, &config), None);
		assert_eq!(s.connection_target(&nodes, 320.0, 20.0, &config), Some("b".into()));
		assert_eq!(s.connection_target(&nodes, 75.0, 0.0, &config), Some("a".into()));
	}
}
