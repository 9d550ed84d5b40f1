//! Integration tests: drop, connect and context-menu flows through an editor session.

// Test crate links every lib dep, silence noisy lint.
#![allow(unused_crate_dependencies)]

use dnd_flow::EditorConfig;
use dnd_flow::editor::palette::{default_palette, drag_start};
use dnd_flow::editor::transfer::{DRAG_FORMAT, DropEffect, MemoryTransfer};
use dnd_flow::editor::{Connection, EditorSession, Node, NodeChange, Position};
use pretty_assertions::assert_eq;

/// Drags palette item `kind` and drops it at `pointer` on a canvas at `origin`.
fn drag_and_drop(session: &mut EditorSession, kind: &str, pointer: Position, origin: Position) -> Node {
	let item = default_palette()
		.into_iter()
		.find(|i| i.kind == kind)
		.expect("palette item");
	let mut transfer = MemoryTransfer::new();
	drag_start(&item, DRAG_FORMAT, &mut transfer);
	session.drag_over(&mut transfer);
	assert_eq!(transfer.drop_effect, DropEffect::Move);
	session
		.handle_drop(&transfer, pointer, origin)
		.expect("drop with payload")
		.clone()
}

// ─── Drops ──────────────────────────────────────────────────────────────

#[test]
fn drop_creates_node_at_canvas_position() {
	let mut session = EditorSession::default();
	let node = drag_and_drop(
		&mut session,
		"block A",
		Position::new(150.0, 200.0),
		Position::new(50.0, 50.0),
	);

	assert_eq!(
		node,
		Node::new("node_0".into(), "default", Position::new(100.0, 150.0), "block A")
	);
	assert_eq!(session.nodes(), &[node][..]);
}

#[test]
fn consecutive_drops_continue_the_sequence() {
	let mut session = EditorSession::default();
	let origin = Position::new(50.0, 50.0);
	drag_and_drop(&mut session, "block A", Position::new(150.0, 200.0), origin);
	let b1 = drag_and_drop(&mut session, "block B", Position::new(300.0, 80.0), origin);
	let b2 = drag_and_drop(&mut session, "block B", Position::new(320.0, 400.0), origin);

	assert_eq!(b1.id.as_str(), "node_1");
	assert_eq!(b2.id.as_str(), "node_2");
	assert_eq!(b2.label(), "block B");
}

#[test]
fn n_drops_yield_n_distinct_increasing_ids() {
	let mut session = EditorSession::default();
	for i in 0..25 {
		let kind = if i % 2 == 0 { "block A" } else { "block B" };
		drag_and_drop(&mut session, kind, Position::new(i as f64, 0.0), Position::default());
	}

	let ids: Vec<u64> = session
		.nodes()
		.iter()
		.map(|n| {
			n.id
				.as_str()
				.strip_prefix("node_")
				.and_then(|s| s.parse().ok())
				.expect("id follows node_<n>")
		})
		.collect();
	assert_eq!(ids, (0..25).collect::<Vec<u64>>());
}

#[test]
fn drop_without_payload_is_a_no_op() {
	let mut session = EditorSession::default();
	drag_and_drop(&mut session, "block A", Position::new(10.0, 10.0), Position::default());
	let before = session.store().clone();

	let mut empty = MemoryTransfer::new();
	session.drag_over(&mut empty);
	assert!(session.handle_drop(&empty, Position::new(1.0, 1.0), Position::default()).is_err());
	let blank = MemoryTransfer::with_data(DRAG_FORMAT, "");
	assert!(session.handle_drop(&blank, Position::new(1.0, 1.0), Position::default()).is_err());

	assert_eq!(session.store(), &before);
	let next = drag_and_drop(&mut session, "block B", Position::new(0.0, 0.0), Position::default());
	assert_eq!(next.id.as_str(), "node_1");
}

#[test]
fn sessions_do_not_share_ids() {
	let mut first = EditorSession::default();
	let mut second = EditorSession::new(&EditorConfig::default());
	drag_and_drop(&mut first, "block A", Position::default(), Position::default());
	drag_and_drop(&mut first, "block A", Position::default(), Position::default());
	let node = drag_and_drop(&mut second, "block B", Position::default(), Position::default());
	assert_eq!(node.id.as_str(), "node_0");
}

// ─── Connections ────────────────────────────────────────────────────────

#[test]
fn connecting_appends_one_edge_and_keeps_nodes() {
	let mut session = EditorSession::default();
	drag_and_drop(&mut session, "block A", Position::new(0.0, 0.0), Position::default());
	drag_and_drop(&mut session, "block B", Position::new(0.0, 200.0), Position::default());
	let nodes_before = session.nodes().to_vec();

	let edge = session
		.connect(Connection::new("node_0", "node_1"))
		.expect("new edge")
		.clone();

	assert_eq!(session.edges().len(), 1);
	assert_eq!((edge.source.as_str(), edge.target.as_str()), ("node_0", "node_1"));
	assert_eq!(session.nodes(), &nodes_before[..]);
}

#[test]
fn dragging_a_node_only_moves_that_node() {
	let mut session = EditorSession::default();
	drag_and_drop(&mut session, "block A", Position::new(0.0, 0.0), Position::default());
	drag_and_drop(&mut session, "block B", Position::new(0.0, 200.0), Position::default());

	session.apply_node_changes(vec![NodeChange::Position {
		id: "node_1".into(),
		position: Position::new(40.0, 260.0),
		dragging: false,
	}]);

	assert_eq!(session.nodes()[0].position, Position::new(0.0, 0.0));
	assert_eq!(session.nodes()[1].position, Position::new(40.0, 260.0));
}

// ─── Context menu ───────────────────────────────────────────────────────

#[test]
fn right_click_opens_menu_and_click_closes_it() {
	let mut session = EditorSession::default();
	let node = drag_and_drop(&mut session, "block A", Position::new(90.0, 90.0), Position::default());
	assert!(session.context_menu().is_none());

	session.open_context_menu(412.0, 233.0, node.clone());
	let menu = session.context_menu().expect("menu open");
	assert_eq!((menu.x, menu.y), (412.0, 233.0));
	assert_eq!(menu.node, node);

	session.close_context_menu();
	assert!(session.context_menu().is_none());
}
