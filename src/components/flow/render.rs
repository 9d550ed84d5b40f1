//! Canvas rendering for the flow surface.
//!
//! Drawing happens in passes for correct z-ordering:
//! 1. Background and dot grid (screen space)
//! 2. Edges, then the in-progress connection line (flow space)
//! 3. Nodes with their handles (flow space)
//! 4. MiniMap (screen space)

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::editor::geometry::{Position, Rect};
use crate::editor::model::{Edge, Node};

use super::edge_path::CubicBezier;
use super::minimap::MinimapProjection;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::{FlowState, edge_curve, node_rect, source_handle, target_handle};
use super::theme::Theme;

/// Dash and gap length of the in-progress connection line, in flow units.
const CONNECTION_DASH: f64 = 5.0;

/// Renders the complete flow to the canvas.
pub fn render(
	state: &FlowState,
	nodes: &[Node],
	edges: &[Edge],
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, &scale, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(nodes, edges, ctx, config, theme);
	draw_connection_line(state, nodes, ctx, config, theme);
	draw_nodes(state, nodes, ctx, config, &scale, theme);

	ctx.restore();

	draw_minimap(state, nodes, ctx, config, theme);
}

fn draw_background(
	state: &FlowState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.set_fill_style_str(&theme.background.color.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	if scale.grid_alpha < 0.01 || scale.grid_gap < 2.0 {
		return;
	}

	// Dots sit on flow-space multiples of the gap, so they pan and zoom with nodes.
	let gap = scale.grid_gap;
	let (ox, oy) = (
		state.transform.x.rem_euclid(gap),
		state.transform.y.rem_euclid(gap),
	);
	ctx.set_fill_style_str(
		&theme
			.background
			.dot_color
			.with_alpha(theme.background.dot_color.a * scale.grid_alpha)
			.to_css(),
	);
	let mut y = oy;
	while y < state.height {
		let mut x = ox;
		while x < state.width {
			ctx.begin_path();
			let _ = ctx.arc(x, y, scale.grid_dot, 0.0, 2.0 * PI);
			ctx.fill();
			x += gap;
		}
		y += gap;
	}
}

fn stroke_curve(ctx: &CanvasRenderingContext2d, curve: &CubicBezier) {
	ctx.begin_path();
	ctx.move_to(curve.start.x, curve.start.y);
	ctx.bezier_curve_to(
		curve.c1.x,
		curve.c1.y,
		curve.c2.x,
		curve.c2.y,
		curve.end.x,
		curve.end.y,
	);
	ctx.stroke();
}

fn draw_edges(
	nodes: &[Node],
	edges: &[Edge],
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	for edge in edges {
		let Some(curve) = edge_curve(edge, nodes, config) else {
			continue;
		};
		let (color, width) = if edge.selected {
			(theme.edge.selected_color, config.edge.line_width * 1.5)
		} else {
			(theme.edge.color, config.edge.line_width)
		};
		ctx.set_stroke_style_str(&color.to_css());
		ctx.set_line_width(width);
		stroke_curve(ctx, &curve);
	}
}

fn draw_connection_line(
	state: &FlowState,
	nodes: &[Node],
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	if !state.connect.active {
		return;
	}
	let Some(source) = state
		.connect
		.source
		.as_ref()
		.and_then(|id| nodes.iter().find(|n| &n.id == id))
	else {
		return;
	};
	let curve = CubicBezier::between(
		source_handle(source, config),
		state.connect.pointer,
		config.edge.curvature,
	);
	ctx.set_stroke_style_str(&theme.edge.connection_color.to_css());
	ctx.set_line_width(config.edge.line_width);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(CONNECTION_DASH),
		&JsValue::from_f64(CONNECTION_DASH),
	));
	stroke_curve(ctx, &curve);
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, r: Rect, radius: f64) {
	let radius = radius.min(r.width / 2.0).min(r.height / 2.0);
	ctx.begin_path();
	ctx.move_to(r.x + radius, r.y);
	let _ = ctx.arc_to(r.right(), r.y, r.right(), r.bottom(), radius);
	let _ = ctx.arc_to(r.right(), r.bottom(), r.x, r.bottom(), radius);
	let _ = ctx.arc_to(r.x, r.bottom(), r.x, r.y, radius);
	let _ = ctx.arc_to(r.x, r.y, r.right(), r.y, radius);
	ctx.close_path();
}

fn draw_handle(ctx: &CanvasRenderingContext2d, at: Position, scale: &ScaledValues, theme: &Theme) {
	ctx.begin_path();
	let _ = ctx.arc(at.x, at.y, scale.handle_radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&theme.node.handle.to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&theme.node.handle_border.to_css());
	ctx.set_line_width(1.0 / scale.k);
	ctx.stroke();
}

fn draw_nodes(
	state: &FlowState,
	nodes: &[Node],
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.set_font(&scale.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for node in nodes {
		let r = node_rect(node, config);
		let hovered = state.hovered.as_ref() == Some(&node.id);

		if node.selected || hovered {
			ctx.set_shadow_color(&theme.node.border.with_alpha(0.25).to_css());
			ctx.set_shadow_blur(if node.selected { 6.0 } else { 4.0 });
		}
		rounded_rect(ctx, r, config.node.corner_radius);
		ctx.set_fill_style_str(&theme.node.fill.to_css());
		ctx.fill();
		ctx.set_shadow_blur(0.0);
		ctx.set_shadow_color("transparent");

		let border = if node.selected {
			theme.node.selected_border
		} else {
			theme.node.border
		};
		ctx.set_stroke_style_str(&border.to_css());
		ctx.set_line_width(if node.selected {
			config.node.border_width * 1.5
		} else {
			config.node.border_width
		});
		ctx.stroke();

		let c = r.center();
		ctx.set_fill_style_str(&theme.node.label.to_css());
		let _ = ctx.fill_text_with_max_width(node.label(), c.x, c.y, r.width - 10.0);

		draw_handle(ctx, target_handle(node, config), scale, theme);
		draw_handle(ctx, source_handle(node, config), scale, theme);
	}
}

fn draw_minimap(
	state: &FlowState,
	nodes: &[Node],
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let mm = &config.minimap;
	let frame = Rect::new(
		state.width - mm.width - mm.margin,
		state.height - mm.height - mm.margin,
		mm.width,
		mm.height,
	);
	if frame.x < 0.0 || frame.y < 0.0 {
		return;
	}

	let view = state.transform.visible_rect(state.width, state.height);
	let content = nodes
		.iter()
		.map(|n| node_rect(n, config))
		.fold(view, |acc, r| acc.union(&r));
	let projection = MinimapProjection::new(content, frame);

	ctx.set_fill_style_str(&theme.minimap.background.to_css());
	ctx.fill_rect(frame.x, frame.y, frame.width, frame.height);

	for node in nodes {
		let r = projection.project_rect(node_rect(node, config));
		let fill = if node.selected {
			theme.minimap.node.darken(0.3)
		} else {
			theme.minimap.node
		};
		ctx.set_fill_style_str(&fill.to_css());
		ctx.fill_rect(r.x, r.y, r.width.max(1.0), r.height.max(1.0));
	}

	// Mask everything outside the visible viewport.
	let v = projection.project_rect(view);
	ctx.save();
	ctx.begin_path();
	ctx.rect(frame.x, frame.y, frame.width, frame.height);
	ctx.rect(v.x, v.y, v.width, v.height);
	ctx.set_fill_style_str(&theme.minimap.mask.to_css());
	ctx.fill_with_canvas_winding_rule(web_sys::CanvasWindingRule::Evenodd);
	ctx.restore();

	ctx.set_stroke_style_str(&theme.minimap.border.to_css());
	ctx.set_line_width(1.0);
	ctx.stroke_rect(frame.x, frame.y, frame.width, frame.height);
}
