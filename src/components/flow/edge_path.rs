//! Edge geometry: the cubic bezier drawn from a source handle (bottom of a node)
//! down to a target handle (top of a node).

use crate::editor::geometry::Position;

/// Segments used to approximate a curve for hit testing.
const HIT_SAMPLES: usize = 24;

/// Control-point offset for a handle, given the vertical distance towards the
/// other end. Edges going backwards (upwards) get a curvature-scaled bulge.
fn control_offset(distance: f64, curvature: f64) -> f64 {
	if distance >= 0.0 {
		0.5 * distance
	} else {
		curvature * 25.0 * (-distance).sqrt()
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
	pub start: Position,
	pub c1: Position,
	pub c2: Position,
	pub end: Position,
}

impl CubicBezier {
	/// Curve leaving `source` downwards and entering `target` from above.
	pub fn between(source: Position, target: Position, curvature: f64) -> Self {
		let offset = control_offset(target.y - source.y, curvature);
		Self {
			start: source,
			c1: Position::new(source.x, source.y + offset),
			c2: Position::new(target.x, target.y - offset),
			end: target,
		}
	}

	pub fn point_at(&self, t: f64) -> Position {
		let mt = 1.0 - t;
		let (a, b, c, d) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
		Position::new(
			a * self.start.x + b * self.c1.x + c * self.c2.x + d * self.end.x,
			a * self.start.y + b * self.c1.y + c * self.c2.y + d * self.end.y,
		)
	}

	/// Approximate shortest distance from `p` to the curve.
	pub fn distance_to(&self, p: Position) -> f64 {
		let mut prev = self.start;
		let mut best = f64::INFINITY;
		for i in 1..=HIT_SAMPLES {
			let next = self.point_at(i as f64 / HIT_SAMPLES as f64);
			best = best.min(segment_distance(p, prev, next));
			prev = next;
		}
		best
	}
}

fn segment_distance(p: Position, a: Position, b: Position) -> f64 {
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	let len_sq = dx * dx + dy * dy;
	if len_sq < f64::EPSILON {
		return p.distance(a);
	}
	let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
	p.distance(Position::new(a.x + t * dx, a.y + t * dy))
}
