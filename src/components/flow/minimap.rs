//! MiniMap projection: maps flow coordinates into the small overview rectangle.

use crate::editor::geometry::{Position, Rect};

/// Fits a flow-space `content` rectangle, centred and aspect-preserving, into the
/// screen-space `frame`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapProjection {
	pub frame: Rect,
	pub scale: f64,
	offset: Position,
}

impl MinimapProjection {
	pub fn new(content: Rect, frame: Rect) -> Self {
		let scale = if content.width <= 0.0 || content.height <= 0.0 {
			1.0
		} else {
			(frame.width / content.width).min(frame.height / content.height)
		};
		let used = (content.width * scale, content.height * scale);
		let offset = Position::new(
			frame.x + (frame.width - used.0) / 2.0 - content.x * scale,
			frame.y + (frame.height - used.1) / 2.0 - content.y * scale,
		);
		Self {
			frame,
			scale,
			offset,
		}
	}

	pub fn project(&self, p: Position) -> Position {
		Position::new(p.x * self.scale + self.offset.x, p.y * self.scale + self.offset.y)
	}

	pub fn project_rect(&self, r: Rect) -> Rect {
		let origin = self.project(Position::new(r.x, r.y));
		Rect::new(origin.x, origin.y, r.width * self.scale, r.height * self.scale)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn content_is_centred_and_scaled() {
		let frame = Rect::new(500.0, 300.0, 200.0, 150.0);
		let m = MinimapProjection::new(Rect::new(0.0, 0.0, 400.0, 150.0), frame);
		assert_eq!(m.scale, 0.5);
		// 75px of height used, centred vertically
		assert_eq!(m.project(Position::new(0.0, 0.0)), Position::new(500.0, 337.5));
		assert_eq!(m.project(Position::new(400.0, 150.0)), Position::new(700.0, 412.5));
	}

	#[test]
	fn projected_rect_stays_inside_frame() {
		let frame = Rect::new(0.0, 0.0, 200.0, 150.0);
		let content = Rect::new(-300.0, 40.0, 900.0, 1200.0);
		let m = MinimapProjection::new(content, frame);
		let r = m.project_rect(content);
		assert!(r.x >= frame.x - 1e-9 && r.right() <= frame.right() + 1e-9);
		assert!(r.y >= frame.y - 1e-9 && r.bottom() <= frame.bottom() + 1e-9);
	}

	#[test]
	fn degenerate_content_does_not_divide_by_zero() {
		let m = MinimapProjection::new(Rect::new(5.0, 5.0, 0.0, 0.0), Rect::new(0.0, 0.0, 20.0, 20.0));
		assert_eq!(m.project(Position::new(5.0, 5.0)), Position::new(10.0, 10.0));
	}
}
