//! Plain 2D geometry shared by the editor and the flow surface.

use serde::{Deserialize, Serialize};

/// A point in canvas or flow coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn offset(self, dx: f64, dy: f64) -> Self {
		Self::new(self.x + dx, self.y + dy)
	}

	pub fn distance(self, other: Position) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Converts a pointer's viewport coordinates into coordinates local to the canvas
/// whose bounding box starts at `canvas_origin`.
pub fn to_canvas_position(pointer: Position, canvas_origin: Position) -> Position {
	Position::new(pointer.x - canvas_origin.x, pointer.y - canvas_origin.y)
}

/// Axis-aligned rectangle (top-left origin).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	pub fn right(&self) -> f64 {
		self.x + self.width
	}

	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	pub fn center(&self) -> Position {
		Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}

	pub fn contains(&self, p: Position) -> bool {
		p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
	}

	/// Smallest rectangle covering both.
	pub fn union(&self, other: &Rect) -> Rect {
		let (x, y) = (self.x.min(other.x), self.y.min(other.y));
		Rect::new(
			x,
			y,
			self.right().max(other.right()) - x,
			self.bottom().max(other.bottom()) - y,
		)
	}

	/// Bounding box of a set of rectangles, `None` when empty.
	pub fn bounding<I: IntoIterator<Item = Rect>>(rects: I) -> Option<Rect> {
		rects.into_iter().reduce(|acc, r| acc.union(&r))
	}
}
