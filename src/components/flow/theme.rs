//! Colours for the flow surface.

use crate::config::ThemeName;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
	pub dot_color: Color,
}

#[derive(Clone, Debug)]
pub struct NodeStyle {
	pub fill: Color,
	pub border: Color,
	pub selected_border: Color,
	pub label: Color,
	pub handle: Color,
	pub handle_border: Color,
}

#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color: Color,
	pub selected_color: Color,
	/// In-progress connection line.
	pub connection_color: Color,
}

#[derive(Clone, Debug)]
pub struct MinimapStyle {
	pub background: Color,
	pub node: Color,
	/// Fill outside the visible viewport.
	pub mask: Color,
	pub border: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: BackgroundStyle,
	pub node: NodeStyle,
	pub edge: EdgeStyle,
	pub minimap: MinimapStyle,
}

impl Theme {
	/// White canvas, grey dots, dark node borders (default)
	pub fn light() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(255, 255, 255),
				dot_color: Color::rgb(145, 145, 154),
			},
			node: NodeStyle {
				fill: Color::rgb(255, 255, 255),
				border: Color::rgb(26, 25, 43),
				selected_border: Color::rgb(26, 25, 43),
				label: Color::rgb(34, 34, 34),
				handle: Color::rgb(26, 25, 43),
				handle_border: Color::rgb(255, 255, 255),
			},
			edge: EdgeStyle {
				color: Color::rgb(177, 177, 183),
				selected_color: Color::rgb(85, 85, 85),
				connection_color: Color::rgb(177, 177, 183),
			},
			minimap: MinimapStyle {
				background: Color::rgb(255, 255, 255),
				node: Color::rgb(226, 226, 226),
				mask: Color::rgba(240, 240, 240, 0.6),
				border: Color::rgba(0, 0, 0, 0.1),
			},
		}
	}

	/// Dark canvas for dimly lit rooms
	pub fn dark() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				dot_color: Color::rgb(70, 78, 90),
			},
			node: NodeStyle {
				fill: Color::rgb(30, 35, 42),
				border: Color::rgb(140, 160, 180),
				selected_border: Color::rgb(220, 230, 240),
				label: Color::rgb(230, 235, 240),
				handle: Color::rgb(140, 160, 180),
				handle_border: Color::rgb(22, 27, 34),
			},
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.7),
				selected_color: Color::rgb(220, 230, 240),
				connection_color: Color::rgba(140, 160, 180, 0.7),
			},
			minimap: MinimapStyle {
				background: Color::rgb(30, 35, 42),
				node: Color::rgb(90, 100, 115),
				mask: Color::rgba(10, 12, 16, 0.6),
				border: Color::rgba(255, 255, 255, 0.1),
			},
		}
	}

	pub fn from_name(name: ThemeName) -> Self {
		match name {
			ThemeName::Light => Self::light(),
			ThemeName::Dark => Self::dark(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}
