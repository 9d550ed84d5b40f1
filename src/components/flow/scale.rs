//! Zoom-dependent sizing for the flow surface.
//!
//! # Coordinate Spaces
//!
//! - **World-space** (flow coordinates): node positions and sizes. Drawn after the
//!   canvas transform, so they grow and shrink with zoom.
//! - **Screen-space**: canvas pixels. Used for things that must stay grabbable or
//!   legible regardless of zoom (handle hit areas, edge hit tolerance).
//!
//! Each tunable declares a [`ScaleBehavior`] that turns its base value into a
//! world-space value for the current zoom `k`.

/// How a size reacts to zoom.
#[derive(Clone, Debug)]
#[allow(
	dead_code,
	reason = "World variant completes the API for users customizing ScaleConfig"
)]
pub enum ScaleBehavior {
	/// Constant world-space size.
	World,
	/// Constant screen-space size in pixels.
	Screen,
	/// World-space size kept within `[min_screen, max_screen]` pixels.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space value of `base` at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// How an opacity reacts to zoom.
#[derive(Clone, Debug)]
#[allow(dead_code, reason = "Constant variant available for custom grids")]
pub enum AlphaBehavior {
	Constant,
	/// Zero at `zero_alpha_k`, fully visible from `full_alpha_k` upwards.
	Fade {
		zero_alpha_k: f64,
		full_alpha_k: f64,
	},
}

impl AlphaBehavior {
	pub fn apply(&self, k: f64) -> f64 {
		match self {
			AlphaBehavior::Constant => 1.0,
			AlphaBehavior::Fade {
				zero_alpha_k,
				full_alpha_k,
			} => {
				if zero_alpha_k == full_alpha_k {
					return 1.0;
				}
				((k - zero_alpha_k) / (full_alpha_k - zero_alpha_k)).clamp(0.0, 1.0)
			}
		}
	}
}

#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Node box size in world units.
	pub width: f64,
	pub height: f64,
	pub corner_radius: f64,
	pub border_width: f64,
	pub label_size: f64,
	/// Connection handle radius in world units.
	pub handle_radius: f64,
	pub handle_behavior: ScaleBehavior,
	/// Radius around a handle that still counts as a hit.
	pub handle_hit_radius: f64,
	pub handle_hit_behavior: ScaleBehavior,
}

#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Line width in world units.
	pub line_width: f64,
	/// Bezier curvature used when the target sits above the source.
	pub curvature: f64,
	/// Pointer distance, in screen pixels, that still selects an edge.
	pub hit_tolerance: f64,
}

#[derive(Clone, Debug)]
pub struct GridScaleConfig {
	/// Distance between dots in world units.
	pub gap: f64,
	pub dot_size: f64,
	pub alpha_behavior: AlphaBehavior,
}

/// MiniMap placement, all in screen pixels.
#[derive(Clone, Debug)]
pub struct MinimapConfig {
	pub width: f64,
	pub height: f64,
	pub margin: f64,
}

/// Complete sizing configuration for the flow surface.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub node: NodeScaleConfig,
	pub edge: EdgeScaleConfig,
	pub grid: GridScaleConfig,
	pub minimap: MinimapConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				width: 150.0,
				height: 40.0,
				corner_radius: 3.0,
				border_width: 1.0,
				label_size: 12.0,
				handle_radius: 3.0,
				handle_behavior: ScaleBehavior::Clamped {
					min_screen: 2.0,
					max_screen: f64::INFINITY,
				},
				handle_hit_radius: 8.0,
				handle_hit_behavior: ScaleBehavior::Clamped {
					min_screen: 8.0,
					max_screen: f64::INFINITY,
				},
			},
			edge: EdgeScaleConfig {
				line_width: 1.0,
				curvature: 0.25,
				hit_tolerance: 6.0,
			},
			grid: GridScaleConfig {
				gap: 20.0,
				dot_size: 1.0,
				alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 0.3,
					full_alpha_k: 0.6,
				},
			},
			minimap: MinimapConfig {
				width: 200.0,
				height: 150.0,
				margin: 15.0,
			},
		}
	}
}

/// Sizes resolved for one zoom level. Build once per frame or per hit test.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub k: f64,
	pub handle_radius: f64,
	pub handle_hit_radius: f64,
	/// Edge hit tolerance in world units.
	pub edge_hit_tolerance: f64,
	pub label_font: String,
	/// Grid spacing and dot radius in screen pixels.
	pub grid_gap: f64,
	pub grid_dot: f64,
	pub grid_alpha: f64,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		Self {
			k,
			handle_radius: config.node.handle_behavior.apply(config.node.handle_radius, k),
			handle_hit_radius: config
				.node
				.handle_hit_behavior
				.apply(config.node.handle_hit_radius, k),
			edge_hit_tolerance: ScaleBehavior::Screen.apply(config.edge.hit_tolerance, k),
			label_font: format!("{}px sans-serif", config.node.label_size),
			grid_gap: config.grid.gap * k,
			grid_dot: (config.grid.dot_size * k).max(0.5),
			grid_alpha: config.grid.alpha_behavior.apply(k),
		}
	}
}
