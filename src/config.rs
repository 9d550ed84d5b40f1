//! Editor configuration.
//!
//! Defaults reproduce the stock editor. A page can override any field by embedding
//! JSON in `<script id="editor-config" type="application/json">`.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::editor::id::DEFAULT_ID_PREFIX;
use crate::editor::model::DEFAULT_NODE_TYPE;
use crate::editor::palette::{PaletteItem, default_palette};
use crate::editor::transfer::DRAG_FORMAT;

/// DOM id of the script element holding configuration JSON.
pub const CONFIG_ELEMENT_ID: &str = "editor-config";

/// Smallest zoom a config may ask for. The view transform divides by the zoom.
pub const MIN_ZOOM_FLOOR: f64 = 0.01;

/// Which colour scheme the flow surface uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
	#[default]
	Light,
	Dark,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
	/// Prefix of generated node ids.
	pub id_prefix: String,
	/// `type` given to dropped nodes.
	pub node_type: String,
	/// Drag payload key shared by the sidebar and the canvas.
	pub drag_format: String,
	/// Sidebar width in pixels.
	pub sidebar_width: f64,
	pub palette: Vec<PaletteItem>,
	/// Fit existing nodes into view on mount.
	pub fit_view: bool,
	pub min_zoom: f64,
	pub max_zoom: f64,
	pub theme: ThemeName,
	/// Placeholder shown in the node context menu.
	pub context_menu_text: String,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			id_prefix: DEFAULT_ID_PREFIX.to_string(),
			node_type: DEFAULT_NODE_TYPE.to_string(),
			drag_format: DRAG_FORMAT.to_string(),
			sidebar_width: 120.0,
			palette: default_palette(),
			fit_view: true,
			min_zoom: 0.5,
			max_zoom: 2.0,
			theme: ThemeName::Light,
			context_menu_text: "Hello World".to_string(),
		}
	}
}

impl EditorConfig {
	/// Parses configuration JSON; missing fields keep their defaults. Inverted zoom
	/// bounds are swapped and both are kept at or above [`MIN_ZOOM_FLOOR`].
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let mut config: Self = serde_json::from_str(json)?;
		if config.min_zoom > config.max_zoom {
			std::mem::swap(&mut config.min_zoom, &mut config.max_zoom);
		}
		config.min_zoom = config.min_zoom.max(MIN_ZOOM_FLOOR);
		config.max_zoom = config.max_zoom.max(config.min_zoom);
		Ok(config)
	}

	/// Reads the page's config element, falling back to defaults when it is absent
	/// or malformed.
	pub fn load() -> Self {
		let Some(json) = config_element_text() else {
			return Self::default();
		};
		match Self::from_json(&json) {
			Ok(config) => {
				info!(
					"dnd-flow: loaded config with {} palette items",
					config.palette.len()
				);
				config
			}
			Err(e) => {
				warn!("dnd-flow: failed to parse editor config: {}", e);
				Self::default()
			}
		}
	}
}

fn config_element_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn empty_object_yields_defaults() {
		assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
	}

	#[test]
	fn partial_override() {
		let config = EditorConfig::from_json(
			r##"{
				"id_prefix": "n",
				"theme": "dark",
				"palette": [{ "kind": "source", "color": "#fff" }]
			}"##,
		)
		.unwrap();
		assert_eq!(config.id_prefix, "n");
		assert_eq!(config.theme, ThemeName::Dark);
		assert_eq!(config.palette, vec![PaletteItem::new("source", "#fff")]);
		assert_eq!(config.drag_format, DRAG_FORMAT);
	}

	#[test]
	fn inverted_zoom_bounds_are_swapped() {
		let config = EditorConfig::from_json(r#"{ "min_zoom": 4.0, "max_zoom": 0.25 }"#).unwrap();
		assert_eq!((config.min_zoom, config.max_zoom), (0.25, 4.0));
	}

	#[test]
	fn non_positive_zoom_is_raised_to_floor() {
		let config = EditorConfig::from_json(r#"{ "min_zoom": 0.0, "max_zoom": 2.0 }"#).unwrap();
		assert_eq!((config.min_zoom, config.max_zoom), (MIN_ZOOM_FLOOR, 2.0));

		let config = EditorConfig::from_json(r#"{ "min_zoom": -3.0, "max_zoom": -1.0 }"#).unwrap();
		assert_eq!((config.min_zoom, config.max_zoom), (MIN_ZOOM_FLOOR, MIN_ZOOM_FLOOR));
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(EditorConfig::from_json("{ \"fit_view\": 3 ").is_err());
	}
}
