//! Browser-independent editor logic.
//!
//! Everything here is plain Rust: the Leptos components in `components` translate DOM
//! events into calls on [`EditorSession`] and render what it holds.

pub mod context_menu;
pub mod drop_target;
pub mod geometry;
pub mod id;
pub mod model;
pub mod palette;
pub mod session;
pub mod store;
pub mod transfer;

pub use context_menu::ContextMenu;
pub use drop_target::DropError;
pub use geometry::{Position, Rect, to_canvas_position};
pub use model::{Connection, Edge, Node, NodeId};
pub use session::EditorSession;
pub use store::{EdgeChange, GraphStore, NodeChange};
