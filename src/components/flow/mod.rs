//! Interactive node-graph surface.
//!
//! Renders nodes, edges and an in-progress connection on an HTML canvas with:
//! - Node dragging, selection and keyboard deletion
//! - Connection drawing from a node's source handle to another node
//! - Pan, zoom and fit-view, plus a minimap and zoom controls
//! - A dotted background grid that fades out when zoomed far out
//!
//! The surface owns no graph data. It reads `nodes`/`edges` signals and reports
//! every mutation through change callbacks, leaving the caller to apply them.
//!
//! # Example
//!
//! ```ignore
//! use dnd_flow::components::flow::FlowCanvas;
//!
//! view! {
//!     <FlowCanvas
//!         nodes=nodes
//!         edges=edges
//!         on_nodes_change=move |changes| store.update(|s| s.apply_node_changes(changes))
//!         on_edges_change=move |changes| store.update(|s| s.apply_edge_changes(changes))
//!         on_connect=move |c| store.update(|s| { s.add_edge(c); })
//!     />
//! }
//! ```

mod component;
pub mod edge_path;
pub mod minimap;
mod render;
pub mod scale;
pub mod state;
pub mod theme;

pub use component::{FlowCanvas, NodeContextMenu};
pub use theme::Theme;
