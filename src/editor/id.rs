//! Node identifier generation.

use super::model::NodeId;

/// Default prefix for generated node ids (`node_0`, `node_1`, ...).
pub const DEFAULT_ID_PREFIX: &str = "node_";

/// Issues unique, strictly increasing node ids for one editor session.
///
/// Each session owns its own generator, so two editors mounted on the same page
/// both start at `node_0` without stepping on each other.
#[derive(Clone, Debug)]
pub struct IdGenerator {
	prefix: String,
	next: u64,
}

impl IdGenerator {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			next: 0,
		}
	}

	/// Returns the next id and advances the counter. Ids are never reused.
	pub fn next_id(&mut self) -> NodeId {
		let id = NodeId::new(format!("{}{}", self.prefix, self.next));
		self.next += 1;
		id
	}
}

impl Default for IdGenerator {
	fn default() -> Self {
		Self::new(DEFAULT_ID_PREFIX)
	}
}
