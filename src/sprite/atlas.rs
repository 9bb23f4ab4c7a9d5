use std::collections::HashMap;

/// A rectangle within a sprite-sheet texture, in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
	pub x: u32,
	pub y: u32,
	pub width: u32,
	pub height: u32,
}

/// A mapping from frame name to [Frame] rectangle.
///
/// How the mapping is produced (XML sprite sheets, code, anything else) is
/// the concern of the external atlas source; this type only holds the result.
/// Lookups fail closed with `None` for unknown names.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
	frames: HashMap<String, Frame>,
}

impl Atlas {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: impl Into<String>, frame: Frame) {
		self.frames.insert(name.into(), frame);
	}

	pub fn get(&self, name: &str) -> Option<&Frame> {
		self.frames.get(name)
	}

	pub fn len(&self) -> usize {
		self.frames.len()
	}

	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}
}

impl<N: Into<String>> FromIterator<(N, Frame)> for Atlas {
	fn from_iter<I: IntoIterator<Item = (N, Frame)>>(iter: I) -> Self {
		let mut atlas = Self::new();
		for (name, frame) in iter {
			atlas.insert(name, frame);
		}
		atlas
	}
}
