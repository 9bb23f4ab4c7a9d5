use crate::entities::Entity;

/// The capability set the [World](crate::World) dispatches over, generic over
/// the opaque drawing surface `S` the engine host supplies.
///
/// `matches` must be pure and stable for a fixed bag: the World evaluates it
/// once, when the entity/system relation is established, and caches the
/// verdict. Mutating components afterwards does not change membership until
/// the entity is removed and re-added.
pub trait System<S = ()> {
	/// Whether this system is interested in the given entity.
	fn matches(&self, entity: &Entity) -> bool;

	/// Per-tick simulation step. Receives a mutable view of the bag for the
	/// duration of this call only.
	fn update(&mut self, _entity: &mut Entity) {}

	/// Per-tick render step. The surface is an external collaborator the
	/// registry passes through untouched.
	fn draw(&mut self, _entity: &Entity, _surface: &mut S) {}
}

/// The registration index of a [System] within a [World](crate::World).
///
/// Assigned in registration order, starting at 0. Only used to key the
/// system's matched-entity list; systems cannot be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemId(usize);

impl SystemId {
	pub(crate) const fn new(index: usize) -> Self {
		Self(index)
	}

	pub const fn index(self) -> usize {
		self.0
	}
}
