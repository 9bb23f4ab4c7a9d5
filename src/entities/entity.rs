use crate::components::{Component, ComponentKind};
use std::collections::HashMap;
use std::fmt;

/// An opaque handle to a live [Entity] inside a [World](crate::World).
///
/// Ids are strictly positive and issued monotonically; the id of a removed
/// entity is recycled (most recently freed first). Two ids compare equal only
/// if they refer to the same registry slot; there are no ordering semantics
/// beyond allocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(u32);

impl EntityId {
	pub(crate) const fn new(value: u32) -> Self {
		Self(value)
	}

	/// The raw numeric value of the handle.
	pub const fn value(self) -> u32 {
		self.0
	}
}

impl fmt::Display for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

// The derived Hash forwards a single u32, which is exactly what the
// pass-through hasher expects.
impl nohash_hasher::IsEnabled for EntityId {}

/// A bag of [components](Component) keyed by [ComponentKind].
///
/// The bag owns its component values for the entity's lifetime; systems only
/// ever see a borrowed view during a single callback. Typed access fails
/// closed: a missing kind or a value of a different concrete type resolves to
/// `None` instead of panicking.
#[derive(Default)]
pub struct Entity {
	components: HashMap<ComponentKind, Box<dyn Component>>,
}

impl Entity {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insertion for constructing a bag in one expression.
	pub fn with<T: Component>(mut self, kind: ComponentKind, component: T) -> Self {
		self.insert(kind, component);
		self
	}

	/// Stores `component` under `kind`, replacing any previous value of that kind.
	pub fn insert<T: Component>(&mut self, kind: ComponentKind, component: T) {
		self.components.insert(kind, Box::new(component));
	}

	/// Gets the component stored under `kind`, if present and of type `T`.
	pub fn get<T: Component>(&self, kind: &ComponentKind) -> Option<&T> {
		// as_ref: dispatch on the boxed value, not on the box.
		self.components.get(kind)?.as_ref().as_any().downcast_ref::<T>()
	}

	/// Gets a mutable view of the component stored under `kind`, if present and of type `T`.
	pub fn get_mut<T: Component>(&mut self, kind: &ComponentKind) -> Option<&mut T> {
		self.components.get_mut(kind)?.as_mut().as_any_mut().downcast_mut::<T>()
	}

	/// Drops the component stored under `kind`. Returns whether one was present.
	pub fn remove(&mut self, kind: &ComponentKind) -> bool {
		self.components.remove(kind).is_some()
	}

	pub fn contains(&self, kind: &ComponentKind) -> bool {
		self.components.contains_key(kind)
	}

	/// The number of components in the bag.
	pub fn len(&self) -> usize {
		self.components.len()
	}

	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}

	/// Iterates the kinds present in the bag, in no particular order.
	pub fn kinds(&self) -> impl Iterator<Item = &ComponentKind> {
		self.components.keys()
	}
}

impl fmt::Debug for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.components.keys()).finish()
	}
}
