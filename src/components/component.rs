use std::borrow::Cow;
use std::any::Any;
use std::fmt;

/// A tag identifying the semantic role of a component within an
/// [entity](crate::entities::Entity), e.g. `"sprite"`.
///
/// Distinct kinds are independent; an entity holds at most one component value per kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentKind(Cow<'static, str>);

impl ComponentKind {
	/// Creates a kind from a static tag. Usable in `const` items.
	pub const fn new(tag: &'static str) -> Self {
		Self(Cow::Borrowed(tag))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for ComponentKind {
	fn from(tag: &str) -> Self {
		Self(Cow::Owned(tag.to_owned()))
	}
}

impl From<String> for ComponentKind {
	fn from(tag: String) -> Self {
		Self(Cow::Owned(tag))
	}
}

impl fmt::Display for ComponentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// The contract for values stored in an [entity](crate::entities::Entity).
///
/// Blanket-implemented for every `'static + Send` type, so plain structs can be
/// attached without ceremony. The `as_any` hooks exist so that
/// [`Entity::get`](crate::entities::Entity::get) can perform a checked downcast;
/// a mismatch resolves to `None` rather than panicking.
pub trait Component: Any + Send {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any + Send> Component for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
