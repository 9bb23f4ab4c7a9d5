pub mod components;
pub mod entities;
pub mod systems;
pub mod sprite;
mod world;

pub use world::{World, WorldError};

pub mod prelude {
	pub use crate::components::{Component, ComponentKind};
	pub use crate::entities::{Entity, EntityId};
	pub use crate::systems::{System, SystemId};
	pub use crate::sprite::{Atlas, Blitter, Frame, Sprite, SpriteAnimator};
	pub use crate::world::{World, WorldError};
}

#[cfg(test)]
mod tests;
