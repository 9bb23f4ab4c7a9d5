use crate::components::ComponentKind;
use crate::entities::Entity;
use crate::sprite::{Atlas, Frame};
use crate::systems::System;
use std::sync::Arc;
use log::trace;

/// The component kind [SpriteAnimator] looks for.
pub const SPRITE: ComponentKind = ComponentKind::new("sprite");

/// A cyclically animated sprite: a list of frame names resolved against a
/// shared [Atlas], held for a fixed number of ticks each.
pub struct Sprite {
	pub frames: Vec<String>,
	/// How many ticks each frame is held for. Must be non-zero for the
	/// animation to resolve.
	pub frame_duration: u32,
	/// Ticks elapsed since the sprite was created.
	pub ticks: u32,
	pub x: f64,
	pub y: f64,
	pub atlas: Arc<Atlas>,
}

impl Sprite {
	pub fn new(atlas: Arc<Atlas>, frames: Vec<String>, frame_duration: u32) -> Self {
		Self {
			frames,
			frame_duration,
			ticks: 0,
			x: 0.0,
			y: 0.0,
			atlas,
		}
	}

	/// Builder-style positioning.
	pub fn at(mut self, x: f64, y: f64) -> Self {
		self.x = x;
		self.y = y;
		self
	}

	/// The index of the active frame: `(ticks / frame_duration) % frames.len()`.
	///
	/// `None` if the frame list is empty or the hold duration is zero.
	pub fn frame_index(&self) -> Option<usize> {
		if self.frames.is_empty() || self.frame_duration == 0 {
			return None;
		}

		Some((self.ticks / self.frame_duration) as usize % self.frames.len())
	}

	/// The name of the active frame.
	pub fn frame_name(&self) -> Option<&str> {
		self.frames.get(self.frame_index()?).map(String::as_str)
	}

	/// The atlas rectangle of the active frame, `None` if the atlas has no
	/// entry under the active name.
	pub fn current_frame(&self) -> Option<&Frame> {
		self.atlas.get(self.frames.get(self.frame_index()?)?)
	}
}

/// The drawing capability an engine surface must expose for sprites to be
/// rendered onto it. Implement this for the host engine's image/screen type;
/// the registry never interprets the surface itself.
pub trait Blitter {
	/// Copies the given atlas rectangle of the sprite-sheet texture to
	/// position `(x, y)`.
	fn blit(&mut self, frame: &Frame, x: f64, y: f64);
}

/// A [System] animating every entity that carries a [SPRITE] component:
/// advances the tick counter on update and blits the active frame on draw.
///
/// Fails closed throughout: entities whose component is missing or of the
/// wrong type, or whose active frame is not in the atlas, are skipped.
pub struct SpriteAnimator;

impl<S: Blitter> System<S> for SpriteAnimator {
	fn matches(&self, entity: &Entity) -> bool {
		entity.contains(&SPRITE)
	}

	fn update(&mut self, entity: &mut Entity) {
		if let Some(sprite) = entity.get_mut::<Sprite>(&SPRITE) {
			sprite.ticks = sprite.ticks.wrapping_add(1);
		}
	}

	fn draw(&mut self, entity: &Entity, surface: &mut S) {
		let Some(sprite) = entity.get::<Sprite>(&SPRITE) else {
			return;
		};

		match sprite.current_frame() {
			Some(frame) => surface.blit(frame, sprite.x, sprite.y),
			None => trace!("sprite has no resolvable frame, skipping"),
		}
	}
}
