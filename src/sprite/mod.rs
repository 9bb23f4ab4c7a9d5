//! Sprite-sheet animation on top of the registry.
//!
//! An [Atlas] is the name-to-rectangle mapping an external sprite-atlas
//! source produces; a [Sprite] component cycles through a list of frame
//! names at a fixed hold duration; the [SpriteAnimator] system advances and
//! blits it through the engine host's [Blitter] surface.

mod animation;
mod atlas;

pub use animation::*;
pub use atlas::*;
