//! [Systems](System) provide the logic for modifying the state of
//! [entities](crate::entities::Entity) and their associated
//! [components](crate::components::Component).
//!
//! A [System] must be manually added to a [World](crate::World) for it to
//! become active; the World caches which entities it matches and drives its
//! per-tick behaviour.

mod system;

pub use system::*;
