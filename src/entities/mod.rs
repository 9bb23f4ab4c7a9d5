//! [Entities](Entity) represent the individual "things" in your game or application.
//!
//! An [Entity] is a bag of [components](crate::components::Component) keyed by
//! [kind](crate::components::ComponentKind); it has no behaviour of its own.
//! Each live bag is addressed through an [EntityId] issued by the
//! [World](crate::World).

mod entity;

pub use entity::*;
