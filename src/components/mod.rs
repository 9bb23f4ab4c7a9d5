//! [Components](Component) are the pieces of data attached to an [entity](crate::entities::Entity).
//!
//! The registry never looks inside a component; it stores values opaquely under a
//! [ComponentKind] tag and hands them back to [systems](crate::systems::System),
//! which request them by kind and concrete type.

mod component;

pub use component::*;
