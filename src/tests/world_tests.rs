use crate::components::ComponentKind;
use crate::entities::{Entity, EntityId};
use crate::systems::System;
use crate::{World, WorldError};
use rand::prelude::SliceRandom;
use rand::thread_rng;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Builds a bag with `count` unit components under kinds `cmpt0..cmptN`.
fn bag(count: usize) -> Entity {
	let mut entity = Entity::new();
	for i in 0..count {
		entity.insert(ComponentKind::from(format!("cmpt{i}")), ());
	}
	entity
}

#[derive(Clone, Default)]
struct Trace(Arc<Mutex<Vec<String>>>);

impl Trace {
	fn push(&self, entry: String) {
		self.0.lock().push(entry);
	}

	fn entries(&self) -> Vec<String> {
		self.0.lock().clone()
	}
}

/// Matches bags holding more than `more_than` components and records every
/// callback it receives, tagged by component count.
struct CountThreshold {
	label: &'static str,
	more_than: usize,
	trace: Trace,
}

impl System for CountThreshold {
	fn matches(&self, entity: &Entity) -> bool {
		entity.len() > self.more_than
	}

	fn update(&mut self, entity: &mut Entity) {
		self.trace.push(format!("{} update {}", self.label, entity.len()));
	}

	fn draw(&mut self, entity: &Entity, _surface: &mut ()) {
		self.trace.push(format!("{} draw {}", self.label, entity.len()));
	}
}

#[test]
pub fn ids_are_monotonic_from_one() {
	let world: World = World::new();
	let ids: Vec<u32> = (0..3).map(|_| world.add_entity(bag(1)).value()).collect();

	assert_eq!(ids, [1, 2, 3], "Fresh ids should be issued in allocation order");
	assert_eq!(3, world.entity_count());
}

#[test]
pub fn freed_ids_are_reused_lifo() {
	let world: World = World::new();
	let a = world.add_entity(bag(1));
	let b = world.add_entity(bag(3));
	let c = world.add_entity(bag(5));

	world.remove_entity(a).unwrap();
	world.remove_entity(c).unwrap();

	assert_eq!(c, world.add_entity(bag(0)), "Last freed id should be reused first");
	assert_eq!(a, world.add_entity(bag(0)));
	assert_eq!(
		4,
		world.add_entity(bag(0)).value(),
		"Reuse should not advance the monotonic counter"
	);
	assert!(world.is_live(b));
}

#[test]
pub fn removing_dead_id_is_rejected() {
	let world: World = World::new();
	let a = world.add_entity(bag(1));
	let b = world.add_entity(bag(2));

	assert_eq!(Ok(()), world.remove_entity(b));
	assert_eq!(
		Err(WorldError::EntityNotFound(b)),
		world.remove_entity(b),
		"Removing an already-removed id should report not-found"
	);

	// The rejected removal must not have corrupted the free-list: the freed
	// id comes back exactly once.
	assert_eq!(b, world.add_entity(bag(0)));
	let fresh = world.add_entity(bag(0));
	assert_ne!(b, fresh, "A duplicate free-list entry would reissue a live id");
	assert!(world.is_live(a) && world.is_live(b) && world.is_live(fresh));
}

#[test]
pub fn live_ids_stay_unique_under_churn() {
	let world: World = World::new();
	let mut live: Vec<EntityId> = (0..32).map(|_| world.add_entity(bag(1))).collect();

	live.shuffle(&mut thread_rng());
	let freed: Vec<EntityId> = live.drain(..16).collect();
	for id in &freed {
		world.remove_entity(*id).unwrap();
	}

	for _ in 0..16 {
		let id = world.add_entity(bag(1));
		assert!(!live.contains(&id), "A reissued id may not collide with a live one");
		live.push(id);
	}

	let distinct: HashSet<EntityId> = live.iter().copied().collect();
	assert_eq!(32, distinct.len(), "All live ids should be unique");
	assert_eq!(32, world.entity_count());
	assert!(live.iter().all(|id| world.is_live(*id)));
}

#[test]
pub fn late_system_is_indexed_retroactively() {
	let world: World = World::new();
	let one = world.add_entity(bag(1));
	let three = world.add_entity(bag(3));
	let five = world.add_entity(bag(5));

	let system = world.add_system(CountThreshold {
		label: "s",
		more_than: 2,
		trace: Trace::default(),
	});

	assert_eq!(
		Some(vec![three, five]),
		world.matched_entities(system),
		"A late system should observe exactly the pre-existing matching entities"
	);
	assert!(!world.matched_entities(system).unwrap().contains(&one));
}

#[test]
pub fn added_entities_are_indexed_by_existing_systems() {
	let world: World = World::new();
	let system = world.add_system(CountThreshold {
		label: "s",
		more_than: 2,
		trace: Trace::default(),
	});

	world.add_entity(bag(1));
	let three = world.add_entity(bag(3));

	assert_eq!(Some(vec![three]), world.matched_entities(system));
}

#[test]
pub fn removal_purges_matched_lists_and_storage() {
	let world: World = World::new();
	let system = world.add_system(CountThreshold {
		label: "s",
		more_than: 2,
		trace: Trace::default(),
	});

	world.add_entity(bag(1));
	let b = world.add_entity(bag(3));
	assert_eq!(Some(vec![b]), world.matched_entities(system));

	world.remove_entity(b).unwrap();

	assert_eq!(Some(vec![]), world.matched_entities(system));
	assert_eq!(None, world.component_count(b), "A removed bag must not resolve");
	assert_eq!(
		None,
		world.with_component::<(), ()>(b, &ComponentKind::from("cmpt0"), |_| ())
	);
	assert!(!world.is_live(b));
}

#[test]
pub fn update_dispatches_once_per_pair_in_registration_order() {
	let trace = Trace::default();
	let world: World = World::new();

	world.add_system(CountThreshold {
		label: "a",
		more_than: 1,
		trace: trace.clone(),
	});
	world.add_system(CountThreshold {
		label: "b",
		more_than: 2,
		trace: trace.clone(),
	});

	world.add_entity(bag(2));
	world.add_entity(bag(3));
	world.update();

	assert_eq!(
		vec!["a update 2", "a update 3", "b update 3"],
		trace.entries(),
		"Each (system, matched entity) pair should run exactly once, systems in registration order"
	);
}

#[test]
pub fn draw_follows_the_update_iteration_contract() {
	let trace = Trace::default();
	let world: World = World::new();

	world.add_system(CountThreshold {
		label: "a",
		more_than: 1,
		trace: trace.clone(),
	});
	world.add_system(CountThreshold {
		label: "b",
		more_than: 2,
		trace: trace.clone(),
	});

	world.add_entity(bag(2));
	world.add_entity(bag(3));
	world.draw(&mut ());

	assert_eq!(vec!["a draw 2", "a draw 3", "b draw 3"], trace.entries());
}

/// Matches non-empty bags, then empties them during update.
struct StripComponents {
	trace: Trace,
}

impl System for StripComponents {
	fn matches(&self, entity: &Entity) -> bool {
		!entity.is_empty()
	}

	fn update(&mut self, entity: &mut Entity) {
		self.trace.push(format!("update {}", entity.len()));
		let kinds: Vec<ComponentKind> = entity.kinds().cloned().collect();
		for kind in kinds {
			entity.remove(&kind);
		}
	}
}

#[test]
pub fn match_verdicts_are_cached_across_mutation() {
	let trace = Trace::default();
	let world: World = World::new();

	let system = world.add_system(StripComponents { trace: trace.clone() });
	let id = world.add_entity(bag(2));

	world.update();
	world.update();

	assert_eq!(
		vec!["update 2", "update 0"],
		trace.entries(),
		"An entity mutated out of its match verdict should keep its membership"
	);
	assert_eq!(Some(vec![id]), world.matched_entities(system));

	// Only remove + re-add re-evaluates the predicate.
	world.remove_entity(id).unwrap();
	let readded = world.add_entity(bag(0));
	assert_eq!(id, readded);
	assert_eq!(Some(vec![]), world.matched_entities(system));
}

#[test]
pub fn end_to_end_scenario() {
	let world: World = World::new();
	let a = world.add_entity(bag(1));
	let b = world.add_entity(bag(3));

	let system = world.add_system(CountThreshold {
		label: "s",
		more_than: 2,
		trace: Trace::default(),
	});
	assert_eq!(Some(vec![b]), world.matched_entities(system));

	world.remove_entity(b).unwrap();
	assert_eq!(Some(vec![]), world.matched_entities(system));
	assert_eq!(None, world.component_count(b));

	let c = world.add_entity(bag(0));
	assert_eq!(b, c, "The empty entity should reuse the freed id");
	assert_eq!(Some(vec![]), world.matched_entities(system), "0 components fails the predicate");
	assert_eq!(Some(0), world.component_count(c));
	assert!(world.is_live(a));
}

#[test]
pub fn component_access_is_typed_and_fails_closed() {
	struct Position {
		x: i32,
	}

	const POSITION: ComponentKind = ComponentKind::new("position");

	let world: World = World::new();
	let id = world.add_entity(Entity::new().with(POSITION, Position { x: 7 }));

	assert_eq!(Some(7), world.with_component(id, &POSITION, |p: &Position| p.x));
	assert_eq!(
		None,
		world.with_component::<u32, u32>(id, &POSITION, |v| *v),
		"A type mismatch should resolve to None, not panic"
	);
	assert_eq!(
		None,
		world.with_component(id, &ComponentKind::new("velocity"), |p: &Position| p.x)
	);
}
