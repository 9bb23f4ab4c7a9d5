use crate::components::ComponentKind;
use crate::components::Component;
use crate::entities::{Entity, EntityId};
use crate::systems::{System, SystemId};
use nohash_hasher::NoHashHasher;
use std::hash::BuildHasherDefault;
use std::collections::HashMap;
use parking_lot::Mutex;
use log::{debug, trace};
use thiserror::Error;

type IdHasher = BuildHasherDefault<NoHashHasher<EntityId>>;

/// Errors reported by [World] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
	/// The entity id is not currently live: it was never issued, or has
	/// already been removed. Rejecting the removal keeps the free-list free
	/// of duplicates, which would otherwise hand the same id to two
	/// simultaneously-live entities.
	#[error("entity {0} is not live")]
	EntityNotFound(EntityId),
}

/// A container for [entities](Entity) and [systems](System), generic over the
/// opaque drawing surface `S` handed through to [System::draw].
///
/// Entities are bags of typed components addressed by [EntityId]; systems
/// register interest through their [match predicate](System::matches) and the
/// World caches, per system, the list of matching entity ids. [update](World::update)
/// and [draw](World::draw) then dispatch once per (system, matched entity)
/// pair, in system registration order.
///
/// All state sits behind a single mutex held for the full duration of every
/// public operation. Operations are not re-entrant: a system callback that
/// calls back into its own World will deadlock.
pub struct World<S = ()> {
	state: Mutex<WorldState<S>>,
}

struct WorldState<S> {
	last_id: u32,
	free_ids: Vec<EntityId>,
	systems: Vec<Box<dyn System<S> + Send>>,
	entities: HashMap<EntityId, Entity, IdHasher>,
	// Cache over (systems, entities), indexed by SystemId. Never the source
	// of truth for component data.
	matched: Vec<Vec<EntityId>>,
}

impl<S> World<S> {
	pub fn new() -> Self {
		Self {
			state: Mutex::new(WorldState {
				last_id: 0,
				free_ids: Vec::new(),
				systems: Vec::new(),
				entities: HashMap::default(),
				matched: Vec::new(),
			}),
		}
	}

	/// Stores the given component bag and returns its freshly allocated id.
	///
	/// The most recently freed id is reused if one is available; otherwise a
	/// new id is issued from the monotonic counter. Every registered system
	/// whose predicate accepts the bag gets the id appended to its matched
	/// list. Always succeeds.
	pub fn add_entity(&self, entity: Entity) -> EntityId {
		let mut state = self.state.lock();
		let id = match state.free_ids.pop() {
			Some(id) => id,
			None => {
				state.last_id += 1;
				EntityId::new(state.last_id)
			},
		};

		debug!("add entity {} ({} components)", id, entity.len());

		let WorldState { systems, matched, entities, .. } = &mut *state;
		for (index, system) in systems.iter().enumerate() {
			if system.matches(&entity) {
				matched[index].push(id);
			}
		}

		entities.insert(id, entity);
		id
	}

	/// Removes a live entity, dropping its component bag, purging its id from
	/// every system's matched list and returning the id to the free-list.
	///
	/// Removing an id that is not live is rejected with
	/// [WorldError::EntityNotFound] and leaves the World untouched.
	pub fn remove_entity(&self, id: EntityId) -> Result<(), WorldError> {
		let mut state = self.state.lock();
		if state.entities.remove(&id).is_none() {
			return Err(WorldError::EntityNotFound(id));
		}

		debug!("remove entity {}", id);

		// Swap-removal; the relative order of the surviving ids may change.
		for list in &mut state.matched {
			if let Some(position) = list.iter().position(|&entry| entry == id) {
				list.swap_remove(position);
			}
		}

		state.free_ids.push(id);
		Ok(())
	}

	/// Registers a system under the next [SystemId] and retroactively scans
	/// all live entities, in ascending id order, to populate its matched
	/// list. Systems registered late therefore still observe every
	/// pre-existing entity. There is no way to remove a system.
	pub fn add_system(&self, system: impl System<S> + Send + 'static) -> SystemId {
		let mut state = self.state.lock();
		let id = SystemId::new(state.systems.len());

		let mut live: Vec<EntityId> = state.entities.keys().copied().collect();
		live.sort_unstable_by_key(|entity_id| entity_id.value());

		let matching: Vec<EntityId> = live
			.into_iter()
			.filter(|entity_id| system.matches(&state.entities[entity_id]))
			.collect();

		debug!("add system {} ({} entities matched)", id.index(), matching.len());

		state.matched.push(matching);
		state.systems.push(Box::new(system));
		id
	}

	/// Runs every system's [update](System::update) behaviour once per entity
	/// in its matched list, in system registration order and list order.
	pub fn update(&self) {
		let mut state = self.state.lock();
		let WorldState { systems, matched, entities, .. } = &mut *state;

		for (system, ids) in systems.iter_mut().zip(matched.iter()) {
			trace!("update over {} entities", ids.len());
			for id in ids {
				if let Some(entity) = entities.get_mut(id) {
					system.update(entity);
				}
			}
		}
	}

	/// Same iteration contract as [update](World::update), invoking
	/// [draw](System::draw) with the provided surface instead.
	pub fn draw(&self, surface: &mut S) {
		let mut state = self.state.lock();
		let WorldState { systems, matched, entities, .. } = &mut *state;

		for (system, ids) in systems.iter_mut().zip(matched.iter()) {
			trace!("draw over {} entities", ids.len());
			for id in ids {
				if let Some(entity) = entities.get(id) {
					system.draw(entity, surface);
				}
			}
		}
	}

	/// Whether `id` currently addresses a live entity.
	pub fn is_live(&self, id: EntityId) -> bool {
		self.state.lock().entities.contains_key(&id)
	}

	/// The number of live entities.
	pub fn entity_count(&self) -> usize {
		self.state.lock().entities.len()
	}

	/// The number of components in the bag of a live entity.
	pub fn component_count(&self, id: EntityId) -> Option<usize> {
		self.state.lock().entities.get(&id).map(Entity::len)
	}

	/// Reads a component of a live entity under the World's lock.
	///
	/// Resolves to `None` if the id is dead, the kind is absent, or the value
	/// is not a `T`. The closure must not call back into the World.
	pub fn with_component<T, R>(
		&self, id: EntityId, kind: &ComponentKind, reader: impl FnOnce(&T) -> R,
	) -> Option<R>
	where
		T: Component,
	{
		let state = self.state.lock();
		Some(reader(state.entities.get(&id)?.get::<T>(kind)?))
	}

	/// The ids currently cached as matching the given system, in list order.
	pub fn matched_entities(&self, system: SystemId) -> Option<Vec<EntityId>> {
		self.state.lock().matched.get(system.index()).cloned()
	}
}

impl<S> Default for World<S> {
	fn default() -> Self {
		Self::new()
	}
}
