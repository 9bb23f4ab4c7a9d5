//! Headless stand-in for the engine host: builds an atlas, spawns two
//! animated sprites and drives the world for a fixed number of ticks,
//! blitting to a logging surface instead of a window.
//!
//! Run with `RUST_LOG=info` (or `debug` for registry internals).

use sprite_ecs::prelude::*;
use sprite_ecs::sprite;
use std::sync::Arc;
use log::info;

const TICKS: u32 = 60;

struct LogSurface {
	blits: usize,
}

impl Blitter for LogSurface {
	fn blit(&mut self, frame: &Frame, x: f64, y: f64) {
		self.blits += 1;
		info!(
			"blit {}x{} px from ({}, {}) at ({:+.0}, {:+.0})",
			frame.width, frame.height, frame.x, frame.y, x, y
		);
	}
}

fn main() {
	env_logger::init();

	let atlas: Arc<Atlas> = Arc::new(
		[
			("alienBeige_walk1", Frame { x: 0, y: 0, width: 68, height: 92 }),
			("alienBeige_walk2", Frame { x: 70, y: 0, width: 70, height: 93 }),
			("alienBlue_swim1", Frame { x: 0, y: 95, width: 68, height: 74 }),
			("alienBlue_swim2", Frame { x: 70, y: 95, width: 69, height: 74 }),
		]
		.into_iter()
		.collect(),
	);

	let world: World<LogSurface> = World::new();
	world.add_system(SpriteAnimator);

	world.add_entity(Entity::new().with(
		sprite::SPRITE,
		Sprite::new(
			atlas.clone(),
			vec!["alienBeige_walk1".into(), "alienBeige_walk2".into()],
			5,
		)
		.at(-30.0, -30.0),
	));
	world.add_entity(Entity::new().with(
		sprite::SPRITE,
		Sprite::new(
			atlas,
			vec!["alienBlue_swim1".into(), "alienBlue_swim2".into()],
			20,
		)
		.at(30.0, 30.0),
	));

	let mut surface = LogSurface { blits: 0 };
	for _ in 0..TICKS {
		world.update();
		world.draw(&mut surface);
	}

	info!("{} ticks, {} blits", TICKS, surface.blits);
}
