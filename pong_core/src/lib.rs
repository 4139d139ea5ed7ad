pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
    queue: &mut InputQueue,
    input: &mut InputState,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest queued input (held keys, pointer, keyboard intents)
    ingest_inputs(world, queue, input, &config.controls, field);

    // 2. Move human paddles, then AI paddles
    move_paddles(world, time, field, &config.controls, input);
    drive_ai(world, time, field, &config.controls);

    // 3. Move ball
    move_ball(world, time);

    // 4. Check collisions (ball vs bars, paddles)
    check_collisions(world, field, events);

    // 5. Reset the round if the ball left the field
    check_round(world, field, events, rng);

    time.now += time.dt;
}

/// Helper to create a paddle entity resting on the top bar
pub fn create_paddle(
    world: &mut World,
    side: Side,
    config: &Config,
    field: &Playfield,
) -> hecs::Entity {
    let x = field.paddle_x(side, config.paddle_width);
    let top = clamp_top(field, config.paddle_height, 0.0);
    world.spawn((
        Paddle::new(side, x, top, config.paddle_width, config.paddle_height),
        config.controls.control_for(side),
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
