use hecs::World;

use super::input::InputState;
use super::tracking::{clamp_paddle, elastic_track};
use crate::{Ball, Control, ControlsConfig, Paddle, PaddleIntent, Playfield, Time};

/// Move human-controlled paddles from keyboard intents or the pointer
pub fn move_paddles(
    world: &mut World,
    time: &Time,
    field: &Playfield,
    controls: &ControlsConfig,
    input: &InputState,
) {
    let tracking = controls.player_tracking().scaled(time.dt);
    for (_entity, (paddle, control, intent)) in
        world.query_mut::<(&mut Paddle, &Control, &PaddleIntent)>()
    {
        let desired_top = match control {
            Control::Keyboard => paddle.top + intent.motion * time.dt,
            // Zero-length ticks would snap every upward change
            Control::Pointer if time.dt <= 0.0 => continue,
            Control::Pointer => {
                elastic_track(paddle.top, input.pointer_y, paddle.height, &tracking)
            }
            Control::Ai => continue,
        };
        clamp_paddle(paddle, field, desired_top);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}
