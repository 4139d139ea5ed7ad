use hecs::World;

use crate::{
    Control, ControlMode, ControlsConfig, InputEvent, InputQueue, Paddle, PaddleIntent, Playfield,
    Side,
};

/// Held state of one paddle's up/down keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    /// Signed paddle motion implied by the held keys (positive = down)
    pub fn motion(&self, paddle_speed: f32) -> f32 {
        let mut motion = 0.0;
        if self.down {
            motion += paddle_speed;
        }
        if self.up {
            motion -= paddle_speed;
        }
        motion
    }
}

/// Human input state, written only by input handling
#[derive(Debug, Clone, Copy)]
pub struct InputState {
    pub pointer_y: f32, // Last pointer Y inside the play channel
    pub left: HeldKeys,
    pub right: HeldKeys,
}

impl InputState {
    /// Pointer starts on the top bar, like a pointer that never moved
    pub fn new(field: &Playfield) -> Self {
        Self {
            pointer_y: field.inner_top(),
            left: HeldKeys::default(),
            right: HeldKeys::default(),
        }
    }

    pub fn held(&self, side: Side) -> &HeldKeys {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn held_mut(&mut self, side: Side) -> &mut HeldKeys {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Apply one input event to the input state
pub fn handle_input(
    state: &mut InputState,
    event: &InputEvent,
    controls: &ControlsConfig,
    field: &Playfield,
) {
    match event {
        InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => {
            if controls.mode != ControlMode::Keyboard {
                return;
            }
            let pressed = matches!(event, InputEvent::KeyDown(_));
            if !apply_key(state, key, pressed, controls) {
                log::trace!("ignoring unbound key {:?}", key);
            }
        }
        InputEvent::PointerMove(y) => {
            if controls.mode != ControlMode::Pointer {
                return;
            }
            if *y > field.inner_top() && *y < field.inner_bottom() {
                state.pointer_y = *y;
            } else {
                log::trace!("ignoring pointer outside play channel: {}", y);
            }
        }
    }
}

/// Returns false when the key is bound to no active paddle
fn apply_key(state: &mut InputState, key: &str, pressed: bool, controls: &ControlsConfig) -> bool {
    let mut bound = false;
    for side in [Side::Left, Side::Right] {
        if side == Side::Right && !controls.multiplayer {
            continue;
        }
        let keys = controls.keys(side);
        let held = state.held_mut(side);
        if key == keys.up {
            held.up = pressed;
            bound = true;
        }
        if key == keys.down {
            held.down = pressed;
            bound = true;
        }
    }
    bound
}

/// Drain queued input and refresh keyboard intents
pub fn ingest_inputs(
    world: &mut World,
    queue: &mut InputQueue,
    state: &mut InputState,
    controls: &ControlsConfig,
    field: &Playfield,
) {
    for event in queue.drain() {
        handle_input(state, &event, controls, field);
    }

    for (_entity, (paddle, control, intent)) in
        world.query_mut::<(&Paddle, &Control, &mut PaddleIntent)>()
    {
        if *control == Control::Keyboard {
            intent.motion = state.held(paddle.side).motion(controls.paddle_speed);
        }
    }
}
