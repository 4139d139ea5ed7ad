//! Scripted input standing in for a human player

use pong_core::{ControlsConfig, InputEvent, Playfield};

/// Ticks between keyboard direction changes
const KEY_PERIOD: u64 = 45;

/// Pointer sweeping up and down the channel, slightly overshooting both bars
pub fn pointer_events(tick: u64, field: &Playfield) -> Vec<InputEvent> {
    let phase = tick as f32 * 0.03;
    let middle = (field.inner_top() + field.inner_bottom()) / 2.0;
    let reach = field.channel() * 0.55;
    vec![InputEvent::PointerMove(middle + reach * phase.sin())]
}

/// Left paddle alternates between holding down and holding up
pub fn keyboard_events(tick: u64, controls: &ControlsConfig) -> Vec<InputEvent> {
    if tick % KEY_PERIOD != 0 {
        return Vec::new();
    }
    let keys = &controls.left_keys;
    let (release, press) = if (tick / KEY_PERIOD) % 2 == 0 {
        (&keys.up, &keys.down)
    } else {
        (&keys.down, &keys.up)
    };
    vec![
        InputEvent::KeyUp(release.clone()),
        InputEvent::KeyDown(press.clone()),
    ]
}
