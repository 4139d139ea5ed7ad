use glam::Vec2;
use serde::Serialize;

use crate::components::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Seconds since the previous tick
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::params::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub round_reset: Option<Side>, // Side that lost the point
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.round_reset = None;
    }
}

/// Raw input delivered by the host between ticks
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    PointerMove(f32), // Playfield-local Y
}

/// Input events waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take every queued event in arrival order
    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.events.drain(..)
    }
}

/// Positions handed to the renderer after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    pub ball: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.ball_hit_paddle = true;
        events.round_reset = Some(Side::Left);

        events.clear();

        assert!(!events.ball_hit_wall);
        assert!(!events.ball_hit_paddle);
        assert_eq!(events.round_reset, None);
    }

    #[test]
    fn test_input_queue_drains_in_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::KeyDown("W".into()));
        queue.push(InputEvent::PointerMove(120.0));
        queue.push(InputEvent::KeyUp("W".into()));

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                InputEvent::KeyDown("W".into()),
                InputEvent::PointerMove(120.0),
                InputEvent::KeyUp("W".into()),
            ]
        );
        assert!(queue.events.is_empty(), "Queue should be empty after drain");
    }

    #[test]
    fn test_game_rng_is_seeded() {
        use rand::Rng;
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        let xs: Vec<u32> = (0..8).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys, "Same seed should give the same sequence");
    }
}
