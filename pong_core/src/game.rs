//! Single Pong session: owns the world and its resources and steps them per tick.

use glam::Vec2;
use hecs::World;

use crate::systems::{reset_ball, InputState};
use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Events, GameRng, InputEvent,
    InputQueue, Paddle, Playfield, Side, Snapshot, Time,
};

pub struct Game {
    pub world: World,
    pub time: Time,
    pub field: Playfield,
    pub config: Config,
    pub events: Events,
    pub queue: InputQueue,
    pub input: InputState,
    pub rng: GameRng,
    pub tick: u64,
}

impl Game {
    /// Validate the config, place both paddles and serve the first ball
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        let field = config.validate()?;
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Left, &config, &field);
        create_paddle(&mut world, Side::Right, &config, &field);

        let mut ball = Ball::new(
            Vec2::ZERO,
            Vec2::new(config.ball_speed_x, config.ball_speed_y),
            config.ball_size,
        );
        reset_ball(&mut ball, &field, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel, ball.size);

        log::info!(
            "session started: mode={:?} multiplayer={} channel=[{}, {}]",
            config.controls.mode,
            config.controls.multiplayer,
            field.inner_top(),
            field.inner_bottom()
        );

        Ok(Self {
            world,
            time: Time::new(0.0, 0.0),
            field,
            input: InputState::new(&field),
            config,
            events: Events::new(),
            queue: InputQueue::new(),
            rng,
            tick: 0,
        })
    }

    /// Queue an input event for the next tick
    pub fn push_event(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Advance the simulation by `dt` seconds and report the new positions
    pub fn tick(&mut self, dt: f32) -> Snapshot {
        self.time.dt = dt.max(0.0);

        step(
            &mut self.world,
            &mut self.time,
            &self.field,
            &self.config,
            &mut self.events,
            &mut self.queue,
            &mut self.input,
            &mut self.rng,
        );
        self.tick += 1;

        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        let position = |side: Side| {
            self.paddle(side)
                .map(|p| Vec2::new(p.x, p.top))
                .unwrap_or(Vec2::ZERO)
        };
        Snapshot {
            tick: self.tick,
            left_paddle: position(Side::Left),
            right_paddle: position(Side::Right),
            ball: self.ball().map(|b| b.pos).unwrap_or(Vec2::ZERO),
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    /// Place the ball directly (serves, replays, tests)
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    pub fn set_paddle_top(&mut self, side: Side, top: f32) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                crate::systems::clamp_paddle(paddle, &self.field, top);
            }
        }
    }
}
