use hecs::World;
use rand::Rng;

use crate::{Ball, Events, GameRng, Playfield, Side};

/// Recentre the ball and serve it back the way it came.
/// The vertical direction flips with probability one half.
pub fn reset_ball(ball: &mut Ball, field: &Playfield, rng: &mut GameRng) {
    ball.pos = field.center_for(ball.size);
    ball.vel.x = -ball.vel.x;
    if rng.0.gen_bool(0.5) {
        ball.vel.y = -ball.vel.y;
    }
}

/// Reset the round if the ball left the field horizontally
pub fn check_round(world: &mut World, field: &Playfield, events: &mut Events, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let loser = if ball.pos.x < 0.0 {
            Side::Left
        } else if ball.pos.x + ball.size > field.width {
            Side::Right
        } else {
            continue;
        };

        reset_ball(ball, field, rng);
        events.round_reset = Some(loser);
        log::debug!(
            "{:?} side lost the point, serving toward {:?} with velocity {:?}",
            loser,
            loser.opposite(),
            ball.vel
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Playfield, Events, GameRng) {
        let world = World::new();
        let field = Playfield::new(500.0, 500.0, 20.0, 40.0);
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, field, Events::new(), rng)
    }

    fn only_ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("ball should exist")
    }

    #[test]
    fn test_ball_exiting_right_resets() {
        let (mut world, field, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(495.0, 252.0), Vec2::new(5.0, 2.0), 20.0);

        check_round(&mut world, &field, &mut events, &mut rng);

        let ball = only_ball(&world);
        assert_eq!(ball.pos, Vec2::new(240.0, 240.0), "Ball should be recentred");
        assert_eq!(ball.vel.x, -5.0, "Serve goes back toward the left");
        assert_eq!(ball.vel.y.abs(), 2.0);
        assert_eq!(events.round_reset, Some(Side::Right));
    }

    #[test]
    fn test_ball_exiting_left_resets() {
        let (mut world, field, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.5, 100.0), Vec2::new(-5.0, 2.0), 20.0);

        check_round(&mut world, &field, &mut events, &mut rng);

        let ball = only_ball(&world);
        assert_eq!(ball.pos, Vec2::new(240.0, 240.0));
        assert_eq!(ball.vel.x, 5.0);
        assert_eq!(events.round_reset, Some(Side::Left));
    }

    #[test]
    fn test_ball_touching_edges_stays_in_play() {
        let (mut world, field, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(480.0, 100.0), Vec2::new(5.0, 2.0), 20.0);

        check_round(&mut world, &field, &mut events, &mut rng);

        assert_eq!(only_ball(&world).pos, Vec2::new(480.0, 100.0));
        assert_eq!(events.round_reset, None);
    }

    #[test]
    fn test_reset_flips_vertical_about_half_the_time() {
        let (_, field, _, mut rng) = setup_world();
        let resets = 10_000;
        let mut flipped = 0;
        for _ in 0..resets {
            let mut ball = Ball::new(Vec2::ZERO, Vec2::new(5.0, 2.0), 20.0);
            reset_ball(&mut ball, &field, &mut rng);
            if ball.vel.y < 0.0 {
                flipped += 1;
            }
        }
        let fraction = flipped as f32 / resets as f32;
        assert!(
            (fraction - 0.5).abs() < 0.05,
            "Flip fraction should be near one half, got {}",
            fraction
        );
    }
}
